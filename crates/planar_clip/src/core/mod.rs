//! Core configuration shared by the clipping subsystems

pub mod config;
