//! Scene-level composition
//!
//! An [`Actor`] owns its meshes, its skeletal body and its clipping state.
//! [`ActorDescription`] builds actors from RON or TOML files.

pub mod actor;
pub mod description;

pub use actor::Actor;
pub use description::{ActorDescription, MaterialDescription, MeshDescription, SkeletalDescription};

use thiserror::Error;

use crate::config::ConfigError;

/// Errors from loading or building a scene description
#[derive(Error, Debug)]
pub enum SceneError {
    /// A mesh slot names a material that was not declared
    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    /// The description file could not be loaded
    #[error("Scene description error: {0}")]
    Config(#[from] ConfigError),
}
