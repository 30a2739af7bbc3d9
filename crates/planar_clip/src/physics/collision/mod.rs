//! Collision shapes and plane classification
//!
//! # Module Organization
//!
//! - [`primitives`] - World-space sphere, oriented box and capsule with
//!   their above-plane predicates
//! - [`shape`] - Bone-space shape elements and world-space restatement
//!
//! Shapes are stored in bone space and transformed on demand, following the
//! same model-space storage used by the rest of the physics module.

pub mod primitives;
pub mod shape;

pub use primitives::{BoundingSphere, Capsule, OrientedBox};
pub use shape::{CollisionShape, ShapeScale, WorldSpaceShape};
