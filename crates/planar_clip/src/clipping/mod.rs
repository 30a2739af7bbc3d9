//! Planar clipping component
//!
//! [`PlanarClipping`] owns the clipping plane and the active flag. Every
//! transition pushes the plane to the actor's materials and then re-evaluates
//! the collision state of every shape, before returning.

pub mod component;

pub use component::{ClipTargets, ClipUpdate, PlanarClipping};

use thiserror::Error;

use crate::foundation::math::Vec3;

/// Errors from building a clipping plane
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClipError {
    /// The plane normal is too short to normalize
    #[error("Plane normal {0:?} is too short to normalize")]
    DegenerateNormal(Vec3),

    /// A point or transform contained NaN or infinity
    #[error("Plane input is not finite")]
    NonFinite,
}
