//! # Planar Clip
//!
//! Plane-based clipping for scene actors.
//!
//! Given an oriented cutting plane, an actor's [`PlanarClipping`] component:
//!
//! - **Materials**: pushes the plane `(A, B, C, D)` into the `"ClippingPlane"`
//!   vector parameter of every material, so the shader can discard geometry
//!   on the hidden side
//! - **Collision**: disables query and physics collision on every rigid-body
//!   shape (sphere, box, capsule) that lies entirely on the hidden side,
//!   keeping shapes that touch or cross the plane active
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use planar_clip::prelude::*;
//!
//! let material = Arc::new(Material::new(MaterialId(1)).with_name("skin"));
//! let mut actor = Actor::new("dummy", ClippingConfig::default())
//!     .with_mesh(MeshComponent::new("body").with_material(material));
//!
//! let update = actor.activate_clipping(Plane::new(0.0, 1.0, 0.0, 0.5));
//! assert_eq!(update.materials_updated, 1);
//! assert!(actor.clipping().is_active());
//!
//! actor.deactivate_clipping();
//! assert!(actor.clipping().plane().is_zero());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;

pub mod clipping;
pub mod config;
pub mod foundation;
pub mod physics;
pub mod render;
pub mod scene;


pub use clipping::{ClipError, ClipTargets, ClipUpdate, PlanarClipping};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        clipping::{ClipError, ClipTargets, ClipUpdate, PlanarClipping},
        core::config::{ClippingConfig, UnknownShapePolicy, CLIPPING_PLANE_PARAMETER},
        foundation::math::{Quat, Transform, Vec3, Vec4},
        physics::{
            BodyInstance, BodySetup, CollisionEnabled, CollisionShape, PhysicsAsset, Plane, SkeletalBody,
        },
        render::{ClippingPlaneUniform, Material, MaterialId, MeshComponent},
        scene::{Actor, ActorDescription, SceneError},
    };
}
