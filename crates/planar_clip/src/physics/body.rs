//! Rigid bodies attached to a skeletal mesh
//!
//! A [`PhysicsAsset`] holds one shared [`BodySetup`] per simulated bone. Each
//! setup is instantiated as a [`BodyInstance`] that carries the bone's current
//! world transform and the collision state of every shape in the setup.

use std::sync::Arc;

use serde::{Serialize, Deserialize};

use crate::foundation::math::{Transform, Vec3};
use super::collision::{CollisionShape, ShapeScale};
use super::collision_enabled::CollisionEnabled;

/// Shared collision geometry of one bone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodySetup {
    /// Name of the bone the body is attached to
    pub bone_name: String,
    /// Aggregate geometry, in bone space
    pub shapes: Vec<CollisionShape>,
}

impl BodySetup {
    /// Create an empty body setup for a bone
    pub fn new(bone_name: impl Into<String>) -> Self {
        Self {
            bone_name: bone_name.into(),
            shapes: Vec::new(),
        }
    }

    /// Builder pattern: add a shape element
    pub fn with_shape(mut self, shape: CollisionShape) -> Self {
        self.shapes.push(shape);
        self
    }

    /// Number of shape elements
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }
}

/// Collection of body setups authored for a skeletal mesh
#[derive(Debug, Clone, Default)]
pub struct PhysicsAsset {
    /// Asset name for debugging
    pub name: String,
    /// One setup per simulated bone
    pub body_setups: Vec<Arc<BodySetup>>,
}

impl PhysicsAsset {
    /// Create a physics asset from its body setups
    pub fn new(name: impl Into<String>, body_setups: Vec<BodySetup>) -> Self {
        Self {
            name: name.into(),
            body_setups: body_setups.into_iter().map(Arc::new).collect(),
        }
    }

    /// Find the setup for a bone
    pub fn find_body_setup(&self, bone_name: &str) -> Option<&Arc<BodySetup>> {
        self.body_setups.iter().find(|setup| setup.bone_name == bone_name)
    }
}

/// Runtime instance of a body setup
#[derive(Debug, Clone)]
pub struct BodyInstance {
    setup: Option<Arc<BodySetup>>,
    world_transform: Transform,
    shape_collision: Vec<CollisionEnabled>,
}

impl BodyInstance {
    /// Instantiate a setup at a world transform, with every shape collidable
    pub fn new(setup: Arc<BodySetup>, world_transform: Transform) -> Self {
        let shape_collision = vec![CollisionEnabled::QUERY_AND_PHYSICS; setup.shape_count()];
        Self {
            setup: Some(setup),
            world_transform,
            shape_collision,
        }
    }

    /// Whether this instance is initialized and can be updated
    ///
    /// The pose is not checked; a non-finite pose is handled by the
    /// plane classification.
    pub const fn is_valid(&self) -> bool {
        self.setup.is_some()
    }

    /// Release the setup; the instance is skipped from then on
    pub fn terminate(&mut self) {
        self.setup = None;
        self.shape_collision.clear();
    }

    /// The shared setup, if the instance is still initialized
    pub fn body_setup(&self) -> Option<&Arc<BodySetup>> {
        self.setup.as_ref()
    }

    /// Current world transform of the bone
    pub fn world_transform(&self) -> &Transform {
        &self.world_transform
    }

    /// Move the body (e.g. after animation)
    pub fn set_world_transform(&mut self, transform: Transform) {
        self.world_transform = transform;
    }

    /// Collision state of one shape element
    pub fn shape_collision_enabled(&self, shape_index: usize) -> Option<CollisionEnabled> {
        self.shape_collision.get(shape_index).copied()
    }

    /// Collision state of every shape element, in setup order
    pub fn shape_collision_states(&self) -> &[CollisionEnabled] {
        &self.shape_collision
    }

    /// Set the collision state of one shape element
    ///
    /// Returns `false` if the index is out of range.
    pub fn set_shape_collision_enabled(&mut self, shape_index: usize, enabled: CollisionEnabled) -> bool {
        match self.shape_collision.get_mut(shape_index) {
            Some(state) => {
                *state = enabled;
                true
            }
            None => false,
        }
    }
}

/// Physics representation of a skinned mesh
#[derive(Debug, Clone, Default)]
pub struct SkeletalBody {
    /// World-space scale of the skeletal mesh component
    pub component_scale: Vec3,
    /// Authored bodies; `None` if the mesh has no physics asset
    pub physics_asset: Option<Arc<PhysicsAsset>>,
    /// Runtime body instances
    pub bodies: Vec<BodyInstance>,
}

impl SkeletalBody {
    /// Create a skeletal body with no physics asset and unit scale
    pub fn new() -> Self {
        Self {
            component_scale: Vec3::new(1.0, 1.0, 1.0),
            physics_asset: None,
            bodies: Vec::new(),
        }
    }

    /// Instantiate every body setup of `asset`
    ///
    /// `bone_transform` supplies the world transform of each bone by name;
    /// setups whose bone is unknown are not instantiated.
    pub fn from_physics_asset(
        asset: Arc<PhysicsAsset>,
        component_scale: Vec3,
        mut bone_transform: impl FnMut(&str) -> Option<Transform>,
    ) -> Self {
        let bodies = asset
            .body_setups
            .iter()
            .filter_map(|setup| match bone_transform(&setup.bone_name) {
                Some(transform) => Some(BodyInstance::new(Arc::clone(setup), transform)),
                None => {
                    log::debug!("No transform for bone '{}', skipping body", setup.bone_name);
                    None
                }
            })
            .collect();

        Self {
            component_scale,
            physics_asset: Some(asset),
            bodies,
        }
    }

    /// Scale factors applied to every shape of this body
    pub fn shape_scale(&self) -> ShapeScale {
        ShapeScale::from_component_scale(self.component_scale)
    }

    /// Total number of shapes across valid bodies
    pub fn shape_count(&self) -> usize {
        self.bodies
            .iter()
            .filter(|body| body.is_valid())
            .filter_map(BodyInstance::body_setup)
            .map(|setup| setup.shape_count())
            .sum()
    }
}
