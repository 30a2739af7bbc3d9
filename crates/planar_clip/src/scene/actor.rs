//! Actor: owner of meshes, skeletal body and clipping state
//!
//! The actor hands disjoint borrows of its meshes and skeletal body to its
//! [`PlanarClipping`], so no component lookup is needed at runtime.

use crate::clipping::{ClipError, ClipTargets, ClipUpdate, PlanarClipping};
use crate::core::config::ClippingConfig;
use crate::foundation::math::{Transform, Vec3};
use crate::physics::{CollisionEnabled, Plane, SkeletalBody};
use crate::render::MeshComponent;

/// A scene actor with clippable geometry
#[derive(Debug, Clone, Default)]
pub struct Actor {
    /// Actor name for debugging
    pub name: String,
    /// World transform of the actor
    pub transform: Transform,
    /// Renderable surfaces
    pub meshes: Vec<MeshComponent>,
    /// Physics representation, if any
    pub skeletal: Option<SkeletalBody>,
    clipping: PlanarClipping,
}

impl Actor {
    /// Create an empty actor
    pub fn new(name: impl Into<String>, config: ClippingConfig) -> Self {
        Self {
            name: name.into(),
            transform: Transform::identity(),
            meshes: Vec::new(),
            skeletal: None,
            clipping: PlanarClipping::new(config),
        }
    }

    /// Builder pattern: set the world transform
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Builder pattern: add a mesh component
    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.meshes.push(mesh);
        self
    }

    /// Builder pattern: attach a skeletal body
    pub fn with_skeletal(mut self, skeletal: SkeletalBody) -> Self {
        self.skeletal = Some(skeletal);
        self
    }

    /// Clipping state of this actor
    pub fn clipping(&self) -> &PlanarClipping {
        &self.clipping
    }

    /// Begin clipping with an explicit, normalized plane
    pub fn activate_clipping(&mut self, plane: Plane) -> ClipUpdate {
        log::debug!("Actor '{}': activating clipping", self.name);
        let targets = ClipTargets::new(&mut self.meshes, self.skeletal.as_mut());
        self.clipping.activate(plane, targets)
    }

    /// Begin clipping with the plane through `point` facing `normal`
    pub fn activate_clipping_from_point_normal(&mut self, point: Vec3, normal: Vec3) -> Result<ClipUpdate, ClipError> {
        let targets = ClipTargets::new(&mut self.meshes, self.skeletal.as_mut());
        self.clipping.activate_from_point_normal(point, normal, targets)
    }

    /// Begin clipping with the plane of another actor's pose
    pub fn activate_clipping_from_actor(&mut self, plane_actor: Option<&Actor>) -> Option<ClipUpdate> {
        let reference = plane_actor.map(|actor| actor.transform);
        let targets = ClipTargets::new(&mut self.meshes, self.skeletal.as_mut());
        self.clipping.activate_from_actor(reference.as_ref(), targets)
    }

    /// End clipping and restore collision on every shape
    pub fn deactivate_clipping(&mut self) -> ClipUpdate {
        log::debug!("Actor '{}': deactivating clipping", self.name);
        let targets = ClipTargets::new(&mut self.meshes, self.skeletal.as_mut());
        self.clipping.deactivate(targets)
    }

    /// Re-evaluate collision after bones moved
    pub fn refresh_clipping(&mut self) -> ClipUpdate {
        let targets = ClipTargets::new(&mut self.meshes, self.skeletal.as_mut());
        self.clipping.refresh(targets)
    }

    /// Collision state of every shape, grouped by body
    pub fn collision_snapshot(&self) -> Vec<Vec<CollisionEnabled>> {
        self.skeletal
            .iter()
            .flat_map(|skeletal| skeletal.bodies.iter())
            .map(|body| body.shape_collision_states().to_vec())
            .collect()
    }
}
