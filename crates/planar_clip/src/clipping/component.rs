//! Plane state holder and activation entry points

use crate::core::config::ClippingConfig;
use crate::foundation::math::{Transform, Vec3};
use crate::physics::{update_shape_collision, ClipState, Plane, SkeletalBody, ToggleSummary};
use crate::render::{apply_plane_to_materials, ClippingPlaneUniform, MeshComponent};
use super::ClipError;

/// Everything a clipping transition writes to
///
/// Borrowed for the duration of one call, so the plane, the flag and both
/// pushes are updated together.
#[derive(Debug)]
pub struct ClipTargets<'a> {
    /// Renderable surfaces whose materials receive the plane
    pub meshes: &'a mut [MeshComponent],
    /// Physics representation whose shapes get toggled, if the actor has one
    pub skeletal: Option<&'a mut SkeletalBody>,
}

impl<'a> ClipTargets<'a> {
    /// Targets with both meshes and a skeletal body
    pub fn new(meshes: &'a mut [MeshComponent], skeletal: Option<&'a mut SkeletalBody>) -> Self {
        Self { meshes, skeletal }
    }

    /// Targets with materials only
    pub fn meshes_only(meshes: &'a mut [MeshComponent]) -> Self {
        Self { meshes, skeletal: None }
    }
}

/// What one transition changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClipUpdate {
    /// Material slots that received the plane
    pub materials_updated: usize,
    /// Result of the collision pass
    pub collision: ToggleSummary,
}

/// Clipping plane and active flag for one actor
#[derive(Debug, Clone, Default)]
pub struct PlanarClipping {
    plane: Plane,
    active: bool,
    config: ClippingConfig,
}

impl PlanarClipping {
    /// Create an inactive component
    pub fn new(config: ClippingConfig) -> Self {
        Self {
            plane: Plane::zero(),
            active: false,
            config,
        }
    }

    /// Current plane (the zero plane while inactive)
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Whether clipping is active
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Configuration in use
    pub fn config(&self) -> &ClippingConfig {
        &self.config
    }

    /// Current plane in shader layout
    pub fn uniform(&self) -> ClippingPlaneUniform {
        ClippingPlaneUniform::from_plane(&self.plane)
    }

    /// Begin clipping with `plane`
    ///
    /// The plane normal is expected to be unit length; a warning is logged
    /// otherwise, but the plane is used as given.
    pub fn activate(&mut self, plane: Plane, targets: ClipTargets<'_>) -> ClipUpdate {
        let length = plane.normal.norm();
        if !approx::abs_diff_eq!(length, 1.0, epsilon = self.config.unit_normal_tolerance) {
            log::warn!(
                "Activating clipping plane with non-unit normal {:?} (length {})",
                plane.normal.as_slice(),
                length
            );
        }

        self.active = true;
        self.plane = plane;
        log::info!(
            "Clipping activated: normal {:?}, d = {}",
            self.plane.normal.as_slice(),
            self.plane.d
        );

        self.apply(targets)
    }

    /// Begin clipping with the plane through `point` facing `normal`
    ///
    /// A degenerate normal leaves the component unchanged.
    pub fn activate_from_point_normal(
        &mut self,
        point: Vec3,
        normal: Vec3,
        targets: ClipTargets<'_>,
    ) -> Result<ClipUpdate, ClipError> {
        let plane = Plane::from_point_normal(point, normal)?;
        Ok(self.activate(plane, targets))
    }

    /// Begin clipping with the plane through a reference pose, facing its up vector
    ///
    /// A missing or degenerate pose is a no-op and returns `None`.
    pub fn activate_from_actor(
        &mut self,
        reference: Option<&Transform>,
        targets: ClipTargets<'_>,
    ) -> Option<ClipUpdate> {
        let Some(reference) = reference else {
            log::debug!("No reference pose for clipping plane, ignoring activation");
            return None;
        };

        if !reference.is_finite() {
            log::warn!("Reference pose is not finite, ignoring activation");
            return None;
        }

        match Plane::from_point_normal(reference.position, reference.up()) {
            Ok(plane) => Some(self.activate(plane, targets)),
            Err(err) => {
                log::warn!("Cannot build clipping plane from reference pose: {}", err);
                None
            }
        }
    }

    /// End clipping: zero plane, every shape collidable again
    pub fn deactivate(&mut self, targets: ClipTargets<'_>) -> ClipUpdate {
        self.active = false;
        self.plane = Plane::zero();
        log::info!("Clipping deactivated");

        self.apply(targets)
    }

    /// Re-run both pushes with the current state
    ///
    /// Call after bones move so collision follows the animated pose.
    pub fn refresh(&self, targets: ClipTargets<'_>) -> ClipUpdate {
        self.apply(targets)
    }

    fn apply(&self, targets: ClipTargets<'_>) -> ClipUpdate {
        let materials_updated =
            apply_plane_to_materials(targets.meshes, &self.plane, &self.config.parameter_name);

        let collision = match targets.skeletal {
            Some(skeletal) => {
                let state = ClipState {
                    plane: &self.plane,
                    active: self.active,
                    unknown_shape_policy: self.config.unknown_shape_policy,
                };
                update_shape_collision(skeletal, &state)
            }
            None => {
                log::debug!("No skeletal body, skipping collision update");
                ToggleSummary::default()
            }
        };

        ClipUpdate {
            materials_updated,
            collision,
        }
    }
}
