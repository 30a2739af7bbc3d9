//! Plane-driven collision toggling
//!
//! Walks every shape of a skeletal body and enables or disables its
//! collision depending on whether it lies fully above the clipping plane.

use crate::core::config::UnknownShapePolicy;
use super::body::SkeletalBody;
use super::collision::{CollisionShape, ShapeScale};
use super::collision_enabled::CollisionEnabled;
use super::plane::Plane;
use crate::foundation::math::Transform;

/// Plane state consumed by the toggler
#[derive(Debug, Clone, Copy)]
pub struct ClipState<'a> {
    /// Current plane; ignored when `active` is false
    pub plane: &'a Plane,
    /// Whether clipping is active
    pub active: bool,
    /// Visibility of shapes with no plane classification
    pub unknown_shape_policy: UnknownShapePolicy,
}

/// Counts produced by one toggling pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleSummary {
    /// Shapes left (or made) collidable
    pub enabled: usize,
    /// Shapes whose collision was disabled
    pub disabled: usize,
    /// Body instances skipped because they were invalid
    pub skipped_bodies: usize,
}

/// Classify one shape against the plane
///
/// Inactive clipping always reports visible. While active, shapes on a bone
/// with a non-finite pose are hidden, and shapes without a world-space
/// classification fall back to `unknown_shape_policy`.
pub fn is_shape_visible(
    shape: &CollisionShape,
    bone_world: &Transform,
    scale: ShapeScale,
    state: &ClipState<'_>,
) -> bool {
    if !state.active {
        return true;
    }
    if !bone_world.is_finite() {
        return false;
    }

    match shape.to_world_space(bone_world, scale) {
        Some(world) => world.is_above_plane(state.plane),
        None => state.unknown_shape_policy.is_visible(),
    }
}

/// Update the collision state of every shape on `skeletal`
pub fn update_shape_collision(skeletal: &mut SkeletalBody, state: &ClipState<'_>) -> ToggleSummary {
    let mut summary = ToggleSummary::default();

    if skeletal.physics_asset.is_none() {
        log::debug!("Skeletal body has no physics asset, collision left untouched");
        return summary;
    }

    let scale = skeletal.shape_scale();

    for body in &mut skeletal.bodies {
        if !body.is_valid() {
            summary.skipped_bodies += 1;
            continue;
        }
        let Some(setup) = body.body_setup().cloned() else {
            summary.skipped_bodies += 1;
            continue;
        };
        let bone_world = *body.world_transform();

        for (shape_index, shape) in setup.shapes.iter().enumerate() {
            let visible = is_shape_visible(shape, &bone_world, scale, state);
            log::trace!(
                "Bone '{}' shape {} ({}): {}",
                setup.bone_name,
                shape_index,
                shape.kind(),
                if visible { "visible" } else { "hidden" }
            );

            body.set_shape_collision_enabled(shape_index, CollisionEnabled::from_visibility(visible));
            if visible {
                summary.enabled += 1;
            } else {
                summary.disabled += 1;
            }
        }
    }

    log::debug!(
        "Collision pass: {} enabled, {} disabled, {} bodies skipped",
        summary.enabled,
        summary.disabled,
        summary.skipped_bodies
    );

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::foundation::math::{Quat, Vec3};
    use crate::physics::body::{BodySetup, PhysicsAsset};

    fn skeletal() -> SkeletalBody {
        let asset = Arc::new(PhysicsAsset::new(
            "column",
            vec![
                BodySetup::new("low")
                    .with_shape(CollisionShape::sphere(Vec3::zeros(), 0.5))
                    .with_shape(CollisionShape::Convex {
                        vertices: vec![Vec3::zeros(), Vec3::x(), Vec3::z()],
                    }),
                BodySetup::new("high")
                    .with_shape(CollisionShape::sphere(Vec3::zeros(), 0.5))
                    .with_shape(CollisionShape::cuboid(Vec3::zeros(), Quat::identity(), Vec3::new(1.0, 1.0, 1.0)))
                    .with_shape(CollisionShape::capsule(Vec3::zeros(), Quat::identity(), 0.25, 1.0)),
            ],
        ));
        SkeletalBody::from_physics_asset(asset, Vec3::new(1.0, 1.0, 1.0), |bone| match bone {
            "low" => Some(Transform::from_position(Vec3::new(0.0, 0.0, 0.0))),
            "high" => Some(Transform::from_position(Vec3::new(0.0, 0.0, 5.0))),
            _ => None,
        })
    }

    fn ground() -> Plane {
        Plane::new(0.0, 0.0, 1.0, 1.0)
    }

    #[test]
    fn test_active_hides_shapes_below_plane() {
        let mut body = skeletal();
        let plane = ground();
        let state = ClipState {
            plane: &plane,
            active: true,
            unknown_shape_policy: UnknownShapePolicy::Hide,
        };

        let summary = update_shape_collision(&mut body, &state);

        assert_eq!(summary, ToggleSummary { enabled: 3, disabled: 2, skipped_bodies: 0 });
        assert_eq!(body.bodies[0].shape_collision_states(), &[CollisionEnabled::NO_COLLISION; 2]);
        assert_eq!(body.bodies[1].shape_collision_states(), &[CollisionEnabled::QUERY_AND_PHYSICS; 3]);
    }

    #[test]
    fn test_unknown_shape_policy_show() {
        let mut body = skeletal();
        let plane = ground();
        let state = ClipState {
            plane: &plane,
            active: true,
            unknown_shape_policy: UnknownShapePolicy::Show,
        };

        update_shape_collision(&mut body, &state);

        assert_eq!(body.bodies[0].shape_collision_enabled(0), Some(CollisionEnabled::NO_COLLISION));
        assert_eq!(body.bodies[0].shape_collision_enabled(1), Some(CollisionEnabled::QUERY_AND_PHYSICS));
    }

    #[test]
    fn test_inactive_enables_everything() {
        let mut body = skeletal();
        let plane = Plane::new(0.0, 0.0, 1.0, 100.0);
        let active = ClipState {
            plane: &plane,
            active: true,
            unknown_shape_policy: UnknownShapePolicy::Hide,
        };
        update_shape_collision(&mut body, &active);
        assert_eq!(body.bodies[1].shape_collision_enabled(0), Some(CollisionEnabled::NO_COLLISION));

        let zero = Plane::zero();
        let inactive = ClipState {
            plane: &zero,
            active: false,
            unknown_shape_policy: UnknownShapePolicy::Hide,
        };
        let summary = update_shape_collision(&mut body, &inactive);

        assert_eq!(summary.disabled, 0);
        for instance in &body.bodies {
            assert!(instance
                .shape_collision_states()
                .iter()
                .all(|state| *state == CollisionEnabled::QUERY_AND_PHYSICS));
        }
    }

    #[test]
    fn test_invalid_bodies_and_missing_asset_are_skipped() {
        let mut body = skeletal();
        body.bodies[0].terminate();
        let plane = ground();
        let state = ClipState {
            plane: &plane,
            active: true,
            unknown_shape_policy: UnknownShapePolicy::Hide,
        };
        let summary = update_shape_collision(&mut body, &state);
        assert_eq!(summary.skipped_bodies, 1);
        assert_eq!(summary.enabled, 3);

        let mut no_asset = skeletal();
        no_asset.physics_asset = None;
        assert_eq!(update_shape_collision(&mut no_asset, &state), ToggleSummary::default());
    }
}
