//! Model-space collision shapes and their world-space restatement
//!
//! Shapes are stored relative to the bone that owns them and only moved into
//! world space when they are classified against a plane.

use serde::{Serialize, Deserialize};

use crate::foundation::math::{Axis, Quat, Transform, Vec3};
use crate::physics::plane::Plane;
use super::primitives::{BoundingSphere, Capsule, OrientedBox};

/// Collision shape element (stored in BONE SPACE)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CollisionShape {
    /// Sphere around a bone-space center
    Sphere {
        /// Bone-space center
        center: Vec3,
        /// Unscaled radius
        radius: f32,
    },
    /// Oriented box
    Box {
        /// Bone-space center
        center: Vec3,
        /// Bone-space orientation
        rotation: Quat,
        /// Full edge lengths along the box's local X, Y and Z
        extents: Vec3,
    },
    /// Capsule whose segment runs along the element's local X axis
    Capsule {
        /// Bone-space center
        center: Vec3,
        /// Bone-space orientation
        rotation: Quat,
        /// Unscaled radius
        radius: f32,
        /// Unscaled distance between the two cap centers
        length: f32,
    },
    /// Convex hull; never classified against a plane
    Convex {
        /// Bone-space hull vertices
        vertices: Vec<Vec3>,
    },
}

/// Scale factors of the skeletal component, applied to every shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeScale {
    /// Per-axis component scale, applied to box extents
    pub component: Vec3,
    /// Largest absolute component scale, applied to radii and lengths
    pub uniform: f32,
}

impl ShapeScale {
    /// Derive both factors from a component scale vector
    pub fn from_component_scale(component: Vec3) -> Self {
        Self {
            component,
            uniform: component.abs().max(),
        }
    }
}

impl Default for ShapeScale {
    fn default() -> Self {
        Self::from_component_scale(Vec3::new(1.0, 1.0, 1.0))
    }
}

impl CollisionShape {
    /// Sphere element
    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Self::Sphere { center, radius }
    }

    /// Box element from full edge lengths
    pub fn cuboid(center: Vec3, rotation: Quat, extents: Vec3) -> Self {
        Self::Box {
            center,
            rotation,
            extents,
        }
    }

    /// Capsule element
    pub fn capsule(center: Vec3, rotation: Quat, radius: f32, length: f32) -> Self {
        Self::Capsule {
            center,
            rotation,
            radius,
            length,
        }
    }

    /// Short human-readable kind, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sphere { .. } => "sphere",
            Self::Box { .. } => "box",
            Self::Capsule { .. } => "capsule",
            Self::Convex { .. } => "convex",
        }
    }

    /// Restate this shape in world space
    ///
    /// `bone_world` is the world transform of the owning body. Returns `None`
    /// for shape kinds that have no plane classification.
    pub fn to_world_space(&self, bone_world: &Transform, scale: ShapeScale) -> Option<WorldSpaceShape> {
        match self {
            Self::Sphere { center, radius } => Some(WorldSpaceShape::Sphere(BoundingSphere::new(
                bone_world.transform_point(*center),
                radius * scale.uniform,
            ))),
            Self::Box {
                center,
                rotation,
                extents,
            } => {
                let world = bone_world.combine(&Transform::from_position_rotation(*center, *rotation));
                let half_extents = (extents * 0.5).component_mul(&scale.component);
                Some(WorldSpaceShape::Box(OrientedBox::from_transform(&world, half_extents)))
            }
            Self::Capsule {
                center,
                rotation,
                radius,
                length,
            } => {
                let world = bone_world.combine(&Transform::from_position_rotation(*center, *rotation));
                Some(WorldSpaceShape::Capsule(Capsule::new(
                    world.position,
                    world.unit_axis(Axis::X),
                    length * 0.5 * scale.uniform,
                    radius * scale.uniform,
                )))
            }
            Self::Convex { .. } => None,
        }
    }
}

/// World-space collision shape (temporary, for classification only)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldSpaceShape {
    /// World-space sphere
    Sphere(BoundingSphere),
    /// World-space oriented box
    Box(OrientedBox),
    /// World-space capsule
    Capsule(Capsule),
}

impl WorldSpaceShape {
    /// Whether the whole shape lies strictly on the visible side of `plane`
    pub fn is_above_plane(&self, plane: &Plane) -> bool {
        match self {
            Self::Sphere(sphere) => sphere.is_above_plane(plane),
            Self::Box(obb) => obb.is_above_plane(plane),
            Self::Capsule(capsule) => capsule.is_above_plane(plane),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_sphere_uses_bone_transform_and_uniform_scale() {
        let bone = Transform::from_position(Vec3::new(0.0, 5.0, 0.0));
        let scale = ShapeScale::from_component_scale(Vec3::new(1.0, -3.0, 2.0));
        let shape = CollisionShape::sphere(Vec3::new(1.0, 0.0, 0.0), 0.5);

        let Some(WorldSpaceShape::Sphere(sphere)) = shape.to_world_space(&bone, scale) else {
            panic!("expected a world-space sphere");
        };
        assert_relative_eq!(sphere.center, Vec3::new(1.0, 5.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(sphere.radius, 1.5, epsilon = EPSILON);
    }

    #[test]
    fn test_box_half_extents_scale_per_axis() {
        let scale = ShapeScale::from_component_scale(Vec3::new(2.0, 1.0, 0.5));
        let shape = CollisionShape::cuboid(Vec3::zeros(), Quat::identity(), Vec3::new(2.0, 4.0, 6.0));

        let Some(WorldSpaceShape::Box(obb)) = shape.to_world_space(&Transform::identity(), scale) else {
            panic!("expected a world-space box");
        };
        assert_relative_eq!(obb.half_extents, Vec3::new(2.0, 2.0, 1.5), epsilon = EPSILON);
    }

    #[test]
    fn test_box_scale_applies_to_local_axes_before_rotation() {
        let scale = ShapeScale::from_component_scale(Vec3::new(4.0, 1.0, 1.0));
        let rotation = Quat::from_axis_angle(&Vec3::z_axis(), std::f32::consts::FRAC_PI_2);
        let shape = CollisionShape::cuboid(Vec3::zeros(), rotation, Vec3::new(1.0, 1.0, 1.0));

        let Some(WorldSpaceShape::Box(obb)) = shape.to_world_space(&Transform::identity(), scale) else {
            panic!("expected a world-space box");
        };
        // The stretched local X now points along world Y.
        assert_relative_eq!(obb.projected_radius(&Vec3::y()), 2.0, epsilon = EPSILON);
        assert_relative_eq!(obb.projected_radius(&Vec3::x()), 0.5, epsilon = EPSILON);
    }

    #[test]
    fn test_box_element_offset_combines_with_bone() {
        let bone = Transform::from_position_rotation(
            Vec3::new(0.0, 0.0, 10.0),
            Quat::from_axis_angle(&Vec3::z_axis(), std::f32::consts::FRAC_PI_2),
        );
        let shape = CollisionShape::cuboid(Vec3::new(1.0, 0.0, 0.0), Quat::identity(), Vec3::new(2.0, 2.0, 2.0));

        let Some(WorldSpaceShape::Box(obb)) = shape.to_world_space(&bone, ShapeScale::default()) else {
            panic!("expected a world-space box");
        };
        assert_relative_eq!(obb.center, Vec3::new(0.0, 1.0, 10.0), epsilon = EPSILON);
        assert_relative_eq!(obb.axes[0], Vec3::y(), epsilon = EPSILON);
    }

    #[test]
    fn test_capsule_axis_follows_local_x() {
        let rotation = Quat::from_axis_angle(&Vec3::y_axis(), -std::f32::consts::FRAC_PI_2);
        let shape = CollisionShape::capsule(Vec3::zeros(), rotation, 0.25, 2.0);
        let scale = ShapeScale::from_component_scale(Vec3::new(2.0, 2.0, 2.0));

        let Some(WorldSpaceShape::Capsule(capsule)) = shape.to_world_space(&Transform::identity(), scale) else {
            panic!("expected a world-space capsule");
        };
        assert_relative_eq!(capsule.axis, Vec3::z(), epsilon = EPSILON);
        assert_relative_eq!(capsule.half_length, 2.0, epsilon = EPSILON);
        assert_relative_eq!(capsule.radius, 0.5, epsilon = EPSILON);
    }

    #[test]
    fn test_convex_has_no_world_shape() {
        let shape = CollisionShape::Convex {
            vertices: vec![Vec3::zeros(), Vec3::x(), Vec3::y()],
        };
        assert!(shape.to_world_space(&Transform::identity(), ShapeScale::default()).is_none());
        assert_eq!(shape.kind(), "convex");
    }
}
