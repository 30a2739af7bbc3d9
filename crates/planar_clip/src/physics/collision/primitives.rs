//! World-space collision primitives and plane classification
//!
//! Each primitive answers one question: does it lie entirely on the visible
//! (positive) side of a plane? The comparison is strict, so a shape that only
//! touches the plane counts as hidden. All predicates assume a unit normal.

use crate::foundation::math::{Axis, Transform, Vec3};
use crate::physics::plane::Plane;

/// A world-space sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// True iff `dist(center) > radius`
    pub fn is_above_plane(&self, plane: &Plane) -> bool {
        plane.signed_distance(&self.center) > self.radius
    }
}

/// A world-space oriented box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox {
    /// Box center in world space
    pub center: Vec3,
    /// Orthonormal world axes of the box
    pub axes: [Vec3; 3],
    /// Half extents along `axes`
    pub half_extents: Vec3,
}

impl OrientedBox {
    /// Creates a box from its center, orthonormal axes and half extents
    pub fn new(center: Vec3, axes: [Vec3; 3], half_extents: Vec3) -> Self {
        Self {
            center,
            axes,
            half_extents,
        }
    }

    /// Box placed by a world transform; the transform's scale is ignored
    pub fn from_transform(transform: &Transform, half_extents: Vec3) -> Self {
        Self {
            center: transform.position,
            axes: [
                transform.unit_axis(Axis::X),
                transform.unit_axis(Axis::Y),
                transform.unit_axis(Axis::Z),
            ],
            half_extents,
        }
    }

    /// Radius of the box projected onto `normal`
    pub fn projected_radius(&self, normal: &Vec3) -> f32 {
        normal.dot(&self.axes[0]).abs() * self.half_extents.x
            + normal.dot(&self.axes[1]).abs() * self.half_extents.y
            + normal.dot(&self.axes[2]).abs() * self.half_extents.z
    }

    /// True iff the center is farther above the plane than the projected radius
    pub fn is_above_plane(&self, plane: &Plane) -> bool {
        plane.signed_distance(&self.center) > self.projected_radius(&plane.normal)
    }
}

/// A world-space capsule: a segment swept by a sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capsule {
    /// Midpoint of the segment
    pub center: Vec3,
    /// Unit direction of the segment
    pub axis: Vec3,
    /// Distance from the center to each cap center
    pub half_length: f32,
    /// Radius of the swept sphere
    pub radius: f32,
}

impl Capsule {
    /// Creates a new capsule
    pub fn new(center: Vec3, axis: Vec3, half_length: f32, radius: f32) -> Self {
        Self {
            center,
            axis,
            half_length,
            radius,
        }
    }

    /// The two cap centers
    pub fn cap_centers(&self) -> (Vec3, Vec3) {
        let offset = self.axis * self.half_length;
        (self.center + offset, self.center - offset)
    }

    /// True iff both cap centers are farther above the plane than the radius
    pub fn is_above_plane(&self, plane: &Plane) -> bool {
        let (top, bottom) = self.cap_centers();
        let s0 = plane.signed_distance(&top);
        let s1 = plane.signed_distance(&bottom);
        s0.min(s1) > self.radius
    }
}
