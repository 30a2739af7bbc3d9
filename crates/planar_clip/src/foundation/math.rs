//! Math utilities and types
//!
//! Provides the vector, rotation and transform types shared by the
//! clipping, physics and render modules. All coordinates are Y-up
//! right-handed.

pub use nalgebra::{
    Vector3, Vector4,
    Quaternion,
    Unit,
};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Squared length below which a direction is treated as zero
pub const SMALL_NUMBER_SQUARED: f32 = 1.0e-8;

/// Local basis axis of a transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Local +X
    X,
    /// Local +Y
    Y,
    /// Local +Z
    Z,
}

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Builder pattern: Set scale
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Apply this transform to a point (scale, then rotate, then translate)
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.position + self.rotation * self.scale.component_mul(&point)
    }

    /// Unit-length world direction of one of the local axes
    ///
    /// Scale does not affect the result.
    pub fn unit_axis(&self, axis: Axis) -> Vec3 {
        let local = match axis {
            Axis::X => Vec3::x(),
            Axis::Y => Vec3::y(),
            Axis::Z => Vec3::z(),
        };
        self.rotation * local
    }

    /// World "up" direction of this transform (local +Y)
    pub fn up(&self) -> Vec3 {
        self.unit_axis(Axis::Y)
    }

    /// Largest absolute scale component
    pub fn max_abs_scale(&self) -> f32 {
        self.scale.abs().max()
    }

    /// Combine this (parent) transform with a child expressed in its space
    pub fn combine(&self, other: &Transform) -> Transform {
        Transform {
            position: self.position + self.rotation * (self.scale.component_mul(&other.position)),
            rotation: self.rotation * other.rotation,
            scale: self.scale.component_mul(&other.scale),
        }
    }

    /// Whether every component is a finite number
    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|v| v.is_finite())
            && self.rotation.coords.iter().all(|v| v.is_finite())
            && self.scale.iter().all(|v| v.is_finite())
    }
}

/// Normalize `v`, or return zero when it is too short to normalize safely
pub fn safe_normal(v: &Vec3) -> Vec3 {
    let length_squared = v.norm_squared();
    if length_squared <= SMALL_NUMBER_SQUARED || !length_squared.is_finite() {
        Vec3::zeros()
    } else {
        v / length_squared.sqrt()
    }
}
