//! Oriented clipping plane
//!
//! Stored in implicit form `N·p = D`. With a unit normal, the signed distance
//! `N·p − D` is positive on the visible side.

use crate::clipping::ClipError;
use crate::foundation::math::{safe_normal, Vec3, Vec4};

/// An oriented plane `normal · p = d`
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Plane {
    /// Plane normal (A, B, C), pointing toward the visible half-space
    pub normal: Vec3,
    /// Plane constant D
    pub d: f32,
}

impl Default for Plane {
    fn default() -> Self {
        Self::zero()
    }
}

impl Plane {
    /// Degenerate all-zero plane used while clipping is inactive
    pub fn zero() -> Self {
        Self {
            normal: Vec3::zeros(),
            d: 0.0,
        }
    }

    /// Create a plane from raw coefficients, without normalizing
    pub fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self {
            normal: Vec3::new(a, b, c),
            d,
        }
    }

    /// Plane through `point` with the given normal direction
    ///
    /// The normal is normalized; a near-zero or non-finite normal is rejected
    /// instead of producing a degenerate plane.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Result<Self, ClipError> {
        if !point.iter().all(|v| v.is_finite()) {
            return Err(ClipError::NonFinite);
        }

        let unit = safe_normal(&normal);
        if unit == Vec3::zeros() {
            return Err(ClipError::DegenerateNormal(normal));
        }

        Ok(Self {
            normal: unit,
            d: point.dot(&unit),
        })
    }

    /// Return a copy scaled so the normal has unit length
    ///
    /// `None` if the normal is too short to normalize.
    pub fn normalized(&self) -> Option<Self> {
        let unit = safe_normal(&self.normal);
        if unit == Vec3::zeros() {
            return None;
        }
        let inv_length = 1.0 / self.normal.norm();
        Some(Self {
            normal: unit,
            d: self.d * inv_length,
        })
    }

    /// Signed distance of `point`: `N·p − D`
    pub fn signed_distance(&self, point: &Vec3) -> f32 {
        self.normal.dot(point) - self.d
    }

    /// Whether this is the degenerate all-zero plane
    pub fn is_zero(&self) -> bool {
        self.normal == Vec3::zeros() && self.d == 0.0
    }

    /// The four coefficients `(A, B, C, D)`, as pushed to materials
    pub fn to_vec4(&self) -> Vec4 {
        Vec4::new(self.normal.x, self.normal.y, self.normal.z, self.d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_signed_distance() {
        let plane = Plane::new(0.0, 0.0, 1.0, 2.0);
        assert_relative_eq!(plane.signed_distance(&Vec3::new(5.0, -3.0, 4.0)), 2.0);
        assert_relative_eq!(plane.signed_distance(&Vec3::new(0.0, 0.0, 0.0)), -2.0);
    }

    #[test]
    fn test_from_point_normal_normalizes() {
        let plane = Plane::from_point_normal(Vec3::new(0.0, 3.0, 0.0), Vec3::new(0.0, 10.0, 0.0)).unwrap();
        assert_relative_eq!(plane.normal, Vec3::y());
        assert_relative_eq!(plane.d, 3.0);
        assert_relative_eq!(plane.signed_distance(&Vec3::new(7.0, 3.0, -2.0)), 0.0);
    }

    #[test]
    fn test_from_point_normal_rejects_degenerate_normal() {
        let result = Plane::from_point_normal(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 1.0e-6, 0.0));
        assert!(matches!(result, Err(ClipError::DegenerateNormal(_))));

        let result = Plane::from_point_normal(Vec3::new(f32::INFINITY, 0.0, 0.0), Vec3::y());
        assert!(matches!(result, Err(ClipError::NonFinite)));
    }

    #[test]
    fn test_normalized_scales_constant() {
        let plane = Plane::new(0.0, 2.0, 0.0, 4.0).normalized().unwrap();
        assert_relative_eq!(plane.normal, Vec3::y());
        assert_relative_eq!(plane.d, 2.0);
        assert!(Plane::zero().normalized().is_none());
    }

    #[test]
    fn test_zero_plane() {
        assert!(Plane::default().is_zero());
        assert_eq!(Plane::zero().to_vec4(), Vec4::zeros());
        assert!(!Plane::new(0.0, 1.0, 0.0, 0.0).is_zero());
    }
}
