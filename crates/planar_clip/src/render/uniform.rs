//! GPU layout of the clipping plane parameter

use bytemuck::{Pod, Zeroable};

use crate::physics::Plane;

/// Clipping plane as uploaded to a shader: `vec4(A, B, C, D)`
///
/// A fragment is kept when `dot(plane.xyz, world_pos) - plane.w >= 0`.
/// The all-zero plane keeps everything.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct ClippingPlaneUniform {
    /// Plane coefficients `[A, B, C, D]`
    pub plane: [f32; 4],
}

impl ClippingPlaneUniform {
    /// Size of the uniform block in bytes
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Build the uniform from a plane
    pub fn from_plane(plane: &Plane) -> Self {
        let coefficients = plane.to_vec4();
        Self {
            plane: [coefficients.x, coefficients.y, coefficients.z, coefficients.w],
        }
    }

    /// Raw bytes for buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<&Plane> for ClippingPlaneUniform {
    fn from(plane: &Plane) -> Self {
        Self::from_plane(plane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_four_floats() {
        assert_eq!(ClippingPlaneUniform::SIZE, 16);
    }

    #[test]
    fn test_bytes_match_plane_coefficients() {
        let uniform = ClippingPlaneUniform::from(&Plane::new(0.0, 1.0, 0.0, 2.5));
        let floats: &[f32] = bytemuck::cast_slice(uniform.as_bytes());
        assert_eq!(floats, &[0.0, 1.0, 0.0, 2.5]);
        assert_eq!(ClippingPlaneUniform::from(&Plane::zero()), ClippingPlaneUniform::zeroed());
    }
}
