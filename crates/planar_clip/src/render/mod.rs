//! Render-side collaborators of the clipping component
//!
//! Meshes own material slots; the clipping plane reaches the shader through a
//! named vector parameter on a per-instance copy of each material.

pub mod material;
pub mod material_pusher;
pub mod mesh;
pub mod uniform;

pub use material::{Material, MaterialId, MaterialInstanceDynamic, MaterialInterface};
pub use material_pusher::apply_plane_to_materials;
pub use mesh::MeshComponent;
pub use uniform::ClippingPlaneUniform;
