//! Pushes the clipping plane into every material of an actor

use crate::physics::Plane;
use super::mesh::MeshComponent;

/// Set `parameter_name` to the plane coefficients on every material slot
///
/// Shared materials are swapped for a dynamic instance the first time they
/// are touched. Empty slots are skipped. Returns the number of slots updated.
pub fn apply_plane_to_materials(meshes: &mut [MeshComponent], plane: &Plane, parameter_name: &str) -> usize {
    let value = plane.to_vec4();
    let mut updated = 0;

    for mesh in meshes.iter_mut() {
        for slot in 0..mesh.num_materials() {
            match mesh.create_and_set_material_instance_dynamic(slot) {
                Some(instance) => {
                    instance.set_vector_parameter_value(parameter_name, value);
                    updated += 1;
                }
                None => log::debug!("Mesh '{}' slot {} has no material, skipping", mesh.name, slot),
            }
        }
    }

    log::debug!("Pushed {} = {:?} to {} material slots", parameter_name, value.as_slice(), updated);
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::core::config::CLIPPING_PLANE_PARAMETER;
    use crate::foundation::math::Vec4;
    use crate::render::material::{Material, MaterialId, MaterialInterface};

    fn meshes() -> (Arc<Material>, Vec<MeshComponent>) {
        let shared = Arc::new(Material::new(MaterialId(1)).with_name("shared"));
        let meshes = vec![
            MeshComponent::new("body")
                .with_material(Arc::clone(&shared))
                .with_empty_slot()
                .with_material(Arc::new(Material::new(MaterialId(2)))),
            MeshComponent::new("hat").with_material(Arc::clone(&shared)),
        ];
        (shared, meshes)
    }

    #[test]
    fn test_every_slot_receives_plane() {
        let (shared, mut meshes) = meshes();
        let plane = Plane::new(0.0, 1.0, 0.0, 3.0);

        let updated = apply_plane_to_materials(&mut meshes, &plane, CLIPPING_PLANE_PARAMETER);

        assert_eq!(updated, 3);
        for (mesh, slot) in [(0, 0), (0, 2), (1, 0)] {
            let material = meshes[mesh].material(slot).unwrap();
            assert!(matches!(material, MaterialInterface::Dynamic(_)));
            assert_eq!(
                material.vector_parameter_value(CLIPPING_PLANE_PARAMETER),
                Some(Vec4::new(0.0, 1.0, 0.0, 3.0))
            );
        }
        assert!(meshes[0].material(1).is_none());
        // The shared asset itself is never modified.
        assert!(shared.vector_defaults.is_empty());
    }

    #[test]
    fn test_repeated_push_is_idempotent() {
        let (_, mut meshes) = meshes();
        let plane = Plane::new(1.0, 0.0, 0.0, -1.0);

        apply_plane_to_materials(&mut meshes, &plane, CLIPPING_PLANE_PARAMETER);
        let first = meshes.clone();
        apply_plane_to_materials(&mut meshes, &plane, CLIPPING_PLANE_PARAMETER);

        assert_eq!(meshes, first);
    }

    #[test]
    fn test_no_meshes() {
        assert_eq!(apply_plane_to_materials(&mut [], &Plane::zero(), CLIPPING_PLANE_PARAMETER), 0);
    }
}
