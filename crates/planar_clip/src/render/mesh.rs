//! Renderable mesh components and their material slots

use std::sync::Arc;

use super::material::{Material, MaterialInstanceDynamic, MaterialInterface};

/// A renderable surface owned by an actor
///
/// Slots may be empty when the art has not assigned a material yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshComponent {
    /// Component name for debugging
    pub name: String,
    materials: Vec<Option<MaterialInterface>>,
}

impl MeshComponent {
    /// Create a mesh component with no material slots
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            materials: Vec::new(),
        }
    }

    /// Builder pattern: append a slot bound to a shared material
    pub fn with_material(mut self, material: Arc<Material>) -> Self {
        self.materials.push(Some(MaterialInterface::Shared(material)));
        self
    }

    /// Builder pattern: append an empty slot
    pub fn with_empty_slot(mut self) -> Self {
        self.materials.push(None);
        self
    }

    /// Number of material slots
    pub fn num_materials(&self) -> usize {
        self.materials.len()
    }

    /// Material bound to a slot
    pub fn material(&self, slot: usize) -> Option<&MaterialInterface> {
        self.materials.get(slot).and_then(Option::as_ref)
    }

    /// Bind a material to a slot; out-of-range slots are ignored
    pub fn set_material(&mut self, slot: usize, material: MaterialInterface) {
        if let Some(entry) = self.materials.get_mut(slot) {
            *entry = Some(material);
        }
    }

    /// Dynamic instance for a slot, creating it from the bound material on first use
    ///
    /// Returns `None` for empty or out-of-range slots.
    pub fn create_and_set_material_instance_dynamic(&mut self, slot: usize) -> Option<&mut MaterialInstanceDynamic> {
        let entry = self.materials.get_mut(slot)?.as_mut()?;

        if let MaterialInterface::Shared(material) = entry {
            let parent = Arc::clone(material);
            log::debug!(
                "Creating dynamic instance of material {:?} for mesh '{}' slot {}",
                parent.id,
                self.name,
                slot
            );
            *entry = MaterialInterface::Dynamic(MaterialInstanceDynamic::new(parent));
        }

        entry.as_dynamic_mut()
    }
}
