//! Material assets and per-instance parameter overrides
//!
//! A [`Material`] is a shared, immutable asset. Runtime parameter changes go
//! through a [`MaterialInstanceDynamic`], a private copy parented to the
//! shared material that stores its own vector parameter overrides.

use std::collections::HashMap;
use std::sync::Arc;

use crate::foundation::math::Vec4;

/// Unique identifier for materials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub u32);

/// Shared material asset
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Unique identifier for this material
    pub id: MaterialId,
    /// Optional name for debugging
    pub name: Option<String>,
    /// Default values of the vector parameters the material exposes
    pub vector_defaults: HashMap<String, Vec4>,
}

impl Material {
    /// Create a new material with no parameters
    pub fn new(id: MaterialId) -> Self {
        Self {
            id,
            name: None,
            vector_defaults: HashMap::new(),
        }
    }

    /// Set the material name for debugging
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Declare a vector parameter with its default value
    pub fn with_vector_parameter(mut self, name: impl Into<String>, value: Vec4) -> Self {
        self.vector_defaults.insert(name.into(), value);
        self
    }
}

/// Per-instance material with runtime parameter overrides
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialInstanceDynamic {
    parent: Arc<Material>,
    vector_overrides: HashMap<String, Vec4>,
}

impl MaterialInstanceDynamic {
    /// Create an instance with no overrides
    pub fn new(parent: Arc<Material>) -> Self {
        Self {
            parent,
            vector_overrides: HashMap::new(),
        }
    }

    /// The shared material this instance overrides
    pub fn parent(&self) -> &Arc<Material> {
        &self.parent
    }

    /// Set (or replace) a vector parameter override
    pub fn set_vector_parameter_value(&mut self, name: &str, value: Vec4) {
        match self.vector_overrides.get_mut(name) {
            Some(existing) => *existing = value,
            None => {
                self.vector_overrides.insert(name.to_string(), value);
            }
        }
    }

    /// Effective value of a vector parameter (override, then parent default)
    pub fn vector_parameter_value(&self, name: &str) -> Option<Vec4> {
        self.vector_overrides
            .get(name)
            .or_else(|| self.parent.vector_defaults.get(name))
            .copied()
    }
}

/// Material bound to a mesh slot
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialInterface {
    /// Shared asset; parameters cannot be changed
    Shared(Arc<Material>),
    /// Private instance accepting runtime parameters
    Dynamic(MaterialInstanceDynamic),
}

impl MaterialInterface {
    /// The underlying shared material
    pub fn base_material(&self) -> &Arc<Material> {
        match self {
            Self::Shared(material) => material,
            Self::Dynamic(instance) => instance.parent(),
        }
    }

    /// The dynamic instance, if this slot already has one
    pub fn as_dynamic_mut(&mut self) -> Option<&mut MaterialInstanceDynamic> {
        match self {
            Self::Shared(_) => None,
            Self::Dynamic(instance) => Some(instance),
        }
    }

    /// Effective value of a vector parameter
    pub fn vector_parameter_value(&self, name: &str) -> Option<Vec4> {
        match self {
            Self::Shared(material) => material.vector_defaults.get(name).copied(),
            Self::Dynamic(instance) => instance.vector_parameter_value(name),
        }
    }
}

impl From<Arc<Material>> for MaterialInterface {
    fn from(material: Arc<Material>) -> Self {
        Self::Shared(material)
    }
}
