//! Serializable actor descriptions
//!
//! Lets tools and demos author an actor (materials, meshes, physics bodies
//! and bone poses) in RON and build a live [`Actor`] from it. TOML loads too,
//! but it has no `None`, so empty material slots need RON.
//!
//! ```ron
//! (
//!     name: "crate",
//!     materials: [(name: "wood", id: 1)],
//!     meshes: [(name: "crate_mesh", materials: [Some("wood")])],
//! )
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Serialize, Deserialize};

use crate::config::Config;
use crate::core::config::ClippingConfig;
use crate::foundation::math::{Transform, Vec3};
use crate::physics::{BodySetup, PhysicsAsset, SkeletalBody};
use crate::render::{Material, MaterialId, MeshComponent};
use super::actor::Actor;
use super::SceneError;

/// A shared material asset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialDescription {
    /// Name referenced by mesh slots
    pub name: String,
    /// Material identifier
    pub id: u32,
}

/// A mesh and the material bound to each of its slots
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshDescription {
    /// Component name
    pub name: String,
    /// Material name per slot; `None` leaves the slot empty (RON only)
    pub materials: Vec<Option<String>>,
}

/// A skeletal body, its physics asset and the current bone poses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkeletalDescription {
    /// World-space component scale
    pub component_scale: Vec3,
    /// Name of the physics asset; ignored if `bodies` is `None`
    pub physics_asset: String,
    /// Body setups; `None` means the mesh has no physics asset
    pub bodies: Option<Vec<BodySetup>>,
    /// World transform of each bone by name
    pub bones: HashMap<String, Transform>,
}

impl Default for SkeletalDescription {
    fn default() -> Self {
        Self {
            component_scale: Vec3::new(1.0, 1.0, 1.0),
            physics_asset: String::new(),
            bodies: None,
            bones: HashMap::new(),
        }
    }
}

/// Complete description of one actor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorDescription {
    /// Actor name
    pub name: String,
    /// Actor world transform
    pub transform: Transform,
    /// Materials available to the meshes
    pub materials: Vec<MaterialDescription>,
    /// Renderable meshes
    pub meshes: Vec<MeshDescription>,
    /// Physics representation
    pub skeletal: Option<SkeletalDescription>,
}

impl Config for ActorDescription {}

impl ActorDescription {
    /// Load a description file and build the actor it describes
    pub fn load_actor(path: impl AsRef<std::path::Path>, config: ClippingConfig) -> Result<Actor, SceneError> {
        let path = path.as_ref();
        log::info!("Loading actor description from {}", path.display());
        Self::load_from_file(path)?.build(config)
    }

    /// Build a live actor
    ///
    /// Fails if a mesh slot references a material that is not declared.
    pub fn build(&self, config: ClippingConfig) -> Result<Actor, SceneError> {
        let materials: HashMap<&str, Arc<Material>> = self
            .materials
            .iter()
            .map(|desc| {
                let material = Material::new(MaterialId(desc.id)).with_name(desc.name.clone());
                (desc.name.as_str(), Arc::new(material))
            })
            .collect();

        let mut actor = Actor::new(self.name.clone(), config).with_transform(self.transform);

        for mesh_desc in &self.meshes {
            let mut mesh = MeshComponent::new(mesh_desc.name.clone());
            for slot in &mesh_desc.materials {
                mesh = match slot {
                    Some(name) => {
                        let material = materials
                            .get(name.as_str())
                            .ok_or_else(|| SceneError::UnknownMaterial(name.clone()))?;
                        mesh.with_material(Arc::clone(material))
                    }
                    None => mesh.with_empty_slot(),
                };
            }
            actor = actor.with_mesh(mesh);
        }

        if let Some(skeletal_desc) = &self.skeletal {
            actor = actor.with_skeletal(skeletal_desc.build());
        }

        log::debug!(
            "Built actor '{}' with {} meshes",
            actor.name,
            actor.meshes.len()
        );

        Ok(actor)
    }
}

impl SkeletalDescription {
    fn build(&self) -> SkeletalBody {
        match &self.bodies {
            Some(bodies) => {
                let asset = Arc::new(PhysicsAsset::new(self.physics_asset.clone(), bodies.clone()));
                SkeletalBody::from_physics_asset(asset, self.component_scale, |bone| self.bones.get(bone).copied())
            }
            None => SkeletalBody {
                component_scale: self.component_scale,
                ..SkeletalBody::new()
            },
        }
    }
}
