//! Physics module for plane classification and collision toggling
//!
//! Provides the clipping [`Plane`], the bone-space collision shapes of a
//! skeletal body, and the pass that enables or disables each shape's
//! collision depending on which side of the plane it lies.

pub mod body;
pub mod collision;
pub mod collision_enabled;
pub mod collision_toggler;
pub mod plane;

pub use body::{BodyInstance, BodySetup, PhysicsAsset, SkeletalBody};
pub use collision::{
    BoundingSphere,
    Capsule,
    CollisionShape,
    OrientedBox,
    ShapeScale,
    WorldSpaceShape,
};
pub use collision_enabled::CollisionEnabled;
pub use collision_toggler::{update_shape_collision, ClipState, ToggleSummary};
pub use plane::Plane;
