//! Per-shape collision enable flags

use bitflags::bitflags;

bitflags! {
    /// Which systems consider a collision shape
    ///
    /// An empty set means the shape is ignored entirely.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CollisionEnabled: u8 {
        /// Raycasts, sweeps and overlaps
        const QUERY = 1 << 0;
        /// Rigid-body simulation
        const PHYSICS = 1 << 1;
        /// Both queries and simulation
        const QUERY_AND_PHYSICS = Self::QUERY.bits() | Self::PHYSICS.bits();
    }
}

impl CollisionEnabled {
    /// No collision at all
    pub const NO_COLLISION: Self = Self::empty();

    /// State for a shape that is visible (or not visible) above the plane
    pub fn from_visibility(visible: bool) -> Self {
        if visible {
            Self::QUERY_AND_PHYSICS
        } else {
            Self::NO_COLLISION
        }
    }
}

impl Default for CollisionEnabled {
    fn default() -> Self {
        Self::QUERY_AND_PHYSICS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_visibility() {
        assert_eq!(CollisionEnabled::from_visibility(true), CollisionEnabled::QUERY_AND_PHYSICS);
        assert!(CollisionEnabled::from_visibility(false).is_empty());
    }

    #[test]
    fn test_query_and_physics_contains_both() {
        let flags = CollisionEnabled::QUERY_AND_PHYSICS;
        assert!(flags.contains(CollisionEnabled::QUERY));
        assert!(flags.contains(CollisionEnabled::PHYSICS));
        assert_eq!(CollisionEnabled::default(), flags);
    }
}
