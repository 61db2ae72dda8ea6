//! Buildings.
//!
//! Exactly two headquarters exist, one per player, created at game start and
//! never destroyed while the game runs; they anchor territory connectivity.
//! Buildable types (mines, towers) can be evicted like units.

/// The type of a building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildingKind {
    Hq,
    Mine,
    Tower,
}

impl BuildingKind {
    /// Returns the integer code used in the wire format.
    pub const fn wire_int(self) -> u32 {
        match self {
            BuildingKind::Hq => 0,
            BuildingKind::Mine => 1,
            BuildingKind::Tower => 2,
        }
    }

    /// Parses a buildable type name from the referee command syntax.
    /// Headquarters are not buildable.
    pub fn from_name(name: &str) -> Option<BuildingKind> {
        match name {
            "mine" => Some(BuildingKind::Mine),
            "tower" => Some(BuildingKind::Tower),
            _ => None,
        }
    }

    /// Construction cost in gold.
    pub const fn cost(self) -> i32 {
        match self {
            BuildingKind::Hq => 0,
            BuildingKind::Mine => 20,
            BuildingKind::Tower => 15,
        }
    }
}

/// A building on the grid.
#[derive(Debug, Clone)]
pub struct Building {
    pub kind: BuildingKind,
    pub owner: usize,
    pub x: usize,
    pub y: usize,
}

impl Building {
    pub fn new(kind: BuildingKind, owner: usize, x: usize, y: usize) -> Self {
        Building { kind, owner, x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_ints_are_stable() {
        assert_eq!(BuildingKind::Hq.wire_int(), 0);
        assert_eq!(BuildingKind::Mine.wire_int(), 1);
        assert_eq!(BuildingKind::Tower.wire_int(), 2);
    }

    #[test]
    fn only_mines_and_towers_are_buildable_by_name() {
        assert_eq!(BuildingKind::from_name("mine"), Some(BuildingKind::Mine));
        assert_eq!(BuildingKind::from_name("tower"), Some(BuildingKind::Tower));
        assert_eq!(BuildingKind::from_name("hq"), None);
        assert_eq!(BuildingKind::from_name(""), None);
    }

    #[test]
    fn hq_is_free_to_place() {
        assert_eq!(BuildingKind::Hq.cost(), 0);
        assert!(BuildingKind::Mine.cost() > 0);
        assert!(BuildingKind::Tower.cost() > 0);
    }
}
