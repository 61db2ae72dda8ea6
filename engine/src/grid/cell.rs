//! Cell-level grid types.
//!
//! A cell carries its owner, its supply ("active") flag, and non-owning
//! references to the unit and building occupying it. Impassable cells are
//! excluded from the adjacency graph entirely.

use crate::state::building::BuildingKind;
use crate::state::unit::UnitId;

/// Ownership state of a single cell.
///
/// `Void` cells are impassable border terrain: they never hold units or
/// buildings and never appear as neighbours of playable cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    Void,
    Neutral,
    Player(usize),
}

impl Owner {
    /// Returns true for terrain that participates in the adjacency graph.
    pub const fn is_passable(self) -> bool {
        !matches!(self, Owner::Void)
    }

    /// Returns the owning player index, if any.
    pub const fn player(self) -> Option<usize> {
        match self {
            Owner::Player(p) => Some(p),
            _ => None,
        }
    }
}

/// The four cardinal directions, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

/// All directions in index order.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

impl Direction {
    /// Returns the (dx, dy) offset for this direction.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// A single grid cell.
///
/// Occupants are stored as ids into the game-state registries, never as
/// owning references; the grid arena is the only owner of cell memory.
#[derive(Debug, Clone)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub owner: Owner,
    /// True when this cell is connected to its owner's headquarters.
    pub active: bool,
    pub unit: Option<UnitId>,
    pub building: Option<BuildingKind>,
    /// Coordinates of passable neighbours, indexed by `Direction`.
    pub neighbours: [Option<(usize, usize)>; 4],
}

impl Cell {
    /// Creates an impassable, unoccupied cell at the given coordinates.
    pub fn new(x: usize, y: usize) -> Self {
        Cell {
            x,
            y,
            owner: Owner::Void,
            active: false,
            unit: None,
            building: None,
            neighbours: [None; 4],
        }
    }

    /// Returns true if this cell belongs to `player`.
    pub fn owned_by(&self, player: usize) -> bool {
        self.owner == Owner::Player(player)
    }
}
