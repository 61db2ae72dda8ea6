//! Grid representation.
//!
//! Contains the cell arena, ownership states, and adjacency handling shared
//! by the map generator and the turn engine.

pub mod cell;
pub mod map;

pub use cell::{Cell, Direction, Owner, ALL_DIRECTIONS};
pub use map::{Grid, MAP_HEIGHT, MAP_WIDTH};
