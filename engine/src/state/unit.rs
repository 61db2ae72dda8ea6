//! Units and their turn lifecycle.
//!
//! A unit belongs to one player, occupies exactly one cell, and is tracked
//! by a unique integer id in the game-state registry. The core only needs
//! its level (for cost and upkeep), its liveness, and the per-turn action
//! reset; richer behaviour lives with the command-decoding collaborator.

/// Unique identifier of a unit. Ids are never reused within a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitId(pub u32);

/// A unit on the grid.
#[derive(Debug, Clone)]
pub struct Unit {
    pub id: UnitId,
    pub owner: usize,
    /// Index into the cost and upkeep tables.
    pub level: usize,
    pub x: usize,
    pub y: usize,
    alive: bool,
    can_act: bool,
}

impl Unit {
    /// Creates a live unit. Freshly trained units cannot act until their
    /// owner's next turn begins.
    pub fn new(id: UnitId, owner: usize, level: usize, x: usize, y: usize) -> Self {
        Unit {
            id,
            owner,
            level,
            x,
            y,
            alive: true,
            can_act: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn can_act(&self) -> bool {
        self.can_act
    }

    /// Turn-reset hook: re-enables movement and actions.
    pub fn new_turn(&mut self) {
        self.can_act = true;
    }

    /// Consumes this unit's action for the current turn.
    pub fn mark_moved(&mut self) {
        self.can_act = false;
    }

    pub fn die(&mut self) {
        self.alive = false;
    }
}
