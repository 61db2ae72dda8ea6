//! Per-player gold and the tables that drive it.
//!
//! Counters are lock-free atomics so end-of-turn scoring and other
//! observability reads can run concurrently with another player's turn
//! resolution; turn progression itself is single-threaded.

use std::sync::atomic::{AtomicI32, Ordering};

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

/// Training cost per unit level.
pub const UNIT_COST: [i32; 4] = [0, 10, 20, 30];

/// Per-turn upkeep per unit level.
pub const UNIT_UPKEEP: [i32; 4] = [0, 1, 4, 20];

/// Highest trainable unit level.
pub const MAX_UNIT_LEVEL: usize = 3;

/// Income per active owned cell per turn.
pub const CELL_INCOME: i32 = 1;

/// Income per active owned mine per turn.
pub const MINE_INCOME: i32 = 4;

/// Gold each player starts with: two level-1 unit trainings.
pub const STARTING_GOLD: i32 = 2 * UNIT_COST[1];

/// Per-player gold counters.
#[derive(Debug)]
pub struct Ledger {
    golds: Vec<AtomicI32>,
}

impl Ledger {
    /// Creates one counter per player at the starting balance.
    pub fn new(players: usize, starting_gold: i32) -> Self {
        Ledger {
            golds: (0..players).map(|_| AtomicI32::new(starting_gold)).collect(),
        }
    }

    /// Snapshot of a player's balance.
    pub fn gold(&self, player: usize) -> i32 {
        self.golds[player].load(Ordering::SeqCst)
    }

    /// Atomically applies `delta` and returns the new balance.
    pub fn add_and_get(&self, player: usize, delta: i32) -> i32 {
        self.golds[player].fetch_add(delta, Ordering::SeqCst) + delta
    }

    /// Overwrites a player's balance.
    pub fn set(&self, player: usize, value: i32) {
        self.golds[player].store(value, Ordering::SeqCst);
    }
}
