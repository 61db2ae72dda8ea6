//! Supply connectivity.
//!
//! Recomputes which of a player's cells are "active": reachable from the
//! player's headquarters through a path of same-owner cells. Always a full
//! rebuild from the headquarters; ownership changes every turn make
//! incremental patching unsound.

use std::collections::VecDeque;

use crate::state::{GameState, PLAYER_COUNT};

/// Recomputes the active flag on every cell owned by `player`.
pub fn compute_active_cells(state: &mut GameState, player: usize) {
    let coords: Vec<(usize, usize)> = state.grid().coords().collect();
    for &(x, y) in &coords {
        if state.cell(x, y).owned_by(player) {
            state.grid_mut().cell_mut(x, y).active = false;
        }
    }

    // The headquarters anchors supply; it exists for the whole game.
    let hq = &state.hqs()[player];
    let start = (hq.x, hq.y);

    let mut queue = VecDeque::new();
    state.grid_mut().cell_mut(start.0, start.1).active = true;
    queue.push_back(start);

    while let Some((x, y)) = queue.pop_front() {
        let neighbours = state.cell(x, y).neighbours;
        for (nx, ny) in neighbours.into_iter().flatten() {
            let cell = state.grid_mut().cell_mut(nx, ny);
            if cell.owned_by(player) && !cell.active {
                cell.active = true;
                queue.push_back((nx, ny));
            }
        }
    }
}

/// Recomputes supply for every player in index order.
pub fn compute_all_active_cells(state: &mut GameState) {
    for player in 0..PLAYER_COUNT {
        compute_active_cells(state, player);
    }
}
