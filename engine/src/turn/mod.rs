//! Per-player turn resolution.
//!
//! Phases run strictly in order: supply recompute, separation deaths,
//! income and upkeep, bankruptcy wipeout, unit reset. Disconnection deaths
//! and wipeouts are normal state transitions, never errors.

pub mod connectivity;

use crate::state::{
    BuildingKind, GameState, UnitId, CELL_INCOME, MINE_INCOME, UNIT_UPKEEP,
};

/// Start-of-turn entry point for one player.
pub fn init_turn(state: &mut GameState, player: usize) {
    connectivity::compute_active_cells(state, player);
    kill_separated_units(state, player);
    compute_gold(state, player);
    if state.gold(player) < 0 {
        negative_gold_wipeout(state, player);
    }
    for unit in state.units_mut() {
        if unit.owner == player {
            unit.new_turn();
        }
    }
}

/// Units cut off from their headquarters die immediately; there is no
/// grace turn.
fn kill_separated_units(state: &mut GameState, player: usize) {
    let doomed: Vec<UnitId> = state
        .units()
        .values()
        .filter(|u| u.is_alive() && u.owner == player && !state.cell(u.x, u.y).active)
        .map(|u| u.id)
        .collect();
    for id in doomed {
        state.kill_unit(id);
    }
}

/// Applies the turn's net income: flat income per active owned cell, mine
/// income per active owned mine, minus level upkeep per live unit.
fn compute_gold(state: &mut GameState, player: usize) {
    let mut delta = 0;

    for (x, y) in state.grid().coords() {
        let cell = state.cell(x, y);
        if cell.owned_by(player) && cell.active {
            delta += CELL_INCOME;
        }
    }

    for building in state.buildings() {
        if building.owner == player
            && building.kind == BuildingKind::Mine
            && state.cell(building.x, building.y).active
        {
            delta += MINE_INCOME;
        }
    }

    for unit in state.units().values() {
        if unit.owner == player && unit.is_alive() {
            delta -= UNIT_UPKEEP[unit.level];
        }
    }

    state.ledger().add_and_get(player, delta);
}

/// Bankruptcy is catastrophic: the balance resets to zero and every
/// remaining unit the player owns dies.
fn negative_gold_wipeout(state: &mut GameState, player: usize) {
    state.ledger().set(player, 0);

    let doomed: Vec<UnitId> = state
        .units()
        .values()
        .filter(|u| u.is_alive() && u.owner == player)
        .map(|u| u.id)
        .collect();
    for id in doomed {
        state.kill_unit(id);
    }
}
