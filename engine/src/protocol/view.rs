//! Perspective-relative state serialization.
//!
//! Emits the full game state as the wire format one player sees: gold, a
//! character grid, then buildings and units with owner indices rotated so
//! index 0 always denotes the viewing player.

use std::io::{self, Write};

use crate::grid::Owner;
use crate::state::{GameState, PLAYER_COUNT};

/// Rotates an absolute owner index into the viewer's frame: the viewer is
/// always 0, their opponent 1.
pub fn relative_owner(owner: usize, viewer: usize) -> usize {
    (owner + PLAYER_COUNT - viewer) % PLAYER_COUNT
}

/// Returns the map character for a cell as seen by `viewer`:
/// `#` impassable, `.` unclaimed, `o`/`x` own/opponent territory,
/// uppercased when the cell is active.
fn cell_char(owner: Owner, active: bool, viewer: usize) -> char {
    match owner {
        Owner::Void => '#',
        Owner::Neutral => '.',
        Owner::Player(p) => {
            let c = if p == viewer { 'o' } else { 'x' };
            if active {
                c.to_ascii_uppercase()
            } else {
                c
            }
        }
    }
}

/// Writes the full state block for one player: gold, map rows, building
/// count and lines, unit count and lines.
pub fn send_state<W: Write>(state: &GameState, viewer: usize, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", state.gold(viewer))?;
    send_map(state, viewer, out)?;
    send_buildings(state, viewer, out)?;
    send_units(state, viewer, out)?;
    Ok(())
}

fn send_map<W: Write>(state: &GameState, viewer: usize, out: &mut W) -> io::Result<()> {
    let grid = state.grid();
    for y in 0..grid.height() {
        let mut line = String::with_capacity(grid.width());
        for x in 0..grid.width() {
            let cell = grid.cell(x, y);
            line.push(cell_char(cell.owner, cell.active, viewer));
        }
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn send_buildings<W: Write>(state: &GameState, viewer: usize, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", state.hqs().len() + state.buildings().len())?;
    for building in state.hqs().iter().chain(state.buildings()) {
        writeln!(
            out,
            "{} {} {} {}",
            building.kind.wire_int(),
            relative_owner(building.owner, viewer),
            building.x,
            building.y
        )?;
    }
    Ok(())
}

fn send_units<W: Write>(state: &GameState, viewer: usize, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", state.units().len())?;
    for unit in state.units().values() {
        writeln!(
            out,
            "{} {} {} {} {}",
            unit.id.0,
            relative_owner(unit.owner, viewer),
            unit.level,
            unit.x,
            unit.y
        )?;
    }
    Ok(())
}
