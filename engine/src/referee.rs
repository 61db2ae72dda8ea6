//! Referee command dispatch.
//!
//! Holds the live game between commands and maps each parsed `Command` to
//! core operations plus a wire response. Invalid commands are reported on
//! stderr and produce no stdout response.

use std::io::Write;

use crate::config::GenParams;
use crate::protocol::view::send_state;
use crate::state::{Building, BuildingKind, GameState, UnitId, PLAYER_COUNT, UNIT_COST};

/// Holds the mutable referee state between commands.
pub struct Referee {
    pub game: Option<GameState>,
    params: GenParams,
}

impl Referee {
    /// Creates a referee with stock generation parameters and no game.
    pub fn new() -> Self {
        Self::with_params(GenParams::default())
    }

    /// Creates a referee with explicit generation parameters.
    pub fn with_params(params: GenParams) -> Self {
        Referee { game: None, params }
    }

    /// Starts a new game: fresh state, generated map, both HQs placed.
    pub fn handle_new_game<W: Write>(&mut self, seed: u64, out: &mut W) {
        let mut game = GameState::with_params(seed, self.params.clone());
        game.generate_map();
        match game.create_hqs(PLAYER_COUNT) {
            Ok(()) => {
                self.game = Some(game);
                writeln!(out, "ready").unwrap();
                out.flush().unwrap();
            }
            Err(e) => eprintln!("newgame: {}", e),
        }
    }

    /// Emits the full state block from one player's perspective.
    pub fn handle_state<W: Write>(&mut self, player: usize, out: &mut W) {
        let game = match &mut self.game {
            Some(game) => game,
            None => {
                eprintln!("state: no game in progress");
                return;
            }
        };
        game.compute_all_active_cells();
        send_state(game, player, out).unwrap();
        out.flush().unwrap();
    }

    /// Runs the start-of-turn state machine for one player.
    pub fn handle_turn<W: Write>(&mut self, player: usize, out: &mut W) {
        if let Some(game) = &mut self.game {
            game.init_turn(player);
            writeln!(out, "turnok").unwrap();
            out.flush().unwrap();
        } else {
            eprintln!("turn: no game in progress");
        }
    }

    /// Trains a unit after validating placement and funds.
    pub fn handle_train<W: Write>(
        &mut self,
        player: usize,
        level: usize,
        x: usize,
        y: usize,
        out: &mut W,
    ) {
        let game = match &mut self.game {
            Some(game) => game,
            None => {
                eprintln!("train: no game in progress");
                return;
            }
        };
        if !game.grid().is_inside(x as isize, y as isize) {
            eprintln!("train: ({}, {}) is not a playable cell", x, y);
            return;
        }
        if game.gold(player) < UNIT_COST[level] {
            eprintln!("train: player {} cannot afford a level {} unit", player, level);
            return;
        }
        let id = game.train_unit(player, level, x, y);
        writeln!(out, "unit {}", id.0).unwrap();
        out.flush().unwrap();
    }

    /// Moves a unit after validating it exists and the destination is playable.
    pub fn handle_move<W: Write>(&mut self, unit: UnitId, x: usize, y: usize, out: &mut W) {
        let game = match &mut self.game {
            Some(game) => game,
            None => {
                eprintln!("move: no game in progress");
                return;
            }
        };
        if game.unit(unit).is_none() {
            eprintln!("move: no live unit with id {}", unit.0);
            return;
        }
        if !game.grid().is_inside(x as isize, y as isize) {
            eprintln!("move: ({}, {}) is not a playable cell", x, y);
            return;
        }
        game.move_unit(unit, x, y);
        writeln!(out, "moveok").unwrap();
        out.flush().unwrap();
    }

    /// Constructs a building after validating the cell is playable and free.
    pub fn handle_build<W: Write>(
        &mut self,
        player: usize,
        kind: BuildingKind,
        x: usize,
        y: usize,
        out: &mut W,
    ) {
        let game = match &mut self.game {
            Some(game) => game,
            None => {
                eprintln!("build: no game in progress");
                return;
            }
        };
        if !game.grid().is_inside(x as isize, y as isize) {
            eprintln!("build: ({}, {}) is not a playable cell", x, y);
            return;
        }
        let cell = game.cell(x, y);
        if cell.unit.is_some() || cell.building.is_some() {
            eprintln!("build: ({}, {}) is occupied", x, y);
            return;
        }
        if game.gold(player) < kind.cost() {
            eprintln!("build: player {} cannot afford it", player);
            return;
        }
        game.add_building(Building::new(kind, player, x, y));
        writeln!(out, "buildok").unwrap();
        out.flush().unwrap();
    }

    /// Reports one player's gold balance.
    pub fn handle_gold<W: Write>(&self, player: usize, out: &mut W) {
        if let Some(game) = &self.game {
            writeln!(out, "gold {}", game.gold(player)).unwrap();
            out.flush().unwrap();
        } else {
            eprintln!("gold: no game in progress");
        }
    }

    /// Reports both players' material scores.
    pub fn handle_score<W: Write>(&self, out: &mut W) {
        if let Some(game) = &self.game {
            let scores = game.scores();
            writeln!(out, "score {} {}", scores[0], scores[1]).unwrap();
            out.flush().unwrap();
        } else {
            eprintln!("score: no game in progress");
        }
    }
}

impl Default for Referee {
    fn default() -> Self {
        Self::new()
    }
}
