//! Game state and action handlers.
//!
//! `GameState` exclusively owns the grid, the unit registry, the building
//! list, and the per-player ledger. External collaborators read state and
//! mutate it only through the action handlers (train, move, build) and the
//! turn entry point.

pub mod building;
pub mod ledger;
pub mod unit;

use std::collections::BTreeMap;

pub use building::{Building, BuildingKind};
pub use ledger::{
    Ledger, CELL_INCOME, MAX_UNIT_LEVEL, MINE_INCOME, PLAYER_COUNT, STARTING_GOLD, UNIT_COST,
    UNIT_UPKEEP,
};
pub use unit::{Unit, UnitId};

use crate::config::GenParams;
use crate::grid::{Grid, Owner, MAP_HEIGHT, MAP_WIDTH};
use crate::mapgen;
use crate::turn;

/// Errors raised during game setup.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("unsupported player count: {0} (only 2-player games are implemented)")]
    UnsupportedPlayerCount(usize),
}

/// Authoritative simulation state of one game.
#[derive(Debug)]
pub struct GameState {
    grid: Grid,
    seed: u64,
    params: GenParams,
    units: BTreeMap<UnitId, Unit>,
    buildings: Vec<Building>,
    hqs: Vec<Building>,
    ledger: Ledger,
    next_unit_id: u32,
}

impl GameState {
    /// Creates a game on the stock map dimensions. The grid is empty until
    /// `generate_map` runs.
    pub fn new(seed: u64) -> Self {
        Self::with_params(seed, GenParams::default())
    }

    /// Creates a game with explicit generation parameters.
    pub fn with_params(seed: u64, params: GenParams) -> Self {
        Self::build(Grid::new(MAP_WIDTH, MAP_HEIGHT), seed, params)
    }

    /// Creates a game on a custom-sized grid. Intended for rule tests that
    /// hand-build small boards.
    pub fn with_dimensions(width: usize, height: usize, seed: u64) -> Self {
        Self::build(Grid::new(width, height), seed, GenParams::default())
    }

    fn build(grid: Grid, seed: u64, params: GenParams) -> Self {
        GameState {
            grid,
            seed,
            params,
            units: BTreeMap::new(),
            buildings: Vec::new(),
            hqs: Vec::new(),
            ledger: Ledger::new(PLAYER_COUNT, STARTING_GOLD),
            next_unit_id: 0,
        }
    }

    // accessors

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn cell(&self, x: usize, y: usize) -> &crate::grid::Cell {
        self.grid.cell(x, y)
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    /// Live units, keyed by id. Iteration order is ascending id.
    pub fn units(&self) -> &BTreeMap<UnitId, Unit> {
        &self.units
    }

    pub(crate) fn units_mut(&mut self) -> impl Iterator<Item = &mut Unit> {
        self.units.values_mut()
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn hqs(&self) -> &[Building] {
        &self.hqs
    }

    pub fn gold(&self, player: usize) -> i32 {
        self.ledger.gold(player)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Material worth per player: ledger gold plus the training cost of
    /// every unit the player currently owns.
    pub fn scores(&self) -> Vec<i32> {
        let mut scores: Vec<i32> = (0..PLAYER_COUNT).map(|p| self.ledger.gold(p)).collect();
        for unit in self.units.values() {
            scores[unit.owner] += UNIT_COST[unit.level];
        }
        scores
    }

    // setup

    /// Runs the procedural generator over this game's grid.
    pub fn generate_map(&mut self) {
        mapgen::generate(&mut self.grid, self.seed, &self.params);
    }

    /// Places both headquarters at the symmetric corners and claims their
    /// cells. Fails for any player count other than two.
    pub fn create_hqs(&mut self, players: usize) -> Result<(), SetupError> {
        if players != PLAYER_COUNT {
            return Err(SetupError::UnsupportedPlayerCount(players));
        }

        let (w, h) = (self.grid.width(), self.grid.height());
        for (player, (x, y)) in [(0, 0), (w - 1, h - 1)].into_iter().enumerate() {
            let cell = self.grid.cell_mut(x, y);
            cell.owner = Owner::Player(player);
            cell.building = Some(BuildingKind::Hq);
            self.hqs.push(Building::new(BuildingKind::Hq, player, x, y));
        }
        Ok(())
    }

    // turn entry points

    /// Resolves the start-of-turn state machine for one player.
    pub fn init_turn(&mut self, player: usize) {
        turn::init_turn(self, player);
    }

    /// Recomputes supply for every player in index order.
    pub fn compute_all_active_cells(&mut self) {
        turn::connectivity::compute_all_active_cells(self);
    }

    // action handlers

    /// Train: evicts any occupant of the target cell, registers the unit,
    /// claims the cell, and debits the level cost. Gold sufficiency and
    /// placement legality are the caller's contract.
    pub fn add_unit(&mut self, unit: Unit) {
        debug_assert!(unit.level <= MAX_UNIT_LEVEL, "unit level out of range");
        debug_assert!(
            self.grid.owner(unit.x, unit.y).is_passable(),
            "unit placed on impassable terrain"
        );

        self.clear_cell(unit.x, unit.y);
        self.ledger.add_and_get(unit.owner, -UNIT_COST[unit.level]);

        let cell = self.grid.cell_mut(unit.x, unit.y);
        cell.owner = Owner::Player(unit.owner);
        cell.unit = Some(unit.id);

        self.next_unit_id = self.next_unit_id.max(unit.id.0 + 1);
        self.units.insert(unit.id, unit);
    }

    /// Train with an id allocated by this state. Returns the new unit's id.
    pub fn train_unit(&mut self, owner: usize, level: usize, x: usize, y: usize) -> UnitId {
        let id = UnitId(self.next_unit_id);
        self.next_unit_id += 1;
        self.add_unit(Unit::new(id, owner, level, x, y));
        id
    }

    /// Move: evicts any occupant of the destination, vacates the old cell,
    /// and claims the destination. Movement is gold-free. A move onto the
    /// unit's own cell evicts nothing but still consumes the action.
    ///
    /// Panics if `id` does not name a live unit; that is a caller invariant
    /// violation, not a recoverable condition.
    pub fn move_unit(&mut self, id: UnitId, x: usize, y: usize) {
        let mut unit = match self.units.remove(&id) {
            Some(unit) => unit,
            None => panic!("move_unit: no live unit with id {:?}", id),
        };

        if (x, y) != (unit.x, unit.y) {
            self.clear_cell(x, y);
            let old = self.grid.cell_mut(unit.x, unit.y);
            if old.unit == Some(id) {
                old.unit = None;
            }
        }

        unit.mark_moved();
        unit.x = x;
        unit.y = y;

        let dest = self.grid.cell_mut(x, y);
        dest.owner = Owner::Player(unit.owner);
        dest.unit = Some(id);
        self.units.insert(id, unit);
    }

    /// Build: registers the building on its cell and debits the type cost.
    /// Callers must ensure the cell is free; no eviction happens here.
    pub fn add_building(&mut self, building: Building) {
        debug_assert!(
            building.kind != BuildingKind::Hq,
            "headquarters are placed once at game start"
        );

        self.ledger.add_and_get(building.owner, -building.kind.cost());
        self.grid.cell_mut(building.x, building.y).building = Some(building.kind);
        self.buildings.push(building);
    }

    // internal mutation

    /// Removes a unit from play and detaches it from its cell.
    pub(crate) fn kill_unit(&mut self, id: UnitId) {
        if let Some(mut unit) = self.units.remove(&id) {
            unit.die();
            let cell = self.grid.cell_mut(unit.x, unit.y);
            if cell.unit == Some(id) {
                cell.unit = None;
            }
        }
    }

    /// Evicts the unit and any non-headquarters building from a cell.
    fn clear_cell(&mut self, x: usize, y: usize) {
        if let Some(id) = self.grid.cell(x, y).unit {
            self.kill_unit(id);
        }
        if let Some(kind) = self.grid.cell(x, y).building {
            if kind != BuildingKind::Hq {
                self.buildings.retain(|b| !(b.x == x && b.y == y));
                self.grid.cell_mut(x, y).building = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_game(size: usize) -> GameState {
        let mut game = GameState::with_dimensions(size, size, 0);
        for (x, y) in game.grid().coords().collect::<Vec<_>>() {
            game.grid_mut().set_owner(x, y, Owner::Neutral);
        }
        game.grid_mut().compute_neighbours();
        game
    }

    #[test]
    fn create_hqs_rejects_non_two_player_games() {
        let mut game = open_game(5);
        assert!(matches!(
            game.create_hqs(3),
            Err(SetupError::UnsupportedPlayerCount(3))
        ));
        assert!(game.create_hqs(2).is_ok());
        assert_eq!(game.hqs().len(), 2);
        assert_eq!(game.cell(0, 0).owner, Owner::Player(0));
        assert_eq!(game.cell(4, 4).owner, Owner::Player(1));
    }

    #[test]
    fn training_claims_cell_and_debits_cost() {
        let mut game = open_game(5);
        let id = game.train_unit(0, 1, 2, 2);
        assert_eq!(game.cell(2, 2).owner, Owner::Player(0));
        assert_eq!(game.cell(2, 2).unit, Some(id));
        assert_eq!(game.gold(0), STARTING_GOLD - UNIT_COST[1]);
    }

    #[test]
    fn training_evicts_previous_occupants() {
        let mut game = open_game(5);
        let victim = game.train_unit(1, 1, 2, 2);
        game.add_building(Building::new(BuildingKind::Mine, 1, 3, 3));

        let id = game.train_unit(0, 2, 2, 2);
        assert!(game.unit(victim).is_none());
        assert_eq!(game.cell(2, 2).unit, Some(id));
        assert_eq!(game.cell(2, 2).owner, Owner::Player(0));

        // eviction also removes buildings on the target cell
        let trampler = game.train_unit(0, 1, 3, 3);
        assert!(game.buildings().is_empty());
        assert_eq!(game.cell(3, 3).unit, Some(trampler));
    }

    #[test]
    fn headquarters_survive_eviction() {
        let mut game = open_game(5);
        game.create_hqs(2).unwrap();
        game.train_unit(0, 1, 4, 4);
        assert_eq!(game.cell(4, 4).building, Some(BuildingKind::Hq));
        assert_eq!(game.hqs().len(), 2);
    }

    #[test]
    fn moving_vacates_and_claims() {
        let mut game = open_game(5);
        let id = game.train_unit(0, 1, 1, 1);
        let gold_before = game.gold(0);
        game.move_unit(id, 1, 2);

        assert_eq!(game.cell(1, 1).unit, None);
        assert_eq!(game.cell(1, 2).unit, Some(id));
        assert_eq!(game.cell(1, 2).owner, Owner::Player(0));
        let unit = game.unit(id).unwrap();
        assert_eq!((unit.x, unit.y), (1, 2));
        assert!(!unit.can_act());
        assert_eq!(game.gold(0), gold_before, "movement is gold-free");
    }

    #[test]
    fn moving_onto_own_cell_keeps_the_unit_alive() {
        let mut game = open_game(5);
        let id = game.train_unit(0, 1, 1, 0);
        game.move_unit(id, 1, 0);

        let unit = game.unit(id).expect("self-move must not kill the mover");
        assert_eq!((unit.x, unit.y), (1, 0));
        assert_eq!(game.cell(1, 0).unit, Some(id));
        assert!(!unit.can_act(), "self-move still consumes the action");
    }

    #[test]
    fn moving_onto_enemy_unit_kills_it() {
        let mut game = open_game(5);
        let attacker = game.train_unit(0, 2, 1, 1);
        let defender = game.train_unit(1, 1, 1, 2);
        game.move_unit(attacker, 1, 2);
        assert!(game.unit(defender).is_none());
        assert_eq!(game.cell(1, 2).unit, Some(attacker));
    }

    #[test]
    fn building_debits_type_cost_without_eviction() {
        let mut game = open_game(5);
        let id = game.train_unit(0, 1, 2, 2);
        game.add_building(Building::new(BuildingKind::Tower, 0, 3, 2));
        assert_eq!(
            game.gold(0),
            STARTING_GOLD - UNIT_COST[1] - BuildingKind::Tower.cost()
        );
        assert!(game.unit(id).is_some());
        assert_eq!(game.cell(3, 2).building, Some(BuildingKind::Tower));
    }

    #[test]
    fn scores_add_unit_value_to_gold() {
        let mut game = open_game(5);
        game.train_unit(0, 1, 1, 1);
        game.train_unit(0, 2, 2, 2);
        game.train_unit(1, 3, 3, 3);
        let scores = game.scores();
        assert_eq!(scores[0], game.gold(0) + UNIT_COST[1] + UNIT_COST[2]);
        assert_eq!(scores[1], game.gold(1) + UNIT_COST[3]);
    }

    #[test]
    fn unit_ids_are_never_reused() {
        let mut game = open_game(5);
        let a = game.train_unit(0, 1, 1, 1);
        let b = game.train_unit(1, 1, 1, 1); // evicts a
        assert!(game.unit(a).is_none());
        assert_ne!(a, b);
        let c = game.train_unit(0, 1, 2, 2);
        assert!(c > b);
    }
}
