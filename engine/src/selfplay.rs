//! Random-policy batch games for balance statistics.
//!
//! Plays full games on generated maps with a cheap random policy: each turn
//! every ready unit steps to a random neighbour and the player trains
//! level-1 units on expansion cells while gold allows. Records final scores
//! per game for map-fairness analysis and emits JSONL summaries.

use std::cmp::Ordering as CmpOrdering;
use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::state::{BuildingKind, GameState, UnitId, PLAYER_COUNT, UNIT_COST};

/// Configuration for batch game generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Full turn rounds (both players) per game.
    pub max_turns: usize,
    /// Number of parallel threads (1 = sequential).
    pub threads: usize,
    /// Base seed; game `i` uses `seed + i`.
    pub seed: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            max_turns: 50,
            threads: 1,
            seed: 0,
        }
    }
}

/// Summary of one finished game.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub seed: u64,
    pub turns: usize,
    pub scores: Vec<i32>,
    /// Winning player by final score, `None` on a tie.
    pub winner: Option<usize>,
}

/// Plays one seeded game to the turn limit and returns its record.
pub fn play_game(seed: u64, max_turns: usize) -> GameRecord {
    let mut game = GameState::new(seed);
    game.generate_map();
    game.create_hqs(PLAYER_COUNT)
        .expect("two-player setup cannot fail");

    // Policy randomness is decoupled from terrain randomness so the same
    // map can be replayed under different policies.
    let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed_0f_c01d);

    for _ in 0..max_turns {
        for player in 0..PLAYER_COUNT {
            game.init_turn(player);
            random_actions(&mut game, player, &mut rng);
        }
    }

    let scores = game.scores();
    let winner = match scores[0].cmp(&scores[1]) {
        CmpOrdering::Greater => Some(0),
        CmpOrdering::Less => Some(1),
        CmpOrdering::Equal => None,
    };

    GameRecord {
        seed,
        turns: max_turns,
        scores,
        winner,
    }
}

/// One turn of the random policy for `player`.
fn random_actions(game: &mut GameState, player: usize, rng: &mut SmallRng) {
    let movers: Vec<UnitId> = game
        .units()
        .values()
        .filter(|u| u.owner == player && u.can_act())
        .map(|u| u.id)
        .collect();

    for id in movers {
        // A friendly move earlier this turn may have evicted this unit.
        let unit = match game.unit(id) {
            Some(unit) => unit,
            None => continue,
        };
        let neighbours: Vec<(usize, usize)> = game
            .cell(unit.x, unit.y)
            .neighbours
            .into_iter()
            .flatten()
            .collect();
        if neighbours.is_empty() {
            continue;
        }
        let (nx, ny) = neighbours[rng.gen_range(0..neighbours.len())];
        // HQ capture ends a real game; the turn-limit harness just avoids it.
        if game.cell(nx, ny).building == Some(BuildingKind::Hq) {
            continue;
        }
        game.move_unit(id, nx, ny);
    }

    for _ in 0..2 {
        if game.gold(player) < UNIT_COST[1] {
            break;
        }
        let candidates = expansion_cells(game, player);
        if candidates.is_empty() {
            break;
        }
        let (x, y) = candidates[rng.gen_range(0..candidates.len())];
        game.train_unit(player, 1, x, y);
    }
}

/// Playable cells bordering the player's active territory, excluding HQ
/// cells and cells already holding a friendly unit.
fn expansion_cells(game: &GameState, player: usize) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for (x, y) in game.grid().coords() {
        let cell = game.cell(x, y);
        if !(cell.owned_by(player) && cell.active) {
            continue;
        }
        for (nx, ny) in cell.neighbours.into_iter().flatten() {
            let target = game.cell(nx, ny);
            if target.building == Some(BuildingKind::Hq) {
                continue;
            }
            if target.unit.is_some() && target.owned_by(player) {
                continue;
            }
            if !cells.contains(&(nx, ny)) {
                cells.push((nx, ny));
            }
        }
    }
    cells
}

/// Plays the configured batch, sequentially or on a rayon pool.
pub fn run(config: &SelfPlayConfig) -> Vec<GameRecord> {
    if config.threads > 1 {
        run_parallel(config)
    } else {
        (0..config.num_games)
            .map(|i| play_game(config.seed + i as u64, config.max_turns))
            .collect()
    }
}

fn run_parallel(config: &SelfPlayConfig) -> Vec<GameRecord> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("failed to build rayon thread pool");

    pool.install(|| {
        (0..config.num_games)
            .into_par_iter()
            .map(|i| play_game(config.seed + i as u64, config.max_turns))
            .collect()
    })
}

/// Writes one JSON object per line.
pub fn write_jsonl<W: Write>(records: &[GameRecord], out: &mut W) -> io::Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record).map_err(io::Error::from)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Prints win/loss/tie counts to stderr.
pub fn print_summary(records: &[GameRecord]) {
    let mut wins = [0usize; PLAYER_COUNT];
    let mut ties = 0usize;
    for record in records {
        match record.winner {
            Some(player) => wins[player] += 1,
            None => ties += 1,
        }
    }
    eprintln!(
        "{} games: player 0 wins {}, player 1 wins {}, ties {}",
        records.len(),
        wins[0],
        wins[1],
        ties
    );
}
