//! Coldfront -- a territory-control game core with a line-based referee
//! protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! An optional first argument names a JSON file of map-generation
//! parameters.

use std::io::{self, BufRead};
use std::path::Path;

use coldfront::config::GenParams;
use coldfront::protocol::parser::{parse_command, Command};
use coldfront::referee::Referee;

/// Runs the main referee loop, reading commands from stdin and writing
/// responses to stdout.
fn main() {
    let params = match std::env::args().nth(1) {
        Some(path) => match GenParams::load(Path::new(&path)) {
            Ok(params) => params,
            Err(e) => {
                eprintln!("{}", e);
                return;
            }
        },
        None => GenParams::default(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut referee = Referee::with_params(params);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::NewGame { seed } => referee.handle_new_game(seed, &mut out),
            Command::State { player } => referee.handle_state(player, &mut out),
            Command::Turn { player } => referee.handle_turn(player, &mut out),
            Command::Train { player, level, x, y } => {
                referee.handle_train(player, level, x, y, &mut out);
            }
            Command::Move { unit, x, y } => referee.handle_move(unit, x, y, &mut out),
            Command::Build { player, kind, x, y } => {
                referee.handle_build(player, kind, x, y, &mut out);
            }
            Command::Gold { player } => referee.handle_gold(player, &mut out),
            Command::Score => referee.handle_score(&mut out),
            Command::Quit => break,
        }
    }
}
