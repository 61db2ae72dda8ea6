//! Referee command parser.
//!
//! Parses incoming line commands from the driver into structured `Command`
//! variants the referee loop can dispatch on.

use crate::state::building::BuildingKind;
use crate::state::unit::UnitId;
use crate::state::{MAX_UNIT_LEVEL, PLAYER_COUNT};

/// A parsed driver-to-referee command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a new game from a seed: generate the map and place both HQs.
    NewGame { seed: u64 },

    /// Emit the full game state from one player's perspective.
    State { player: usize },

    /// Resolve the start-of-turn state machine for one player.
    Turn { player: usize },

    /// Train a unit: `train <player> <level> <x> <y>`.
    Train {
        player: usize,
        level: usize,
        x: usize,
        y: usize,
    },

    /// Move a unit: `move <unit_id> <x> <y>`.
    Move { unit: UnitId, x: usize, y: usize },

    /// Construct a building: `build <player> <mine|tower> <x> <y>`.
    Build {
        player: usize,
        kind: BuildingKind,
        x: usize,
        y: usize,
    },

    /// Report one player's gold balance.
    Gold { player: usize },

    /// Report both players' material scores.
    Score,

    /// Terminate the referee process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "newgame" => {
            let seed = parse_arg::<u64>(&tokens, 1, "seed")?;
            Some(Command::NewGame { seed })
        }
        "state" => Some(Command::State {
            player: parse_player(&tokens, 1)?,
        }),
        "turn" => Some(Command::Turn {
            player: parse_player(&tokens, 1)?,
        }),
        "train" => {
            let player = parse_player(&tokens, 1)?;
            let level = parse_arg::<usize>(&tokens, 2, "level")?;
            if level == 0 || level > MAX_UNIT_LEVEL {
                eprintln!("train: level {} out of range", level);
                return None;
            }
            let x = parse_arg::<usize>(&tokens, 3, "x")?;
            let y = parse_arg::<usize>(&tokens, 4, "y")?;
            Some(Command::Train { player, level, x, y })
        }
        "move" => {
            let unit = UnitId(parse_arg::<u32>(&tokens, 1, "unit id")?);
            let x = parse_arg::<usize>(&tokens, 2, "x")?;
            let y = parse_arg::<usize>(&tokens, 3, "y")?;
            Some(Command::Move { unit, x, y })
        }
        "build" => {
            let player = parse_player(&tokens, 1)?;
            let kind = match tokens.get(2).copied().and_then(BuildingKind::from_name) {
                Some(kind) => kind,
                None => {
                    eprintln!("build: unknown building type");
                    return None;
                }
            };
            let x = parse_arg::<usize>(&tokens, 3, "x")?;
            let y = parse_arg::<usize>(&tokens, 4, "y")?;
            Some(Command::Build { player, kind, x, y })
        }
        "gold" => Some(Command::Gold {
            player: parse_player(&tokens, 1)?,
        }),
        "score" => Some(Command::Score),
        "quit" => Some(Command::Quit),
        _ => None,
    }
}

fn parse_arg<T: std::str::FromStr>(tokens: &[&str], idx: usize, what: &str) -> Option<T> {
    match tokens.get(idx).map(|t| t.parse::<T>()) {
        Some(Ok(value)) => Some(value),
        _ => {
            eprintln!("{}: missing or invalid {}", tokens[0], what);
            None
        }
    }
}

fn parse_player(tokens: &[&str], idx: usize) -> Option<usize> {
    let player = parse_arg::<usize>(tokens, idx, "player index")?;
    if player >= PLAYER_COUNT {
        eprintln!("{}: player index {} out of range", tokens[0], player);
        return None;
    }
    Some(player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_newgame_with_seed() {
        assert_eq!(
            parse_command("newgame 42"),
            Some(Command::NewGame { seed: 42 })
        );
    }

    #[test]
    fn parses_state_and_turn() {
        assert_eq!(parse_command("state 0"), Some(Command::State { player: 0 }));
        assert_eq!(parse_command("turn 1"), Some(Command::Turn { player: 1 }));
    }

    #[test]
    fn parses_train() {
        assert_eq!(
            parse_command("train 0 2 3 4"),
            Some(Command::Train {
                player: 0,
                level: 2,
                x: 3,
                y: 4
            })
        );
    }

    #[test]
    fn rejects_out_of_range_train_level() {
        assert_eq!(parse_command("train 0 0 3 4"), None);
        assert_eq!(parse_command("train 0 4 3 4"), None);
    }

    #[test]
    fn parses_move_and_build() {
        assert_eq!(
            parse_command("move 7 1 2"),
            Some(Command::Move {
                unit: UnitId(7),
                x: 1,
                y: 2
            })
        );
        assert_eq!(
            parse_command("build 1 mine 5 6"),
            Some(Command::Build {
                player: 1,
                kind: BuildingKind::Mine,
                x: 5,
                y: 6
            })
        );
    }

    #[test]
    fn rejects_unbuildable_kinds() {
        assert_eq!(parse_command("build 0 hq 0 0"), None);
        assert_eq!(parse_command("build 0 castle 0 0"), None);
    }

    #[test]
    fn rejects_out_of_range_player() {
        assert_eq!(parse_command("state 2"), None);
        assert_eq!(parse_command("gold 9"), None);
    }

    #[test]
    fn ignores_unknown_and_empty_lines() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("frobnicate 1 2"), None);
    }

    #[test]
    fn whitespace_is_flexible() {
        assert_eq!(parse_command("  score  "), Some(Command::Score));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }
}
