//! Integration tests for the coldfront referee binary.
//!
//! Tests full protocol sessions by spawning the binary, sending commands
//! via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the referee and collects stdout lines.
fn run_referee(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_coldfront");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start coldfront");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

#[test]
fn newgame_replies_ready() {
    let lines = run_referee(&["newgame 42", "quit"]);
    assert_eq!(lines, vec!["ready"]);
}

#[test]
fn state_block_has_the_wire_shape() {
    let lines = run_referee(&["newgame 42", "state 0", "quit"]);

    assert_eq!(lines[0], "ready");
    assert_eq!(lines[1], "20", "starting gold");

    // 12 map rows of 12 perspective characters each.
    let map_rows = &lines[2..14];
    for row in map_rows {
        assert_eq!(row.len(), 12);
        assert!(row.chars().all(|c| "#.oxOX".contains(c)), "bad row: {}", row);
    }
    // Own HQ top-left, opponent bottom-right, both supplied.
    assert!(map_rows[0].starts_with('O'));
    assert!(map_rows[11].ends_with('X'));

    // Two buildings: both HQs, viewer-relative owners.
    assert_eq!(lines[14], "2");
    assert_eq!(lines[15], "0 0 0 0");
    assert_eq!(lines[16], "0 1 11 11");

    // No units yet.
    assert_eq!(lines[17], "0");
}

#[test]
fn opposite_perspectives_swap_hq_owners() {
    let lines = run_referee(&["newgame 7", "state 1", "quit"]);
    assert_eq!(lines[15], "0 1 0 0");
    assert_eq!(lines[16], "0 0 11 11");
}

#[test]
fn train_move_and_economy_round_trip() {
    let lines = run_referee(&[
        "newgame 42",
        "train 0 1 0 1",
        "gold 0",
        "move 0 0 2",
        "score",
        "turn 0",
        "gold 0",
        "quit",
    ]);

    assert_eq!(lines[0], "ready");
    assert_eq!(lines[1], "unit 0");
    assert_eq!(lines[2], "gold 10");
    assert_eq!(lines[3], "moveok");
    // Unit value counts toward its owner's score.
    assert_eq!(lines[4], "score 20 20");
    assert_eq!(lines[5], "turnok");
    // Three supplied cells earn 3, the level-1 unit costs 1 upkeep.
    assert_eq!(lines[6], "gold 12");
}

#[test]
fn build_debits_and_shows_up_in_state() {
    let lines = run_referee(&[
        "newgame 42",
        "build 0 tower 1 1",
        "gold 0",
        "state 0",
        "quit",
    ]);

    assert_eq!(lines[1], "buildok");
    assert_eq!(lines[2], "gold 5");
    // Building list: two HQs plus the tower.
    assert_eq!(lines[16], "3");
    assert_eq!(lines[19], "2 0 1 1");
}

#[test]
fn trained_units_appear_in_the_unit_list() {
    let lines = run_referee(&["newgame 42", "train 1 2 11 10", "state 1", "quit"]);
    assert_eq!(lines[1], "unit 0");
    let unit_count_idx = lines.len() - 2;
    assert_eq!(lines[unit_count_idx], "1");
    assert_eq!(lines[unit_count_idx + 1], "0 0 2 11 10");
}

#[test]
fn invalid_commands_are_silently_ignored() {
    let lines = run_referee(&[
        "newgame 42",
        "frobnicate",
        "train 0 9 0 1",
        "state 5",
        "move 99 0 1",
        "gold 0",
        "quit",
    ]);
    assert_eq!(lines, vec!["ready", "gold 20"]);
}

#[test]
fn session_without_newgame_produces_no_output() {
    let lines = run_referee(&["state 0", "turn 1", "score", "quit"]);
    assert!(lines.is_empty());
}

#[test]
fn same_seed_sessions_render_identical_maps() {
    let a = run_referee(&["newgame 123", "state 0", "quit"]);
    let b = run_referee(&["newgame 123", "state 0", "quit"]);
    assert_eq!(a, b);
}
