//! Batch game generation CLI.
//!
//! Plays random-policy games on generated maps and outputs one JSON record
//! per game.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N     Number of games to play (default: 10)
//!   --turns N     Turn rounds per game (default: 50)
//!   --threads N   Number of parallel threads (default: 1)
//!   --seed N      Base seed; game i uses seed + i (default: 0)
//!   --output FILE Output file path (default: stdout)
//!   --quiet       Suppress the stderr summary

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::time::Instant;

use coldfront::selfplay::{self, SelfPlayConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = SelfPlayConfig::default();
    let mut output_path: Option<String> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.num_games = args[i].parse().expect("invalid --games value");
            }
            "--turns" => {
                i += 1;
                config.max_turns = args[i].parse().expect("invalid --turns value");
            }
            "--threads" => {
                i += 1;
                config.threads = args[i].parse().expect("invalid --threads value");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("invalid --seed value");
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--quiet" => {
                quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let start = Instant::now();
    let records = selfplay::run(&config);
    let elapsed = start.elapsed();

    if !quiet {
        eprintln!(
            "Played {} games in {:.1}s",
            records.len(),
            elapsed.as_secs_f64()
        );
        selfplay::print_summary(&records);
    }

    match output_path {
        Some(path) => {
            let file = File::create(&path).expect("failed to create output file");
            let mut writer = BufWriter::new(file);
            selfplay::write_jsonl(&records, &mut writer).expect("failed to write output");
            if !quiet {
                eprintln!("Wrote {} records to {}", records.len(), path);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            selfplay::write_jsonl(&records, &mut writer).expect("failed to write output");
        }
    }
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N      Number of games to play (default: 10)");
    eprintln!("  --turns N      Turn rounds per game (default: 50)");
    eprintln!("  --threads N    Number of parallel threads (default: 1)");
    eprintln!("  --seed N       Base seed; game i uses seed + i (default: 0)");
    eprintln!("  --output FILE  Output file path (default: stdout)");
    eprintln!("  --quiet        Suppress the stderr summary");
    eprintln!("  --help         Show this help");
}
