//! Engine-vs-engine match generation CLI.
//!
//! Plays number-picking games via self-play and outputs game records as
//! JSONL.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N     Number of games to play (default: 10)
//!   --size N      Board size parameter n (default: 3)
//!   --first D     Search depth for the first seat (default: 2)
//!   --second D    Search depth for the second seat (default: 2)
//!   --threads N   Number of parallel threads (default: 4)
//!   --seed N      Random seed, 0 for entropy (default: 0)
//!   --output FILE Output file path (default: stdout)
//!   --quiet       Suppress per-game progress output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use picksum::selfplay::{run_matches_with_callback, write_jsonl, MatchConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = MatchConfig::default();
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.num_games = args[i].parse().expect("invalid --games value");
            }
            "--size" => {
                i += 1;
                config.n = args[i].parse().expect("invalid --size value");
            }
            "--first" => {
                i += 1;
                config.depths[0] = args[i].parse().expect("invalid --first value");
            }
            "--second" => {
                i += 1;
                config.depths[1] = args[i].parse().expect("invalid --second value");
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
                config.quiet = true;
            }
            other => {
                eprintln!("unknown option: {}", other);
                std::process::exit(2);
            }
        }
        i += 1;
    }

    let start = Instant::now();
    let mut out: Box<dyn Write + Send> = match &output_path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).expect("failed to create output file"),
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let mut first_wins = 0usize;
    let mut second_wins = 0usize;
    let mut draws = 0usize;

    run_matches_with_callback(&config, |record| {
        match record.winner {
            Some(0) => first_wins += 1,
            Some(_) => second_wins += 1,
            None => draws += 1,
        }
        write_jsonl(std::slice::from_ref(&record), &mut out).expect("failed to write record");
    });

    eprintln!(
        "{} games in {:.1}s: first {} / second {} / draws {} (n = {}, depths {:?})",
        config.num_games,
        start.elapsed().as_secs_f64(),
        first_wins,
        second_wins,
        draws,
        config.n,
        config.depths,
    );
}
