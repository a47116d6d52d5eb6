//! Engine-vs-engine match generation.
//!
//! Plays full games between two search configurations, recording the
//! claim sequence and outcome of each for depth calibration and
//! heuristic regression checks. Games are independent, so the runner
//! can fan them out across a rayon thread pool; the search itself stays
//! single-threaded.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::board::{Game, Side};
use crate::search::best_move;

/// Configuration for a batch of engine-vs-engine games.
#[derive(Clone)]
pub struct MatchConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Board size parameter.
    pub n: u8,
    /// Search depth per seat.
    pub depths: [u32; 2],
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            num_games: 10,
            n: 3,
            depths: [2, 2],
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

/// A completed engine-vs-engine game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    /// Board size parameter.
    pub n: u8,
    /// Search depth per seat.
    pub depths: [u32; 2],
    /// Numbers in claim order; even indices belong to the first seat.
    pub moves: Vec<u8>,
    /// Winning seat (0 or 1), or `None` for a draw.
    pub winner: Option<u8>,
}

/// Plays one full game, each seat searching at its configured depth.
pub fn play_game(config: &MatchConfig, game_id: usize, rng: &mut SmallRng) -> GameRecord {
    assert!(
        config.depths[0] >= 1 && config.depths[1] >= 1,
        "search depth must be at least 1"
    );
    let game = Game::new(config.n);
    let mut position = game.initial_position();
    let mut moves = Vec::new();
    let mut seat = 0usize;

    while !position.is_terminal() {
        let number = best_move(&game, &position, config.depths[seat], rng)
            .expect("unfinished game has a best move");
        position = position
            .apply(number)
            .expect("search returned an illegal move");
        moves.push(number);
        seat = 1 - seat;
    }

    // Map the position-relative winner back to an absolute seat through
    // the final ply parity.
    let winner = position.winner().map(|side| {
        let to_move = (moves.len() % 2) as u8;
        match side {
            Side::Current => to_move,
            Side::Other => 1 - to_move,
        }
    });

    GameRecord {
        game_id,
        n: config.n,
        depths: config.depths,
        moves,
        winner,
    }
}

/// Runs a match batch, producing all game records.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_matches(config: &MatchConfig) -> Vec<GameRecord> {
    let mut games = Vec::with_capacity(config.num_games);
    run_matches_with_callback(config, |game| {
        games.push(game);
    });
    games
}

/// Runs a match batch, calling `on_game` with each completed record.
///
/// This allows the caller to process games incrementally (e.g. write to
/// disk) rather than waiting for the whole batch.
pub fn run_matches_with_callback<F>(config: &MatchConfig, on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    if config.threads > 1 {
        run_matches_parallel(config, on_game);
    } else {
        run_matches_sequential(config, on_game);
    }
}

fn report_game(config: &MatchConfig, completed: usize, record: &GameRecord, seconds: f64) {
    let outcome = match record.winner {
        Some(0) => "first wins",
        Some(_) => "second wins",
        None => "draw",
    };
    eprintln!(
        "Game {}/{}: {} in {} moves ({:.2}s)",
        completed,
        config.num_games,
        outcome,
        record.moves.len(),
        seconds,
    );
}

/// Sequential runner: plays games one at a time on one RNG stream.
fn run_matches_sequential<F>(config: &MatchConfig, mut on_game: F)
where
    F: FnMut(GameRecord),
{
    let mut rng = if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed)
    } else {
        SmallRng::from_entropy()
    };

    for i in 0..config.num_games {
        let start = Instant::now();
        let record = play_game(config, i, &mut rng);
        if !config.quiet {
            report_game(config, i + 1, &record, start.elapsed().as_secs_f64());
        }
        on_game(record);
    }
}

/// Parallel runner: plays games concurrently, delivering records to the
/// callback over a channel. Per-game seeds derive from the base seed so
/// a seeded batch is reproducible regardless of completion order.
fn run_matches_parallel<F>(config: &MatchConfig, mut on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    use rayon::prelude::*;
    use std::sync::mpsc;

    let completed = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<GameRecord>();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("failed to build rayon thread pool");

    let config_clone = config.clone();
    let handle = std::thread::spawn(move || {
        pool.install(|| {
            (0..config_clone.num_games)
                .into_par_iter()
                .for_each_with(tx, |tx, i| {
                    let mut rng = if config_clone.seed != 0 {
                        SmallRng::seed_from_u64(config_clone.seed.wrapping_add(i as u64))
                    } else {
                        SmallRng::from_entropy()
                    };
                    let start = Instant::now();
                    let record = play_game(&config_clone, i, &mut rng);
                    if !config_clone.quiet {
                        let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                        report_game(&config_clone, n, &record, start.elapsed().as_secs_f64());
                    }
                    let _ = tx.send(record);
                });
        });
    });

    for record in rx {
        on_game(record);
    }

    handle.join().expect("match worker thread panicked");
}

/// Writes records as JSONL: one JSON object per game, one per line.
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}
