//! Interactive game driver.
//!
//! Holds the live game between a human (moving first) and the engine's
//! search, and runs the console loop for the binary entry point. All I/O
//! goes through generic `BufRead`/`Write` handles so tests can drive a
//! session with byte buffers.

use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{Game, MoveError, Position, Side, MAX_SIZE};
use crate::search::best_move;

/// Deepest search the console accepts; the tree is exhausted long before
/// this on any playable board.
const MAX_CONSOLE_DEPTH: u64 = 16;

/// Seats at the table, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// Moved at ply 0.
    First,
    /// Moved at ply 1.
    Second,
}

impl Seat {
    fn opponent(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// A live human-vs-engine game. The human holds the first seat.
pub struct Session {
    game: Game,
    position: Position,
    depth: u32,
    rng: SmallRng,
}

impl Session {
    /// Starts a session with an entropy-seeded tie-break RNG.
    pub fn new(n: u8, depth: u32) -> Session {
        Session::with_rng(n, depth, SmallRng::from_entropy())
    }

    /// Starts a session with a caller-supplied RNG, for reproducible
    /// play.
    pub fn with_rng(n: u8, depth: u32, rng: SmallRng) -> Session {
        let game = Game::new(n);
        let position = game.initial_position();
        Session {
            game,
            position,
            depth,
            rng,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Applies the human's pick. Invalid picks are surfaced to the
    /// caller and leave the position untouched.
    pub fn play_human(&mut self, number: u8) -> Result<(), MoveError> {
        self.position = self.position.apply(number)?;
        Ok(())
    }

    /// Searches and applies the engine's reply, returning the number it
    /// took. Returns `None` once the game is over.
    pub fn play_engine(&mut self) -> Option<u8> {
        let number = best_move(&self.game, &self.position, self.depth, &mut self.rng)?;
        self.position = self
            .position
            .apply(number)
            .expect("search returned an illegal move");
        Some(number)
    }

    pub fn is_over(&self) -> bool {
        self.position.is_terminal()
    }

    /// The seat holding a winning subset, or `None` for a draw or an
    /// unfinished game.
    ///
    /// The position only knows the winner relative to its player to
    /// move; ply parity recovers the absolute seat.
    pub fn winning_seat(&self) -> Option<Seat> {
        let side = self.position.winner()?;
        let to_move = if self.position.ply() % 2 == 0 {
            Seat::First
        } else {
            Seat::Second
        };
        Some(match side {
            Side::Current => to_move,
            Side::Other => to_move.opponent(),
        })
    }
}

/// Runs the interactive console game: prompts for the board size and
/// search depth, then alternates human picks with engine replies until
/// the game ends. EOF at any prompt ends the session cleanly.
pub fn run_console<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
    let n = match prompt_number(input, out, "Board size (3-5 is reasonable): ", 1, MAX_SIZE as u64)? {
        Some(value) => value as u8,
        None => return Ok(()),
    };
    let depth = match prompt_number(
        input,
        out,
        "Search depth (1-5 is reasonable): ",
        1,
        MAX_CONSOLE_DEPTH,
    )? {
        Some(value) => value as u32,
        None => return Ok(()),
    };

    let mut session = Session::new(n, depth);

    while !session.is_over() {
        writeln!(
            out,
            "Available numbers: {:?}",
            session.position().legal_moves()
        )?;
        write!(out, "Your pick: ")?;
        out.flush()?;

        let line = match read_line(input)? {
            Some(line) => line,
            None => return Ok(()),
        };
        let number = match line.trim().parse::<u8>() {
            Ok(value) => value,
            Err(_) => {
                writeln!(out, "please enter a number")?;
                continue;
            }
        };
        if let Err(err) = session.play_human(number) {
            writeln!(out, "{}", err)?;
            continue;
        }
        if session.is_over() {
            break;
        }
        if let Some(reply) = session.play_engine() {
            writeln!(out, "Engine takes {}", reply)?;
        }
    }

    match session.winning_seat() {
        Some(Seat::First) => writeln!(out, "You won!")?,
        Some(Seat::Second) => writeln!(out, "Engine won.")?,
        None => writeln!(out, "Draw.")?,
    }
    out.flush()
}

/// Prompts until the input parses into `min..=max`, returning `None` at
/// EOF.
fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    min: u64,
    max: u64,
) -> io::Result<Option<u64>> {
    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;
        let line = match read_line(input)? {
            Some(line) => line,
            None => return Ok(None),
        };
        match line.trim().parse::<u64>() {
            Ok(value) if (min..=max).contains(&value) => return Ok(Some(value)),
            _ => writeln!(out, "please enter a number between {} and {}", min, max)?,
        }
    }
}

/// Reads one line, returning `None` at EOF.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
