//! Picksum -- console front end for the number-picking game engine.
//!
//! Runs an interactive session on stdin/stdout: the human claims a
//! number each turn and the engine answers with an alpha-beta searched
//! reply.

use std::io::{self, Write};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = io::BufWriter::new(stdout.lock());

    picksum::engine::run_console(&mut input, &mut out)?;
    out.flush()
}
