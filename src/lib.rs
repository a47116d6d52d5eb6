//! Picksum engine library.
//!
//! Exposes the board representation, evaluation, search, and self-play
//! modules for use by integration tests and the binary entry points.

pub mod board;
pub mod engine;
pub mod eval;
pub mod search;
pub mod selfplay;
