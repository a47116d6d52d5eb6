//! Position evaluation.
//!
//! Scores positions for the alpha-beta search by counting the winning
//! combinations still reachable for the player to move.

pub mod heuristic;

pub use heuristic::{evaluate, WIN_SCORE};
