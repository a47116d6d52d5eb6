//! Search and planning.
//!
//! Explores the game tree with depth-limited alpha-beta minimax, scoring
//! leaves with the heuristic evaluator.

pub mod minimax;

pub use minimax::{best_move, search, SearchResult};
