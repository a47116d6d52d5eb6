//! Board representation and game-state types.
//!
//! Contains the core data structures for the number pool, per-side
//! claims, positions, and winning combinations.

pub mod combos;
pub mod game;
pub mod set;
pub mod state;

pub use combos::{pool_size, target, winning_combinations, Combination};
pub use game::{Game, MAX_SIZE};
pub use set::{NumberSet, MAX_POOL};
pub use state::{MoveError, Position, Side};
