//! Per-game shared data.
//!
//! [`Game`] fixes the board size and carries the data every search and
//! evaluation reuses for the whole game: the pool size, the target sum,
//! and the precomputed winning combinations.

use super::combos::{pool_size, target, winning_combinations, Combination};
use super::set::MAX_POOL;
use super::state::Position;

/// Largest supported board size; the pool `1..=n²` must fit a
/// [`NumberSet`](super::set::NumberSet).
pub const MAX_SIZE: u8 = 11;

/// Fixed data for one game: board size, target, and the winning
/// combinations, enumerated once and shared read-only.
#[derive(Debug, Clone)]
pub struct Game {
    n: u8,
    pool_size: u8,
    target: u32,
    combinations: Vec<Combination>,
}

impl Game {
    /// Sets up a game of board size `n`, enumerating its winning
    /// combinations. The enumeration is exponential in `n²`; sizes
    /// beyond 5 are already impractical to search.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero or exceeds [`MAX_SIZE`].
    pub fn new(n: u8) -> Game {
        assert!(
            n >= 1 && n <= MAX_SIZE,
            "board size must be in 1..={}, got {}",
            MAX_SIZE,
            n
        );
        debug_assert!(pool_size(n) <= MAX_POOL);
        Game {
            n,
            pool_size: pool_size(n),
            target: target(n),
            combinations: winning_combinations(n),
        }
    }

    /// Board size parameter `n`.
    pub fn n(&self) -> u8 {
        self.n
    }

    /// Number of values in the pool (`n²`).
    pub fn pool_size(&self) -> u8 {
        self.pool_size
    }

    /// The sum a winning size-`n` subset must reach.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Every winning combination for this board size.
    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    /// The empty starting position.
    pub fn initial_position(&self) -> Position {
        Position::empty(self.n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_precomputes_combinations() {
        let game = Game::new(2);
        assert_eq!(game.n(), 2);
        assert_eq!(game.pool_size(), 4);
        assert_eq!(game.target(), 5);
        assert_eq!(game.combinations().len(), 2);
    }

    #[test]
    fn initial_position_matches_the_game() {
        let game = Game::new(3);
        let pos = game.initial_position();
        assert_eq!(pos.n(), 3);
        assert_eq!(pos.pool_size(), game.pool_size());
        assert_eq!(pos.target(), game.target());
        assert_eq!(pos.ply(), 0);
    }

    #[test]
    #[should_panic(expected = "board size must be in 1..=")]
    fn zero_size_is_rejected() {
        Game::new(0);
    }

    #[test]
    #[should_panic(expected = "board size must be in 1..=")]
    fn oversized_board_is_rejected() {
        Game::new(MAX_SIZE + 1);
    }
}
