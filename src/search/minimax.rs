//! Depth-limited minimax with alpha-beta pruning.
//!
//! Each call is one node of the game tree. `alpha` is a lower bound on
//! the score the maximizer can force and `beta` an upper bound on the
//! minimizer's, for the subtree under consideration; a branch is
//! abandoned once `beta <= alpha`, since no sibling can improve on a
//! bound the opponent already beats. Equal-best moves are collected and
//! one is chosen uniformly at random, so seeded runs are reproducible
//! and unseeded ones vary their play.

use rand::Rng;

use crate::board::{Game, Position};
use crate::eval::evaluate;

/// Best score and move for a searched subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Score from the maximizer's viewpoint.
    pub score: i64,
    /// A best move, or `None` exactly at evaluated leaves (depth zero or
    /// terminal positions).
    pub best_move: Option<u8>,
}

/// Searches `position` to `depth` plies and returns the best score along
/// with a uniformly random choice among the moves achieving it.
///
/// Callers start with the full window (`alpha = i64::MIN`,
/// `beta = i64::MAX`); recursion narrows it. Depth is the only recursion
/// bound, so it must be chosen with the pool size in mind.
pub fn search(
    game: &Game,
    position: &Position,
    depth: u32,
    mut alpha: i64,
    mut beta: i64,
    maximizing: bool,
    rng: &mut impl Rng,
) -> SearchResult {
    if depth == 0 || position.is_terminal() {
        return SearchResult {
            score: evaluate(game, position, maximizing),
            best_move: None,
        };
    }

    let moves = position.legal_moves();
    assert!(
        !moves.is_empty(),
        "non-terminal position has no legal moves"
    );

    let mut best = if maximizing { i64::MIN } else { i64::MAX };
    let mut tied: Vec<u8> = Vec::new();

    for &number in &moves {
        let child = position
            .apply(number)
            .expect("generated move must be legal");
        let result = search(game, &child, depth - 1, alpha, beta, !maximizing, rng);

        if maximizing {
            if result.score > best {
                best = result.score;
                tied.clear();
                tied.push(number);
            } else if result.score == best {
                tied.push(number);
            }
            alpha = alpha.max(best);
        } else {
            if result.score < best {
                best = result.score;
                tied.clear();
                tied.push(number);
            } else if result.score == best {
                tied.push(number);
            }
            beta = beta.min(best);
        }

        if beta <= alpha {
            break;
        }
    }

    let choice = tied[rng.gen_range(0..tied.len())];
    SearchResult {
        score: best,
        best_move: Some(choice),
    }
}

/// Full-window maximizing search, discarding the score.
///
/// Returns `None` only when there is nothing to search: a terminal
/// position or a zero depth.
pub fn best_move(game: &Game, position: &Position, depth: u32, rng: &mut impl Rng) -> Option<u8> {
    search(game, position, depth, i64::MIN, i64::MAX, true, rng).best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{NumberSet, Position};
    use crate::eval::WIN_SCORE;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn seeded_rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    fn position(n: u8, current: &[u8], other: &[u8]) -> Position {
        Position::from_holdings(
            n,
            current.iter().copied().collect(),
            other.iter().copied().collect(),
        )
    }

    #[test]
    fn depth_zero_returns_the_evaluation() {
        let game = Game::new(2);
        let pos = game.initial_position();
        let result = search(&game, &pos, 0, i64::MIN, i64::MAX, true, &mut seeded_rng());
        assert_eq!(result.score, evaluate(&game, &pos, true));
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn terminal_positions_are_leaves_at_any_depth() {
        let game = Game::new(2);
        let won = position(2, &[1], &[2, 3]);
        let result = search(&game, &won, 5, i64::MIN, i64::MAX, true, &mut seeded_rng());
        assert_eq!(result.score, -WIN_SCORE);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn maximizer_takes_an_immediate_win() {
        let game = Game::new(2);
        // Mover holds 1, opponent holds 2: picking 4 completes 1+4 = 5.
        let pos = position(2, &[1], &[2]);
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let result = search(&game, &pos, 2, i64::MIN, i64::MAX, true, &mut rng);
            assert_eq!(result.score, WIN_SCORE);
            assert_eq!(result.best_move, Some(4));
        }
    }

    #[test]
    fn minimizer_takes_an_immediate_win() {
        let game = Game::new(2);
        let pos = position(2, &[1], &[2]);
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let result = search(&game, &pos, 2, i64::MIN, i64::MAX, false, &mut rng);
            assert_eq!(result.score, -WIN_SCORE);
            assert_eq!(result.best_move, Some(4));
        }
    }

    #[test]
    fn ties_are_broken_among_equal_moves_only() {
        let game = Game::new(2);
        let pos = game.initial_position();
        // At depth 1 every first move scores identically (each blocks
        // exactly one combination), so every legal move is a valid pick.
        let mut seen = NumberSet::EMPTY;
        for seed in 0..64 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let result = search(&game, &pos, 1, i64::MIN, i64::MAX, true, &mut rng);
            assert_eq!(result.score, 1);
            seen = seen.with(result.best_move.unwrap());
        }
        assert!(seen.is_subset_of(NumberSet::full(4)));
        assert!(seen.len() > 1, "tie-break never varied across 64 seeds");
    }

    #[test]
    fn identical_seeds_give_identical_moves() {
        let game = Game::new(3);
        let pos = game.initial_position();
        let a = search(
            &game,
            &pos,
            2,
            i64::MIN,
            i64::MAX,
            true,
            &mut SmallRng::seed_from_u64(7),
        );
        let b = search(
            &game,
            &pos,
            2,
            i64::MIN,
            i64::MAX,
            true,
            &mut SmallRng::seed_from_u64(7),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn best_move_is_always_legal() {
        let game = Game::new(3);
        let mut rng = seeded_rng();
        let mut pos = game.initial_position();
        while !pos.is_terminal() {
            let number = best_move(&game, &pos, 2, &mut rng).unwrap();
            assert!(pos.legal_moves().contains(&number));
            pos = pos.apply(number).unwrap();
        }
    }

    #[test]
    fn best_move_is_none_at_terminal_positions() {
        let game = Game::new(2);
        let won = position(2, &[1], &[2, 3]);
        assert_eq!(best_move(&game, &won, 3, &mut seeded_rng()), None);
    }
}
