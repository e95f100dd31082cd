//! Alternating mark invariant: X, O, X, O, ...

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: the move producing snapshot `i` was made by the mark for
/// turn parity `i - 1`.
///
/// First move is always X.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(game: &GameState) -> bool {
        game.history
            .moves()
            .enumerate()
            .all(|(played, action)| action.mark == Mark::for_move(played))
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}
