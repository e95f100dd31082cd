//! Genesis invariant: every history opens with the empty board.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: snapshot 0 is the empty board and records no move.
pub struct GenesisEmptyInvariant;

impl Invariant<GameState> for GenesisEmptyInvariant {
    fn holds(game: &GameState) -> bool {
        game.history
            .get(0)
            .is_some_and(|first| *first.board() == Board::new() && first.placed().is_none())
    }

    fn description() -> &'static str {
        "History starts with an empty board"
    }
}
