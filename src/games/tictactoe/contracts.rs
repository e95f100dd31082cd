//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::game::GameState;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::check_winner;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Play Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the board under the cursor has no winner.
pub struct GameNotDecided;

impl GameNotDecided {
    /// Fails with `GameOver` once a line is complete.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        match check_winner(game.current_board()) {
            Some(_) => Err(MoveError::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with `SquareOccupied` if the target already holds a mark.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if game.current_board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Composite precondition: a play is legal if nobody has won and the cell is free.
pub struct LegalPlay;

impl LegalPlay {
    /// Validates all preconditions for a play.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        GameNotDecided::check(game)?;
        CellIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for `GameState::try_play`.
///
/// Preconditions:
/// - No winner on the current board
/// - Target cell is empty
///
/// Postconditions:
/// - History invariants hold
/// - The cursor sits on the newest snapshot, one past where it was
pub struct PlayContract;

impl Contract<GameState, Move> for PlayContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalPlay::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        if after.current != after.history.last_index() || after.current != before.current + 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: cursor {} is not the new snapshot (was {}, last is {})",
                after.current,
                before.current,
                after.history.last_index()
            )));
        }
        Ok(())
    }
}
