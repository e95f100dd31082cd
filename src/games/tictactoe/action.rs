//! First-class action types for tic-tac-toe.
//!
//! A move is a domain event: the mark placed and where. Each snapshot in
//! history after the first remembers the move that produced it.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// The position where the mark is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }

    /// Board location as `(row, col)`.
    pub fn location(&self) -> (usize, usize) {
        (self.position.row(), self.position.col())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Reason a play was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is not on the board.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The current snapshot already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Reason a jump through history was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpError {
    /// The requested move index is past the end of history.
    #[display("Move #{} does not exist (history has {} snapshots)", index, len)]
    OutOfRange {
        /// Requested move index.
        index: usize,
        /// Number of snapshots in history.
        len: usize,
    },
}
