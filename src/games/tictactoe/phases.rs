//! Game phases derived from a board snapshot.
//!
//! A game has two implicit phases, in progress and decided. Neither is
//! stored: both are read off the current snapshot by the win checker.

use super::rules::{WinningLine, is_full, winning_line};
use super::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Empty cells remain and nobody has three in a row.
    InProgress {
        /// Mark that moves next.
        next: Mark,
    },
    /// A mark completed a line.
    Won {
        /// The winning mark.
        winner: Mark,
        /// The completed line.
        line: WinningLine,
    },
    /// Board is full with no winner.
    Draw,
}

impl GameStatus {
    /// Derives the status of `board`, reached after `moves_played` moves.
    #[instrument(skip(board))]
    pub fn of(board: &Board, moves_played: usize) -> Self {
        if let Some(line) = winning_line(board) {
            GameStatus::Won {
                winner: line.mark,
                line,
            }
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: Mark::for_move(moves_played),
            }
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_decided(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won { winner, .. } => write!(f, "Winner: {}", winner),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
