//! Game state with time travel.
//!
//! `GameState` owns the history of snapshots and the cursor into it. Whose
//! turn it is and whether the game is decided are always derived from the
//! snapshot under the cursor.

use super::action::{JumpError, Move, MoveError};
use super::contracts::{Contract, PlayContract};
use super::history::{History, Snapshot};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::phases::GameStatus;
use super::rules::check_winner;
use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game with navigable move history.
///
/// Deserialized states are checked against the history invariants and
/// rejected if any fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedGameState")]
pub struct GameState {
    pub(super) history: History,
    pub(super) current: usize,
}

/// Wire form of [`GameState`] before validation.
#[derive(Deserialize)]
struct UncheckedGameState {
    history: History,
    current: usize,
}

impl TryFrom<UncheckedGameState> for GameState {
    type Error = String;

    fn try_from(raw: UncheckedGameState) -> Result<Self, Self::Error> {
        let game = Self {
            history: raw.history,
            current: raw.current,
        };
        HistoryInvariants::check_all(&game).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            format!("Invalid game state: {}", descriptions)
        })?;
        Ok(game)
    }
}

impl GameState {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current: 0,
        }
    }

    /// Plays the current mark at `cell` (0-8).
    ///
    /// Returns `true` if the move was applied. Moves into an occupied cell,
    /// onto a decided board, or off the board are ignored and leave the game
    /// untouched.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn play(&mut self, cell: usize) -> bool {
        match self.try_play(cell) {
            Ok(_) => true,
            Err(error) => {
                debug!(%error, "Ignoring move");
                false
            }
        }
    }

    /// Plays the current mark at `cell`, reporting why a move was rejected.
    ///
    /// On success the history after the cursor is discarded, the new
    /// snapshot is appended, and the cursor moves onto it. On any error the
    /// game is left as it was.
    ///
    /// # Errors
    ///
    /// - `MoveError::OutOfBounds` if `cell > 8`
    /// - `MoveError::GameOver` if the current snapshot has a winner
    /// - `MoveError::SquareOccupied` if the cell already holds a mark
    #[instrument(skip(self), fields(current = self.current))]
    pub fn try_play(&mut self, cell: usize) -> Result<Move, MoveError> {
        let position = Position::from_index(cell).ok_or(MoveError::OutOfBounds(cell))?;
        let action = Move::new(self.to_move(), position);

        PlayContract::pre(self, &action)?;

        let snapshot = Snapshot::after(self.current_board(), action);
        let mut next = self.clone();
        next.current = next.history.branch(next.current, snapshot);

        #[cfg(debug_assertions)]
        PlayContract::post(self, &next)?;

        *self = next;

        info!(mark = %action.mark, cell, move_number = self.current, "Move played");
        Ok(action)
    }

    /// Moves the cursor to snapshot `index` without touching history.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a snapshot in history. Frontends that build
    /// jump targets from [`GameState::history`] never hit this; use
    /// [`GameState::try_jump_to`] for untrusted input.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn jump_to(&mut self, index: usize) {
        if let Err(error) = self.try_jump_to(index) {
            panic!("jump_to precondition violated: {error}");
        }
    }

    /// Moves the cursor to snapshot `index`.
    ///
    /// # Errors
    ///
    /// Returns `JumpError::OutOfRange` if `index >= len()`.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn try_jump_to(&mut self, index: usize) -> Result<(), JumpError> {
        if index >= self.history.len() {
            return Err(JumpError::OutOfRange {
                index,
                len: self.history.len(),
            });
        }
        self.current = index;
        debug!(to_move = %self.to_move(), "Jumped");
        Ok(())
    }

    /// Starts over from the empty board, dropping all history.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::new();
        info!("Game restarted");
    }

    /// Builds a game by playing `cells` in order.
    ///
    /// # Errors
    ///
    /// Returns the first `MoveError` encountered.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &cell in cells {
            game.try_play(cell)?;
        }
        Ok(game)
    }

    /// Board under the cursor.
    pub fn current_board(&self) -> &Board {
        self.history.snapshots()[self.current].board()
    }

    /// Cursor position: the number of moves on the current board.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Mark that moves next, by turn parity of the cursor.
    pub fn to_move(&self) -> Mark {
        Mark::for_move(self.current)
    }

    /// Winner on the current board, if any.
    pub fn winner(&self) -> Option<Mark> {
        check_winner(self.current_board())
    }

    /// Status of the current board.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.current_board(), self.current)
    }

    /// Full history, including snapshots after the cursor.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of snapshots in history.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: history holds at least the empty board.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Moves recorded in history, oldest first.
    pub fn moves(&self) -> Vec<Move> {
        self.history.moves().collect()
    }

    /// Empty cells on the current board.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_decided() {
            return Vec::new();
        }
        Position::valid_moves(self.current_board())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
