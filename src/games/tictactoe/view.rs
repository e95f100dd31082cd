//! Derived view of a game for frontends.
//!
//! Nothing here is stored: a `GameView` is recomputed from `GameState`
//! after every mutation and handed to whatever renders it.

use super::phases::GameStatus;
use super::rules::WinningLine;
use super::{Board, GameState, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order in which the move list is presented.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl MoveOrder {
    /// Returns the opposite order.
    pub fn toggled(self) -> Self {
        match self {
            MoveOrder::Ascending => MoveOrder::Descending,
            MoveOrder::Descending => MoveOrder::Ascending,
        }
    }
}

/// One row of the move list: a jump target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Snapshot index to jump to.
    pub index: usize,
    /// Button text.
    pub description: String,
    /// Mark placed by the move that produced this snapshot.
    pub mark: Option<Mark>,
    /// `(row, col)` of that move.
    pub location: Option<(usize, usize)>,
    /// Whether this is the snapshot under the cursor.
    pub is_current: bool,
}

impl MoveEntry {
    fn describe(index: usize, is_current: bool) -> String {
        match (index, is_current) {
            (0, true) => "You are at game start".to_string(),
            (0, false) => "Go to game start".to_string(),
            (n, true) => format!("You are at move #{}", n),
            (n, false) => format!("Go to move #{}", n),
        }
    }
}

/// Everything a frontend shows for one state of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Board under the cursor.
    pub board: Board,
    /// Cells to highlight, when the current board is won.
    pub winning_line: Option<WinningLine>,
    /// Status of the current board.
    pub status: GameStatus,
    /// Status as display text: `Winner: X`, `Next player: O`, or `Draw`.
    pub status_text: String,
    /// Cursor position.
    pub current_move: usize,
    /// Move list in presentation order.
    pub moves: Vec<MoveEntry>,
    /// Order of `moves`.
    pub order: MoveOrder,
}

impl GameView {
    /// Derives the view of `game` with the move list in `order`.
    #[instrument(skip(game), fields(current = game.current_move(), len = game.len()))]
    pub fn derive(game: &GameState, order: MoveOrder) -> Self {
        let status = game.status();
        let winning_line = match status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        };

        let current = game.current_move();
        let mut moves: Vec<MoveEntry> = game
            .history()
            .snapshots()
            .iter()
            .enumerate()
            .map(|(index, snapshot)| {
                let placed = snapshot.placed();
                MoveEntry {
                    index,
                    description: MoveEntry::describe(index, index == current),
                    mark: placed.map(|m| m.mark),
                    location: placed.map(|m| m.location()),
                    is_current: index == current,
                }
            })
            .collect();

        if order == MoveOrder::Descending {
            moves.reverse();
        }

        Self {
            board: *game.current_board(),
            winning_line,
            status,
            status_text: status.to_string(),
            current_move: current,
            moves,
            order,
        }
    }
}
