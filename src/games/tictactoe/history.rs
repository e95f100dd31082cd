//! Versioned log of board snapshots indexed by move number.

use super::{Board, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One entry in the history: a full board and the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    placed: Option<Move>,
}

impl Snapshot {
    /// The empty board that opens every game.
    pub fn genesis() -> Self {
        Self {
            board: Board::new(),
            placed: None,
        }
    }

    /// Snapshot produced by applying `action` to `previous`.
    pub fn after(previous: &Board, action: Move) -> Self {
        Self {
            board: previous.with_mark(action.position, action.mark),
            placed: Some(action),
        }
    }

    /// Board at this point in the game.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Move that produced this snapshot; `None` for game start.
    pub fn placed(&self) -> Option<Move> {
        self.placed
    }
}

/// Ordered snapshots, starting with one empty board.
///
/// Snapshot `i` is the board after `i` moves. The log only grows at the
/// end; branching from an earlier index drops everything after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedHistory")]
pub struct History {
    snapshots: Vec<Snapshot>,
}

#[derive(Deserialize)]
struct UncheckedHistory {
    snapshots: Vec<Snapshot>,
}

impl TryFrom<UncheckedHistory> for History {
    type Error = &'static str;

    fn try_from(raw: UncheckedHistory) -> Result<Self, Self::Error> {
        if raw.snapshots.is_empty() {
            return Err("History must hold at least the opening board");
        }
        Ok(Self {
            snapshots: raw.snapshots,
        })
    }
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::genesis()],
        }
    }

    /// Number of snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the empty board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the newest snapshot.
    pub fn last_index(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Moves recorded in history, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.snapshots.iter().filter_map(Snapshot::placed)
    }

    /// Keeps snapshots `0..=from`, appends `snapshot`, and returns its index.
    #[instrument(skip(self, snapshot), fields(len = self.snapshots.len()))]
    pub(super) fn branch(&mut self, from: usize, snapshot: Snapshot) -> usize {
        let discarded = self.snapshots.len().saturating_sub(from + 1);
        if discarded > 0 {
            debug!(from, discarded, "Discarding alternate future");
        }
        self.snapshots.truncate(from + 1);
        self.snapshots.push(snapshot);
        self.last_index()
    }

    #[cfg(test)]
    pub(super) fn snapshots_mut(&mut self) -> &mut Vec<Snapshot> {
        &mut self.snapshots
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Position};

    #[test]
    fn test_starts_with_empty_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0), Some(&Snapshot::genesis()));
        assert_eq!(history.moves().count(), 0);
    }

    #[test]
    fn test_branch_truncates_future() {
        let mut history = History::new();
        let first = Snapshot::after(&Board::new(), Move::new(Mark::X, Position::Center));
        let second = Snapshot::after(first.board(), Move::new(Mark::O, Position::TopLeft));
        history.branch(0, first);
        history.branch(1, second);
        assert_eq!(history.len(), 3);

        let alternate = Snapshot::after(&Board::new(), Move::new(Mark::X, Position::BottomRight));
        let index = history.branch(0, alternate);
        assert_eq!(index, 1);
        assert_eq!(history.len(), 2);
        assert_eq!(
            history.moves().collect::<Vec<_>>(),
            vec![Move::new(Mark::X, Position::BottomRight)]
        );
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        let error = serde_json::from_str::<History>(r#"{"snapshots":[]}"#).unwrap_err();
        assert!(error.to_string().contains("at least the opening board"));

        let json = serde_json::to_string(&History::new()).unwrap();
        assert_eq!(serde_json::from_str::<History>(&json).unwrap(), History::new());
    }
}
