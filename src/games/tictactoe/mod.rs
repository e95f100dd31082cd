//! Tic-tac-toe with move history navigation.
//!
//! [`GameState`] is the core: a log of board snapshots plus a cursor.
//! [`check_winner`] is the pure win checker, and [`GameView`] is the derived
//! state a frontend renders.

mod action;
pub mod contracts;
mod game;
mod history;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{JumpError, Move, MoveError};
pub use game::GameState;
pub use history::{History, Snapshot};
pub use phases::GameStatus;
pub use position::Position;
pub use rules::{WinningLine, check_winner, is_draw, is_full, winning_line};
pub use types::{Board, Mark, Square};
pub use view::{GameView, MoveEntry, MoveOrder};
