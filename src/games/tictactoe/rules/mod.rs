//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Rules are separated from
//! history storage so they can be evaluated on any snapshot.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinningLine, check_winner, winning_line};
