//! Time-travel tic-tac-toe library
//!
//! Two players share one board. Every move appends a snapshot to the game's
//! history, and any earlier snapshot can be revisited; playing from the past
//! discards the alternate future.
//!
//! # Architecture
//!
//! - **Game**: snapshot history, cursor, and derived turn ([`GameState`])
//! - **Rules**: pure win/draw checks over one board ([`check_winner`])
//! - **View**: everything a frontend displays, derived per state ([`GameView`])
//! - **Session**: inbound events and re-derivation ([`Session`])
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{GameState, Mark};
//!
//! let mut game = GameState::new();
//! game.play(4);
//! game.play(0);
//! assert_eq!(game.to_move(), Mark::X);
//!
//! game.jump_to(0);
//! game.play(8);
//! assert_eq!(game.len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod render;
mod repl;
mod session;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Frontend
pub use render::{OutputFormat, render, render_text};
pub use repl::{replay, run};
pub use session::{Event, ParseEventError, Session};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameState, GameStatus, GameView, History, JumpError, Mark, Move, MoveEntry, MoveError,
    MoveOrder, Position, Snapshot, Square, WinningLine, check_winner, is_draw, is_full,
    winning_line,
};

// Crate-level exports - Contracts and invariants
pub use games::tictactoe::contracts::{
    CellIsEmpty, Contract, GameNotDecided, LegalPlay, PlayContract,
};
pub use games::tictactoe::invariants::{
    AlternatingMarksInvariant, CursorInBoundsInvariant, GenesisEmptyInvariant, HistoryInvariants,
    Invariant, InvariantSet, InvariantViolation, SingleMarkPerStepInvariant,
};
