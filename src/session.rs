//! Game session: one game, its view preferences, and inbound events.
//!
//! A frontend feeds [`Event`]s to [`Session::dispatch`] and renders the
//! [`GameView`] it returns. The view is re-derived after every event.

use crate::games::tictactoe::{GameState, GameView, JumpError, MoveOrder, Position};
use derive_more::Display;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Inbound events from a frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Cell N clicked.
    CellClicked(usize),
    /// "Jump to move N" clicked.
    JumpClicked(usize),
    /// Flip the move list between ascending and descending.
    ToggleOrder,
    /// Start a fresh game.
    Restart,
}

/// Error parsing a text command into an [`Event`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseEventError {
    /// Blank input.
    #[display("Empty command")]
    Empty,
    /// First word is not a known command.
    #[display("Unknown command: {}", _0)]
    UnknownCommand(String),
    /// Command needs an argument that was not given.
    #[display("Command '{}' needs an argument", _0)]
    MissingArgument(&'static str),
    /// Argument is neither a number nor a cell name.
    #[display("Invalid argument: {}", _0)]
    InvalidArgument(String),
}

impl std::error::Error for ParseEventError {}

impl FromStr for Event {
    type Err = ParseEventError;

    /// Parses `play N`, `jump N`, `toggle`, or `restart`.
    ///
    /// `play` also accepts a cell name such as `center` or `top-left`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let command = words.next().ok_or(ParseEventError::Empty)?.to_lowercase();
        let argument = words.collect::<Vec<_>>().join(" ");

        match command.as_str() {
            "play" | "p" => {
                if argument.is_empty() {
                    return Err(ParseEventError::MissingArgument("play"));
                }
                if let Ok(cell) = argument.parse::<usize>() {
                    return Ok(Event::CellClicked(cell));
                }
                Position::from_label_or_number(&argument)
                    .map(|pos| Event::CellClicked(pos.to_index()))
                    .ok_or(ParseEventError::InvalidArgument(argument))
            }
            "jump" | "j" => {
                if argument.is_empty() {
                    return Err(ParseEventError::MissingArgument("jump"));
                }
                argument
                    .parse::<usize>()
                    .map(Event::JumpClicked)
                    .map_err(|_| ParseEventError::InvalidArgument(argument))
            }
            "toggle" | "t" => Ok(Event::ToggleOrder),
            "restart" | "r" => Ok(Event::Restart),
            _ => Err(ParseEventError::UnknownCommand(command)),
        }
    }
}

/// One game owned by one frontend.
#[derive(Debug, Clone, Default)]
pub struct Session {
    game: GameState,
    order: MoveOrder,
}

impl Session {
    /// Creates a session with a new game.
    #[instrument]
    pub fn new(order: MoveOrder) -> Self {
        info!("Creating new game session");
        Self {
            game: GameState::new(),
            order,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Current move list order.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// Derives the view of the current state.
    pub fn view(&self) -> GameView {
        GameView::derive(&self.game, self.order)
    }

    /// Applies `event` and returns the re-derived view.
    ///
    /// Disallowed plays are ignored, mirroring a board that does not react
    /// to clicks on taken cells.
    ///
    /// # Errors
    ///
    /// Returns `JumpError` if a jump targets a move outside history.
    #[instrument(skip(self), fields(current = self.game.current_move()))]
    pub fn dispatch(&mut self, event: Event) -> Result<GameView, JumpError> {
        match event {
            Event::CellClicked(cell) => {
                let applied = self.game.play(cell);
                debug!(applied, "Cell clicked");
            }
            Event::JumpClicked(index) => self.game.try_jump_to(index)?,
            Event::ToggleOrder => {
                self.order = self.order.toggled();
                debug!(order = %self.order, "Move order toggled");
            }
            Event::Restart => self.game.restart(),
        }
        Ok(self.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("play 4".parse::<Event>(), Ok(Event::CellClicked(4)));
        assert_eq!("P center".parse::<Event>(), Ok(Event::CellClicked(4)));
        assert_eq!("play top-left".parse::<Event>(), Ok(Event::CellClicked(0)));
        assert_eq!("play 12".parse::<Event>(), Ok(Event::CellClicked(12)));
        assert_eq!("jump 0".parse::<Event>(), Ok(Event::JumpClicked(0)));
        assert_eq!("toggle".parse::<Event>(), Ok(Event::ToggleOrder));
        assert_eq!("restart".parse::<Event>(), Ok(Event::Restart));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("   ".parse::<Event>(), Err(ParseEventError::Empty));
        assert_eq!(
            "dance".parse::<Event>(),
            Err(ParseEventError::UnknownCommand("dance".to_string()))
        );
        assert_eq!(
            "jump".parse::<Event>(),
            Err(ParseEventError::MissingArgument("jump"))
        );
        assert_eq!(
            "jump two".parse::<Event>(),
            Err(ParseEventError::InvalidArgument("two".to_string()))
        );
        assert_eq!(
            "play nowhere".parse::<Event>(),
            Err(ParseEventError::InvalidArgument("nowhere".to_string()))
        );
    }

    #[test]
    fn test_dispatch_rederives_view() {
        let mut session = Session::new(MoveOrder::Ascending);
        let view = session.dispatch(Event::CellClicked(4)).unwrap();
        assert_eq!(view.current_move, 1);
        assert_eq!(view.status_text, "Next player: O");

        let view = session.dispatch(Event::ToggleOrder).unwrap();
        assert_eq!(view.order, MoveOrder::Descending);
        assert_eq!(view.moves[0].index, 1);
    }

    #[test]
    fn test_dispatch_bad_jump() {
        let mut session = Session::default();
        assert_eq!(
            session.dispatch(Event::JumpClicked(3)),
            Err(JumpError::OutOfRange { index: 3, len: 1 })
        );
    }
}
