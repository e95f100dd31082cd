//! Cursor invariant: the current move index points into history.

use super::super::GameState;
use super::Invariant;

/// Invariant: `0 <= current < len(history)`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.current < game.history.len()
    }

    fn description() -> &'static str {
        "Current move index lies within history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(CursorInBoundsInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_after_jump_holds() {
        let mut game = GameState::replay(&[4, 0, 8]).unwrap();
        game.jump_to(0);
        assert!(CursorInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_dangling_cursor_violates() {
        let mut game = GameState::replay(&[4]).unwrap();
        game.current = 2;
        assert!(!CursorInBoundsInvariant::holds(&game));
    }
}
