//! Step invariant: each snapshot adds exactly one mark to the one before.

use super::super::{GameState, Snapshot};
use super::Invariant;

/// Invariant: snapshots are monotonic, one new mark per step.
///
/// Snapshot `i` must equal snapshot `i - 1` with its recorded move applied,
/// and that move must target a square empty in snapshot `i - 1`. Squares
/// are never overwritten.
pub struct SingleMarkPerStepInvariant;

impl Invariant<GameState> for SingleMarkPerStepInvariant {
    fn holds(game: &GameState) -> bool {
        game.history
            .snapshots()
            .windows(2)
            .all(|pair| match pair[1].placed() {
                Some(action) => {
                    let previous = pair[0].board();
                    previous.is_empty(action.position)
                        && Snapshot::after(previous, action) == pair[1]
                }
                None => false,
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Move, Position, Square};

    #[test]
    fn test_new_game_holds() {
        assert!(SingleMarkPerStepInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let game = GameState::replay(&[0, 4, 2, 6]).unwrap();
        assert!(SingleMarkPerStepInvariant::holds(&game));
        assert_eq!(game.len(), 5);
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = GameState::replay(&[4, 0]).unwrap();
        // Snapshot 2 claims to have placed O on the top-left, but the board
        // also flips the center to O.
        let snapshot = &mut game.history.snapshots_mut()[2];
        let mut board = *snapshot.board();
        board.set(Position::Center, Square::Occupied(Mark::O));
        *snapshot = Snapshot::after(&board, Move::new(Mark::O, Position::TopLeft));
        assert!(!SingleMarkPerStepInvariant::holds(&game));
    }
}
