//! Tests for play contracts and history invariants.

use timetravel_tictactoe::{
    AlternatingMarksInvariant, Contract, GameState, HistoryInvariants, Invariant, InvariantSet,
    Mark, Move, MoveError, PlayContract, Position, SingleMarkPerStepInvariant,
};

#[test]
fn test_precondition_rejects_occupied_cell() {
    let game = GameState::replay(&[0]).unwrap();
    let action = Move::new(Mark::O, Position::TopLeft);
    assert_eq!(
        PlayContract::pre(&game, &action),
        Err(MoveError::SquareOccupied(Position::TopLeft))
    );
}

#[test]
fn test_precondition_rejects_decided_game() {
    let game = GameState::replay(&[0, 3, 1, 4, 2]).unwrap();
    let action = Move::new(Mark::O, Position::BottomRight);
    assert_eq!(PlayContract::pre(&game, &action), Err(MoveError::GameOver));
}

#[test]
fn test_postcondition_after_branching() {
    let mut before = GameState::replay(&[0, 3, 1]).unwrap();
    before.jump_to(1);
    let mut after = before.clone();
    after.try_play(8).unwrap();
    assert!(PlayContract::post(&before, &after).is_ok());
}

#[test]
fn test_invariants_hold_through_a_game() {
    let mut game = GameState::new();
    for cell in [4, 0, 8, 2, 6] {
        game.play(cell);
        assert!(HistoryInvariants::check_all(&game).is_ok());
    }
    game.jump_to(2);
    assert!(HistoryInvariants::check_all(&game).is_ok());
    assert!(AlternatingMarksInvariant::holds(&game));
    assert!(SingleMarkPerStepInvariant::holds(&game));
}

#[test]
fn test_invariant_descriptions() {
    assert_eq!(
        AlternatingMarksInvariant::description(),
        "Marks alternate starting with X"
    );
}
