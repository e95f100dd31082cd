//! Tests for tic-tac-toe positions.

use timetravel_tictactoe::{Board, Mark, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_row_and_col() {
    assert_eq!((Position::MiddleRight.row(), Position::MiddleRight.col()), (1, 2));
    assert_eq!((Position::BottomLeft.row(), Position::BottomLeft.col()), (2, 0));
}

#[test]
fn test_from_label_or_number() {
    assert_eq!(Position::from_label_or_number("7"), Some(Position::BottomCenter));
    assert_eq!(Position::from_label_or_number("Center"), Some(Position::Center));
    assert_eq!(Position::from_label_or_number("bottom-right"), Some(Position::BottomRight));
    assert_eq!(Position::from_label_or_number("middle"), None);
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    assert_eq!(Position::valid_moves(&board).len(), 9);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let board = Board::new()
        .with_mark(Position::TopLeft, Mark::X)
        .with_mark(Position::Center, Mark::O);

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
