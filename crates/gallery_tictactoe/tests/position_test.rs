//! Tests for tic-tac-toe position enum.

use gallery_tictactoe::{Board, Mark, Position, Square};

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
fn test_parse_numbers_are_one_based() {
    assert_eq!(Position::from_label_or_number("1"), Some(Position::TopLeft));
    assert_eq!(Position::from_label_or_number(" 9 "), Some(Position::BottomRight));
    assert_eq!(Position::from_label_or_number("0"), None);
    assert_eq!(Position::from_label_or_number("10"), None);
}

#[test]
fn test_parse_labels() {
    assert_eq!(Position::from_label_or_number("center"), Some(Position::Center));
    assert_eq!(Position::from_label_or_number("Top left"), Some(Position::TopLeft));
    assert_eq!(
        Position::from_label_or_number("bottom-center"),
        Some(Position::BottomCenter)
    );
    assert_eq!(Position::from_label_or_number("middle"), None);
    assert_eq!(Position::from_label_or_number(""), None);
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    assert_eq!(Position::valid_moves(&board).len(), 9);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.set(0, Square::Occupied(Mark::X)).unwrap();
    board.set(4, Square::Occupied(Mark::O)).unwrap();

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
