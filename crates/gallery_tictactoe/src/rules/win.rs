//! Win detection logic for tic-tac-toe.

use crate::types::{Board, LINES, Line, Mark, Square};

/// Checks if there is a winner on the board.
///
/// Returns the mark and the first completed line, scanning
/// [`LINES`] in order.
pub fn check_winner(board: &Board) -> Option<(Mark, Line)> {
    let squares = board.squares();
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.cells();
        match squares[a] {
            Square::Occupied(mark) if squares[b] == squares[a] && squares[c] == squares[a] => {
                Some((mark, *line))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_middle_column() {
        let board: Board = ".O.|XO.|XO.".parse().unwrap();
        assert_eq!(check_winner(&board), Some((Mark::O, LINES[4])));
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O..|.O.|..O".parse().unwrap();
        assert_eq!(check_winner(&board), Some((Mark::O, LINES[6])));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX.|...|...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XXO|...|...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
