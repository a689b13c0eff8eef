//! Game rules for tic-tac-toe.
//!
//! Pure functions of the board contents, independent of whose turn it is.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::check_winner;

use crate::types::{Board, Outcome};

/// Computes the outcome of a board.
///
/// The first completed line in [`LINES`](crate::LINES) order wins, so a
/// board with several completed lines (unreachable in real play) still
/// gets a deterministic answer.
pub fn compute_outcome(board: &Board) -> Outcome {
    if let Some((mark, line)) = check_winner(board) {
        return Outcome::Win { mark, line };
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
