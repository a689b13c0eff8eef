//! Exhaustive minimax search for the automated side.
//!
//! The search is parameterized by the side it plays for, which is always
//! the maximizer. Terminal positions score from that side's perspective:
//!
//! - own win: `10 - depth`
//! - opponent win: `depth - 10`
//! - draw: `0`
//!
//! where `depth` counts moves from the searched position, so the candidate
//! move itself is at depth 1. Faster wins and slower losses score better.
//!
//! The board is mutated in place on a private copy (place, recurse, clear),
//! and among equally scored moves the lowest index wins.

use crate::error::EngineError;
use crate::rules::compute_outcome;
use crate::types::{Board, Mark, Outcome};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a win found at depth zero.
const WIN_SCORE: i32 = 10;

/// A candidate move and its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct ScoredMove {
    /// Board index of the move.
    pub index: usize,
    /// Score from the searching side's perspective.
    pub score: i32,
}

/// Optimal-play move search.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveSearch;

impl MoveSearch {
    /// Returns the optimal move for `side` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidState`] if the board is already won,
    /// drawn or full.
    #[instrument(skip(board), fields(board = %board.notation()))]
    pub fn best_move(board: &Board, side: Mark) -> Result<usize, EngineError> {
        let scored = Self::score_moves(board, side)?;
        // First strictly better score wins, so ties keep the lowest index.
        let best = scored
            .iter()
            .copied()
            .reduce(|best, candidate| if candidate.score > best.score { candidate } else { best })
            .ok_or_else(|| EngineError::InvalidState {
                outcome: compute_outcome(board),
            })?;
        debug!(index = best.index, score = best.score, "Best move chosen");
        Ok(best.index)
    }

    /// Scores every empty square for `side`, in ascending index order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidState`] if there is no move to make.
    #[instrument(skip(board), fields(board = %board.notation()))]
    pub fn score_moves(board: &Board, side: Mark) -> Result<Vec<ScoredMove>, EngineError> {
        let outcome = compute_outcome(board);
        if outcome.is_terminal() {
            return Err(EngineError::InvalidState { outcome });
        }

        let mut scratch = *board;
        let candidates: Vec<usize> = board.empty_cells().collect();
        let scored: Vec<ScoredMove> = candidates
            .into_iter()
            .map(|index| {
                scratch.place(index, side);
                let score = minimax(&mut scratch, 1, side.opponent(), side);
                scratch.clear(index);
                ScoredMove::new(index, score)
            })
            .collect();

        if scored.is_empty() {
            return Err(EngineError::InvalidState { outcome });
        }
        Ok(scored)
    }
}

/// Value of `board` for `maximizer`, with `to_move` about to play.
fn minimax(board: &mut Board, depth: i32, to_move: Mark, maximizer: Mark) -> i32 {
    match compute_outcome(board) {
        Outcome::Win { mark, .. } if mark == maximizer => return WIN_SCORE - depth,
        Outcome::Win { .. } => return depth - WIN_SCORE,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let maximizing = to_move == maximizer;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for index in 0..board.squares().len() {
        if !board.is_empty(index) {
            continue;
        }
        board.place(index, to_move);
        let score = minimax(board, depth + 1, to_move.opponent(), maximizer);
        board.clear(index);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}
