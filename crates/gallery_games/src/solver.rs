//! One-shot best-move query for a position.

use anyhow::{Context, Result};
use gallery_tictactoe::{Board, Mark, MoveSearch, ScoredMove};
use serde::Serialize;
use std::fmt::Write as _;
use tracing::instrument;

/// Result of a best-move query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMoveReport {
    /// Board in compact notation.
    pub board: String,
    /// Mark to move.
    pub side: Mark,
    /// Optimal index (0-8).
    pub index: usize,
    /// Score of every empty square, ascending by index.
    pub scores: Vec<ScoredMove>,
}

impl BestMoveReport {
    /// Searches `notation` for `side`.
    #[instrument]
    pub fn compute(notation: &str, side: Mark) -> Result<Self> {
        let board: Board = notation
            .parse()
            .with_context(|| format!("Invalid board {:?}", notation))?;
        let scores = MoveSearch::score_moves(&board, side)?;
        let index = MoveSearch::best_move(&board, side)?;
        Ok(Self {
            board: board.notation(),
            side,
            index,
            scores,
        })
    }

    /// Human-readable rendering.
    pub fn to_text(&self) -> String {
        let mut text = format!(
            "{} to move on {}: best square {} (index {})\n",
            self.side,
            self.board,
            self.index + 1,
            self.index
        );
        for scored in &self.scores {
            let _ = writeln!(text, "  square {}: {:+}", scored.index + 1, scored.score);
        }
        text
    }

    /// JSON rendering.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize report")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_picks_winning_square() {
        let report = BestMoveReport::compute("OO.|XX.|...", Mark::O).unwrap();
        assert_eq!(report.index, 2);
        assert_eq!(report.scores.len(), 5);
        assert!(report.to_text().contains("best square 3 (index 2)"));
        assert!(report.to_text().contains("square 3: +9"));
    }

    #[test]
    fn test_report_json() {
        let report = BestMoveReport::compute("OO.|XX.|...", Mark::O).unwrap();
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["index"], 2);
        assert_eq!(json["side"], "O");
        assert_eq!(json["scores"][0]["score"], 9);
    }

    #[test]
    fn test_finished_board_is_error() {
        let err = BestMoveReport::compute("XXX|OO.|...", Mark::O).unwrap_err();
        assert!(err.to_string().contains("No move to search"));
    }

    #[test]
    fn test_bad_notation_is_error() {
        let err = BestMoveReport::compute("XO", Mark::X).unwrap_err();
        assert!(err.to_string().contains("Invalid board"));
    }
}
