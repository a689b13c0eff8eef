//! Game engine: legal play, terminal detection and the score tally.

use crate::error::{EngineError, MoveError};
use crate::invariants::{GameStateInvariants, InvariantSet};
use crate::rules::compute_outcome;
use crate::types::{Board, GameState, Mark, Outcome, ScoreTally};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Stateless: every operation takes a state and returns the next one.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameEngine;

impl GameEngine {
    /// Returns a fresh game: empty board, X to move, in progress.
    #[instrument]
    pub fn reset() -> GameState {
        GameState::new()
    }

    /// Applies a move at `index` for the mark to move.
    ///
    /// Returns the next state and whether the move was accepted. A rejected
    /// move returns an unchanged copy of `state`.
    #[instrument(skip(state), fields(current = %state.current()))]
    pub fn apply_move(state: &GameState, index: usize) -> (GameState, bool) {
        match Self::try_move(state, index) {
            Ok(next) => (next, true),
            Err(e) => {
                debug!(error = %e, "Move rejected");
                (state.clone(), false)
            }
        }
    }

    /// Applies a move at `index`, reporting why it was rejected.
    #[instrument(skip(state), fields(current = %state.current()))]
    pub fn try_move(state: &GameState, index: usize) -> Result<GameState, MoveError> {
        if state.outcome().is_terminal() {
            return Err(MoveError::GameOver);
        }
        match state.board().get(index) {
            None => return Err(MoveError::OutOfBounds(index)),
            Some(square) if square.mark().is_some() => {
                return Err(MoveError::SquareOccupied(index));
            }
            Some(_) => {}
        }

        let mut next = state.clone();
        next.board.place(index, state.current);
        next.outcome = compute_outcome(&next.board);
        if !next.outcome.is_terminal() {
            next.current = state.current.opponent();
        } else {
            info!(outcome = %next.outcome, "Game finished");
        }

        debug_assert!(
            GameStateInvariants::check_all(&next).is_ok(),
            "Game state invariants violated after move at {}",
            index
        );

        Ok(next)
    }

    /// Computes the outcome of a board.
    pub fn compute_outcome(board: &Board) -> Outcome {
        compute_outcome(board)
    }

    /// Adds a finished game's outcome to the tally.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RecordOutcomeMisuse`] for an in-progress
    /// outcome; the tally is only ever updated once per finished game.
    #[instrument]
    pub fn record_outcome(tally: &ScoreTally, outcome: &Outcome) -> Result<ScoreTally, EngineError> {
        let mut next = *tally;
        match outcome {
            Outcome::InProgress => return Err(EngineError::RecordOutcomeMisuse),
            Outcome::Win { mark, .. } => match mark {
                Mark::X => next.wins_x += 1,
                Mark::O => next.wins_o += 1,
            },
            Outcome::Draw => next.draws += 1,
        }
        debug!(tally = %next, "Outcome recorded");
        Ok(next)
    }
}
