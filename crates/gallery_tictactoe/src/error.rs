//! Error types for the game engine and the move search.

use crate::types::Outcome;
use derive_more::{Display, Error};

/// Reason a move was not accepted.
///
/// Illegal input is expected at runtime; [`GameEngine::apply_move`](crate::GameEngine::apply_move)
/// reports it as `accepted == false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The index is not on the board.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Caller contract violation.
///
/// These indicate broken turn sequencing in the caller and are always
/// returned as errors.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Search requested on a board with no move to make.
    #[display("No move to search: game is {}", outcome)]
    InvalidState {
        /// Outcome of the board handed to the search.
        #[error(not(source))]
        outcome: Outcome,
    },

    /// An in-progress outcome was handed to the tally.
    #[display("Cannot record an outcome for a game still in progress")]
    RecordOutcomeMisuse,

    /// A state was built from a board that breaks the game invariants.
    #[display("Inconsistent game state: {}", violations)]
    InconsistentState {
        /// Descriptions of the violated invariants.
        #[error(not(source))]
        violations: String,
    },
}

/// Error parsing the compact board notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The notation did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// A character that is neither a mark, an empty cell, nor a separator.
    #[display("Unknown board symbol {:?}", _0)]
    UnknownSymbol(#[error(not(source))] char),
}
