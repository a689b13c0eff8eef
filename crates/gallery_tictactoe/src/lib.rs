//! Pure tic-tac-toe game logic with an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **GameEngine**: legal play, terminal detection, score tally
//! - **MoveSearch**: optimal move for either side by full minimax
//! - **Invariants**: composable consistency checks for game states
//! - **GameSession**: sequencing of human moves, computer replies and scoring
//!
//! Nothing here performs I/O; presentation and timing belong to the caller.
//!
//! # Example
//!
//! ```
//! use gallery_tictactoe::{GameEngine, Mark, MoveSearch, Outcome};
//!
//! let state = GameEngine::reset();
//! let (state, accepted) = GameEngine::apply_move(&state, 4);
//! assert!(accepted);
//! assert_eq!(state.current(), Mark::O);
//!
//! let reply = MoveSearch::best_move(state.board(), Mark::O).unwrap();
//! let (state, accepted) = GameEngine::apply_move(&state, reply);
//! assert!(accepted);
//! assert_eq!(state.outcome(), &Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod invariants;
mod position;
mod rules;
mod search;
mod session;
mod types;

pub use engine::GameEngine;
pub use error::{BoardParseError, EngineError, MoveError};
pub use invariants::{
    GameStateInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    OutcomeConsistentInvariant, TurnOrderInvariant,
};
pub use position::Position;
pub use rules::{check_winner, compute_outcome, is_draw};
pub use search::{MoveSearch, ScoredMove};
pub use session::{GameMode, GameSession};
pub use types::{Board, CELLS, GameState, LINES, Line, Mark, Outcome, ScoreTally, Square};
