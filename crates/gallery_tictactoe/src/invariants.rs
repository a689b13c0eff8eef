//! First-class invariants for tic-tac-toe game states.
//!
//! Invariants are logical properties that must hold for every state the
//! engine produces. They are checked after each accepted move in debug
//! builds and gate [`GameState::from_board`].

use crate::error::EngineError;
use crate::rules::compute_outcome;
use crate::types::{Board, GameState, Mark};
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together, collecting every violation.
pub trait InvariantSet<S> {
    /// Returns `Ok(())` if all invariants hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

/// Invariant: X has placed as many marks as O, or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        let valid = x == o || x == o + 1;
        if !valid {
            warn!(x, o, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        <Self as Invariant<Board>>::holds(state.board())
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}

/// Invariant: while the game is running, X moves on even counts and O on odd.
pub struct TurnOrderInvariant;

impl Invariant<GameState> for TurnOrderInvariant {
    fn holds(state: &GameState) -> bool {
        if state.outcome().is_terminal() {
            return true;
        }
        let board = state.board();
        let expected = if board.count(Mark::X) == board.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        };
        state.current() == expected
    }

    fn description() -> &'static str {
        "Mark to move follows X, O, X, O, ..."
    }
}

/// Invariant: the stored outcome matches the board.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        *state.outcome() == compute_outcome(state.board())
    }

    fn description() -> &'static str {
        "Stored outcome matches the board"
    }
}

/// All game-state invariants as a composable set.
pub type GameStateInvariants = (
    MarkBalanceInvariant,
    TurnOrderInvariant,
    OutcomeConsistentInvariant,
);

impl GameState {
    /// Builds a state from an arbitrary board, e.g. a puzzle position.
    ///
    /// The outcome is computed from the board. Boards that could not arise
    /// from alternating play starting with X are rejected.
    #[instrument]
    pub fn from_board(board: Board, current: Mark) -> Result<Self, EngineError> {
        let state = Self {
            board,
            current,
            outcome: compute_outcome(&board),
        };
        GameStateInvariants::check_all(&state).map_err(|violations| {
            let violations = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            EngineError::InconsistentState { violations }
        })?;
        Ok(state)
    }
}
