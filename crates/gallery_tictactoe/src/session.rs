//! A play session: one game at a time plus the running score.
//!
//! The session sequences the engine and the search the way a front end
//! needs them. It records each finished game exactly once and lets the
//! computer reply through the same move path as a human.

use crate::engine::GameEngine;
use crate::error::{EngineError, MoveError};
use crate::search::MoveSearch;
use crate::types::{GameState, Line, Mark, Outcome, ScoreTally};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Who controls the marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Both marks are played by people at the same board.
    #[default]
    TwoPlayer,
    /// One mark is played by the optimal search.
    VsComputer {
        /// Mark played by the computer.
        computer: Mark,
    },
}

impl GameMode {
    /// Returns the computer's mark, if any.
    pub fn computer(&self) -> Option<Mark> {
        match self {
            GameMode::TwoPlayer => None,
            GameMode::VsComputer { computer } => Some(*computer),
        }
    }

    /// Display label for the mode.
    pub fn label(&self) -> &'static str {
        match self {
            GameMode::TwoPlayer => "Two players",
            GameMode::VsComputer { .. } => "Versus computer",
        }
    }
}

/// One game in progress plus the score across games.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    tally: ScoreTally,
    mode: GameMode,
}

impl GameSession {
    /// Starts a session with a fresh game and an empty tally.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        info!(mode = mode.label(), "Starting game session");
        Self {
            state: GameEngine::reset(),
            tally: ScoreTally::new(),
            mode,
        }
    }

    /// Returns the current game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the running score.
    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    /// Returns the mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Plays `index` for the mark to move. Returns whether it was accepted.
    pub fn play(&mut self, index: usize) -> bool {
        self.try_play(index).is_ok()
    }

    /// Plays `index` for the mark to move, reporting why it was rejected.
    ///
    /// The tally is updated exactly once, on the move that ends the game.
    #[instrument(skip(self), fields(current = %self.state.current()))]
    pub fn try_play(&mut self, index: usize) -> Result<(), MoveError> {
        self.state = GameEngine::try_move(&self.state, index)?;
        if self.state.outcome().is_terminal() {
            self.record_finished_game();
        }
        Ok(())
    }

    /// True when the game is running and the computer holds the move.
    pub fn computer_to_move(&self) -> bool {
        !self.state.outcome().is_terminal()
            && self.mode.computer() == Some(self.state.current())
    }

    /// Lets the computer play its optimal move. Returns the chosen index.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidState`] if the game is already over.
    #[instrument(skip(self))]
    pub fn play_computer(&mut self) -> Result<usize, EngineError> {
        let side = self.state.current();
        let index = MoveSearch::best_move(self.state.board(), side)?;
        if let Err(e) = self.try_play(index) {
            warn!(error = %e, index, "Search picked an unplayable square");
        }
        info!(index, %side, "Computer played");
        Ok(index)
    }

    /// Starts a new game, keeping the tally.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameEngine::reset();
    }

    /// Switches mode and starts a new game, keeping the tally.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        info!(mode = mode.label(), "Changing mode");
        self.mode = mode;
        self.reset();
    }

    /// Toggles between two-player and playing the computer as O.
    pub fn toggle_mode(&mut self) {
        let next = match self.mode {
            GameMode::TwoPlayer => GameMode::VsComputer { computer: Mark::O },
            GameMode::VsComputer { .. } => GameMode::TwoPlayer,
        };
        self.set_mode(next);
    }

    /// One-line status of the current game.
    pub fn status(&self) -> String {
        match self.state.outcome() {
            Outcome::InProgress => format!("Next player: {}", self.state.current()),
            Outcome::Win { mark, .. } => format!("Winner: {}", mark),
            Outcome::Draw => "Game is a Draw!".to_string(),
        }
    }

    /// Closing remark for a finished game.
    pub fn feedback(&self) -> Option<String> {
        match self.state.outcome() {
            Outcome::InProgress => None,
            Outcome::Win { mark, .. } => Some(format!("Congratulations Player {}!", mark)),
            Outcome::Draw => Some("Better luck next time!".to_string()),
        }
    }

    /// Line to highlight once the game is won.
    pub fn winning_line(&self) -> Option<Line> {
        self.state.outcome().line()
    }

    fn record_finished_game(&mut self) {
        match GameEngine::record_outcome(&self.tally, self.state.outcome()) {
            Ok(tally) => {
                self.tally = tally;
                info!(outcome = %self.state.outcome(), tally = %self.tally, "Game recorded");
            }
            // Only reached on a terminal outcome.
            Err(e) => warn!(error = %e, "Failed to record outcome"),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        let mut session = GameSession::new(GameMode::TwoPlayer);
        assert_eq!(session.status(), "Next player: X");
        assert_eq!(session.feedback(), None);

        for index in [0, 3, 1, 4, 2] {
            assert!(session.play(index));
        }
        assert_eq!(session.status(), "Winner: X");
        assert_eq!(
            session.feedback().as_deref(),
            Some("Congratulations Player X!")
        );
        assert_eq!(session.winning_line().map(|l| l.cells()), Some([0, 1, 2]));
    }

    #[test]
    fn test_draw_messages() {
        let mut session = GameSession::new(GameMode::TwoPlayer);
        for index in [0, 4, 8, 1, 7, 6, 2, 5, 3] {
            assert!(session.play(index));
        }
        assert_eq!(session.status(), "Game is a Draw!");
        assert_eq!(session.feedback().as_deref(), Some("Better luck next time!"));
        assert_eq!(session.tally().draws, 1);
        assert_eq!(session.winning_line(), None);
    }

    #[test]
    fn test_computer_to_move_only_on_its_turn() {
        let mut session = GameSession::new(GameMode::VsComputer { computer: Mark::O });
        assert!(!session.computer_to_move());
        assert!(session.play(4));
        assert!(session.computer_to_move());
        let index = session.play_computer().unwrap();
        assert_ne!(index, 4);
        assert!(!session.computer_to_move());
    }

    #[test]
    fn test_toggle_mode() {
        let mut session = GameSession::new(GameMode::TwoPlayer);
        session.toggle_mode();
        assert_eq!(session.mode(), GameMode::VsComputer { computer: Mark::O });
        session.toggle_mode();
        assert_eq!(session.mode(), GameMode::TwoPlayer);
    }
}
