//! Shared helpers for integration tests.

use gallery_tictactoe::{GameEngine, GameState};
use std::collections::HashSet;

/// Plays `indices` from a fresh game, asserting each move is accepted.
pub fn play(indices: &[usize]) -> GameState {
    indices.iter().fold(GameEngine::reset(), |state, &index| {
        let (next, accepted) = GameEngine::apply_move(&state, index);
        assert!(accepted, "move at {} rejected", index);
        next
    })
}

/// Every state reachable from a fresh game by legal play.
pub fn reachable_states() -> Vec<GameState> {
    let mut seen = HashSet::new();
    let mut states = Vec::new();
    let mut stack = vec![GameEngine::reset()];
    while let Some(state) = stack.pop() {
        if !seen.insert(*state.board()) {
            continue;
        }
        for index in state.board().empty_cells().collect::<Vec<_>>() {
            let (next, accepted) = GameEngine::apply_move(&state, index);
            if accepted {
                stack.push(next);
            }
        }
        states.push(state);
    }
    states
}
