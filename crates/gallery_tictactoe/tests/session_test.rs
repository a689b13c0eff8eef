//! Tests for session sequencing and scoring.

use gallery_tictactoe::{GameMode, GameSession, Mark, Outcome, ScoreTally};

fn finish_x_win(session: &mut GameSession) {
    for index in [0, 3, 1, 4, 2] {
        assert!(session.play(index));
    }
}

#[test]
fn test_finished_game_recorded_once() {
    let mut session = GameSession::new(GameMode::TwoPlayer);
    finish_x_win(&mut session);
    assert_eq!(session.tally().wins_x, 1);

    // Further input after the end is ignored and never re-recorded.
    for index in 0..9 {
        assert!(!session.play(index));
    }
    assert_eq!(session.tally().games(), 1);
}

#[test]
fn test_reset_keeps_tally() {
    let mut session = GameSession::new(GameMode::TwoPlayer);
    finish_x_win(&mut session);
    session.reset();
    session.reset();

    assert_eq!(session.state().outcome(), &Outcome::InProgress);
    assert_eq!(session.state().current(), Mark::X);
    assert_eq!(
        session.tally(),
        &ScoreTally {
            wins_x: 1,
            wins_o: 0,
            draws: 0
        }
    );
}

#[test]
fn test_mode_change_resets_board_only() {
    let mut session = GameSession::new(GameMode::TwoPlayer);
    finish_x_win(&mut session);
    assert!(!session.play(0));

    session.set_mode(GameMode::VsComputer { computer: Mark::O });
    assert_eq!(session.state().board().empty_cells().count(), 9);
    assert_eq!(session.tally().wins_x, 1);
}

#[test]
fn test_computer_reply_through_engine() {
    let mut session = GameSession::new(GameMode::VsComputer { computer: Mark::O });
    assert!(session.play(0));
    assert!(session.computer_to_move());

    let index = session.play_computer().unwrap();
    assert_eq!(
        session.state().board().get(index),
        Some(gallery_tictactoe::Square::Occupied(Mark::O))
    );
    assert_eq!(session.state().current(), Mark::X);
    assert!(!session.computer_to_move());
}

#[test]
fn test_computer_answers_corner_with_center() {
    let mut session = GameSession::new(GameMode::VsComputer { computer: Mark::O });
    // X opens in a corner; the search answers in the center.
    assert!(session.play(0));
    assert_eq!(session.play_computer(), Ok(4));

    // X takes the far corner; O must not lose from here.
    assert!(session.play(8));
    while !session.state().outcome().is_terminal() {
        if session.computer_to_move() {
            session.play_computer().unwrap();
        } else {
            let index = session.state().board().empty_cells().next().unwrap();
            assert!(session.play(index));
        }
    }
    assert_ne!(session.state().outcome().winner(), Some(Mark::X));
    assert_eq!(session.tally().games(), 1);
}

#[test]
fn test_computer_plays_x() {
    let mut session = GameSession::new(GameMode::VsComputer { computer: Mark::X });
    assert!(session.computer_to_move());
    let index = session.play_computer().unwrap();
    assert_eq!(index, 0);
    assert_eq!(session.state().current(), Mark::O);
}

#[test]
fn test_play_computer_after_end_is_error() {
    let mut session = GameSession::new(GameMode::VsComputer { computer: Mark::O });
    session.set_mode(GameMode::TwoPlayer);
    finish_x_win(&mut session);
    assert!(session.play_computer().is_err());
    assert_eq!(session.tally().games(), 1);
}
