//! Line-oriented terminal front end.
//!
//! Reads one command per line and redraws the board after every step. The
//! loop is generic over its input and output so it can be driven by a
//! script in tests.

use anyhow::{Context, Result};
use gallery_tictactoe::{Board, GameSession, Line, MoveError, Position, Square};
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// One parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark.
    Place(Position),
    /// Start a new game.
    Restart,
    /// Switch between two-player and computer mode.
    ToggleMode,
    /// Leave the loop.
    Quit,
}

impl Input {
    /// Parses a line; `None` for unrecognized input.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Some(Input::Quit),
            "r" | "restart" => Some(Input::Restart),
            "m" | "mode" => Some(Input::ToggleMode),
            other => Position::from_label_or_number(other).map(Input::Place),
        }
    }
}

/// Runs the interactive loop until `quit` or end of input.
#[instrument(skip_all, fields(mode = session.mode().label()))]
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    computer_delay: Duration,
    input: R,
    mut out: W,
) -> Result<()> {
    info!("Starting terminal session");
    let mut lines = input.lines();

    loop {
        render(session, &mut out)?;

        if session.computer_to_move() {
            std::thread::sleep(computer_delay);
            let index = session
                .play_computer()
                .context("Computer failed to pick a move")?;
            writeln!(out, "Computer plays {}", index + 1)?;
            continue;
        }

        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            debug!("Input closed");
            break;
        };
        let line = line.context("Failed to read input")?;

        match Input::parse(&line) {
            Some(Input::Quit) => break,
            Some(Input::Restart) => session.reset(),
            Some(Input::ToggleMode) => {
                session.toggle_mode();
                writeln!(out, "Mode: {}", session.mode().label())?;
            }
            Some(Input::Place(pos)) => {
                if let Err(e) = session.try_play(pos.to_index()) {
                    debug!(error = %e, "Move rejected");
                    writeln!(out, "{}", rejection(e))?;
                }
            }
            None => writeln!(out, "Enter 1-9 or a square name, r to restart, m to switch mode, q to quit")?,
        }
    }

    writeln!(out, "Final score: {}", session.tally())?;
    info!(tally = %session.tally(), "Terminal session finished");
    Ok(())
}

fn rejection(error: MoveError) -> String {
    match error {
        MoveError::SquareOccupied(index) | MoveError::OutOfBounds(index) => {
            format!("Square {} is not available", index + 1)
        }
        MoveError::GameOver => "Game is over, press r to play again".to_string(),
    }
}

/// Writes the board, status line, score and, once finished, the feedback.
pub fn render<W: Write>(session: &GameSession, out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", board_text(session.state().board(), session.winning_line()))?;
    writeln!(out, "{}", session.status())?;
    writeln!(out, "{} | {}", session.tally(), session.mode().label())?;
    if let Some(feedback) = session.feedback() {
        writeln!(out, "{}", feedback)?;
        if let Some(line) = session.winning_line() {
            writeln!(out, "Winning line: {}", line)?;
        }
        writeln!(out, "Press r to play again")?;
    }
    Ok(())
}

/// Board drawing with the cells of `highlight` bracketed.
pub fn board_text(board: &Board, highlight: Option<Line>) -> String {
    let rows: Vec<String> = board
        .squares()
        .chunks(3)
        .enumerate()
        .map(|(row, squares)| {
            squares
                .iter()
                .enumerate()
                .map(|(col, square)| {
                    let index = row * 3 + col;
                    let symbol = match square {
                        Square::Empty => (index + 1).to_string(),
                        Square::Occupied(mark) => mark.to_string(),
                    };
                    if highlight.is_some_and(|line| line.contains(index)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}
