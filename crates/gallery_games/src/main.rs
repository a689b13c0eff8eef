//! Gallery Games - terminal tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use gallery_games::cli::{Cli, Command};
use gallery_games::{BestMoveReport, GameConfig, terminal};
use gallery_tictactoe::GameSession;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,gallery_games=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            computer_mark,
            delay_ms,
        } => {
            let config = GameConfig::load_or_default(&config)
                .with_context(|| format!("Failed to load {}", config.display()))?
                .with_overrides(mode, computer_mark.map(Into::into), delay_ms);
            run_play(config)
        }
        Command::BestMove { board, side, json } => run_best_move(&board, side.into(), json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all, fields(mode = ?config.mode()))]
fn run_play(config: GameConfig) -> Result<()> {
    info!("Starting interactive game");
    let mut session = GameSession::new(config.game_mode());
    let stdin = std::io::stdin();
    terminal::run(
        &mut session,
        config.computer_delay(),
        stdin.lock(),
        std::io::stdout(),
    )
}

/// Print the optimal move for a position
#[instrument]
fn run_best_move(board: &str, side: gallery_tictactoe::Mark, json: bool) -> Result<()> {
    let report = BestMoveReport::compute(board, side)?;
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
