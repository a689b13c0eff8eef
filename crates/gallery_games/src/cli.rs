//! Command-line interface for gallery_games.

use crate::config::ModeSetting;
use clap::{Parser, Subcommand, ValueEnum};
use gallery_tictactoe::Mark;
use std::path::PathBuf;

/// Gallery Games - tic-tac-toe against a friend or a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "gallery_games")]
#[command(about = "Tic-tac-toe with an unbeatable computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to the TOML config file
        #[arg(short, long, default_value = "gallery_games.toml")]
        config: PathBuf,

        /// Starting mode (overrides the config file)
        #[arg(long, value_enum)]
        mode: Option<ModeSetting>,

        /// Mark played by the computer (overrides the config file)
        #[arg(long, value_enum)]
        computer_mark: Option<MarkArg>,

        /// Pause before the computer replies, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Print the optimal move for a position
    BestMove {
        /// Board in compact notation, e.g. "OO.|XX.|..."
        #[arg(short, long)]
        board: String,

        /// Mark to move
        #[arg(short, long, value_enum)]
        side: MarkArg,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Mark as a command-line value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarkArg {
    /// Mark X
    X,
    /// Mark O
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play() {
        let cli = Cli::try_parse_from([
            "gallery_games",
            "play",
            "--mode",
            "computer",
            "--computer-mark",
            "x",
        ])
        .unwrap();
        match cli.command {
            Command::Play {
                mode,
                computer_mark,
                config,
                delay_ms,
            } => {
                assert_eq!(mode, Some(ModeSetting::Computer));
                assert_eq!(computer_mark.map(Mark::from), Some(Mark::X));
                assert_eq!(config, PathBuf::from("gallery_games.toml"));
                assert_eq!(delay_ms, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_best_move() {
        let cli = Cli::try_parse_from([
            "gallery_games",
            "best-move",
            "--board",
            "OO.|XX.|...",
            "--side",
            "o",
            "--json",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::BestMove {
                side: MarkArg::O,
                json: true,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["gallery_games", "play", "--mode", "solo"]).is_err());
    }
}
