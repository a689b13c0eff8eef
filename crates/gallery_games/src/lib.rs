//! Terminal front end for the gallery tic-tac-toe game.
//!
//! - **config**: TOML settings with command-line overrides
//! - **terminal**: the interactive play loop
//! - **solver**: one-shot best-move queries

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod solver;
pub mod terminal;

pub use config::{ConfigError, GameConfig, ModeSetting};
pub use solver::BestMoveReport;
