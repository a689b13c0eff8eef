//! Game configuration loaded from TOML.

use clap::ValueEnum;
use derive_getters::Getters;
use derive_more::{Display, Error};
use gallery_tictactoe::{GameMode, Mark};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Who plays against whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ModeSetting {
    /// Two people share the board.
    #[default]
    TwoPlayer,
    /// Play against the computer.
    Computer,
}

/// Front-end configuration.
///
/// ```toml
/// mode = "computer"
/// computer_mark = "O"
/// computer_delay_ms = 500
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Starting mode.
    #[serde(default)]
    mode: ModeSetting,

    /// Mark the computer plays in computer mode.
    #[serde(default = "default_computer_mark")]
    computer_mark: Mark,

    /// Pause before the computer replies, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,
}

fn default_computer_mark() -> Mark {
    Mark::O
}

fn default_computer_delay_ms() -> u64 {
    500
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: ModeSetting::default(),
            computer_mark: default_computer_mark(),
            computer_delay_ms: default_computer_delay_ms(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = ?config.mode, computer_mark = %config.computer_mark, "Config loaded");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(
        mut self,
        mode: Option<ModeSetting>,
        computer_mark: Option<Mark>,
        computer_delay_ms: Option<u64>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(mark) = computer_mark {
            self.computer_mark = mark;
        }
        if let Some(delay) = computer_delay_ms {
            self.computer_delay_ms = delay;
        }
        self
    }

    /// Session mode described by this config.
    pub fn game_mode(&self) -> GameMode {
        match self.mode {
            ModeSetting::TwoPlayer => GameMode::TwoPlayer,
            ModeSetting::Computer => GameMode::VsComputer {
                computer: self.computer_mark,
            },
        }
    }

    /// Pause before the computer replies.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
