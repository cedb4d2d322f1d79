//! Game configuration loaded from TOML.

use crate::games::tictactoe::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a human-versus-computer game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Symbol played by the human; the computer plays the other one.
    #[serde(default = "default_human_player")]
    human_player: Player,

    /// Whether the human moves first.
    #[serde(default = "default_human_first")]
    human_first: bool,

    /// Pause before the computer's move is applied, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,
}

fn default_human_player() -> Player {
    Player::X
}

fn default_human_first() -> bool {
    true
}

fn default_think_delay_ms() -> u64 {
    800
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_player: default_human_player(),
            human_first: default_human_first(),
            think_delay_ms: default_think_delay_ms(),
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

        info!(human_player = %config.human_player, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns the symbol played by the computer.
    pub fn computer_player(&self) -> Player {
        self.human_player.opponent()
    }

    /// Returns the symbol that moves first.
    pub fn first_player(&self) -> Player {
        if self.human_first {
            self.human_player
        } else {
            self.computer_player()
        }
    }

    /// Returns the computer's thinking delay.
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    /// Overrides the human's symbol.
    pub fn with_human_player(mut self, player: Player) -> Self {
        self.human_player = player;
        self
    }

    /// Overrides who moves first.
    pub fn with_human_first(mut self, human_first: bool) -> Self {
        self.human_first = human_first;
        self
    }

    /// Overrides the thinking delay.
    pub fn with_think_delay_ms(mut self, think_delay_ms: u64) -> Self {
        self.think_delay_ms = think_delay_ms;
        self
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
