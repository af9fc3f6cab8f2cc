//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictactoe_board::Symbol;
use tracing::{debug, info, instrument};

/// Timing and seating for a session.
///
/// Every field is optional in the file; missing fields take the defaults
/// below.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Symbol the human plays. X always opens.
    human_symbol: Symbol,

    /// Delay before the computer answers, in milliseconds.
    computer_delay_ms: u64,

    /// Delay between a finished game and the cleared board, in milliseconds.
    restart_delay_ms: u64,

    /// Length of the fade-in on newly placed symbols, in milliseconds.
    fade_in_ms: u64,

    /// Opacity a symbol starts its fade-in at (0.0-1.0).
    fade_from: f64,

    /// Seed for the computer's random choices; entropy when absent.
    seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_symbol: Symbol::X,
            computer_delay_ms: 1000,
            restart_delay_ms: 1000,
            fade_in_ms: 200,
            fade_from: 0.5,
            seed: None,
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
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(human = %config.human_symbol, seed = ?config.seed, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the human's symbol.
    pub fn with_human_symbol(mut self, symbol: Symbol) -> Self {
        self.human_symbol = symbol;
        self
    }

    /// Overrides the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Computer reply delay.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Delay before a finished board is cleared.
    pub fn restart_delay(&self) -> Duration {
        Duration::from_millis(self.restart_delay_ms)
    }

    /// Fade-in duration.
    pub fn fade_in(&self) -> Duration {
        Duration::from_millis(self.fade_in_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.fade_from) {
            return Err(ConfigError::new(format!(
                "fade_from must be between 0.0 and 1.0, got {}",
                self.fade_from
            )));
        }
        Ok(())
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
