//! Match configuration loaded from TOML.

use crate::peer::{GRACE_SECS, TURN_BUDGET_SECS, TurnTimer};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for running a match.
///
/// `turn_secs` and `grace_secs` must be identical on both peers.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct MatchConfig {
    /// Seconds each side has per move.
    #[serde(default = "default_turn_secs")]
    turn_secs: u64,

    /// Extra seconds before a move is declared timed out.
    #[serde(default = "default_grace_secs")]
    grace_secs: u64,

    /// Opener's pause before announcing the match, in milliseconds.
    #[serde(default)]
    start_delay_ms: u64,

    /// Built-in solver's pause before each guess, in milliseconds.
    #[serde(default = "default_solver_delay_ms")]
    solver_delay_ms: u64,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    #[setters(into)]
    log_filter: String,
}

fn default_turn_secs() -> u64 {
    TURN_BUDGET_SECS
}

fn default_grace_secs() -> u64 {
    GRACE_SECS
}

fn default_solver_delay_ms() -> u64 {
    500
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            turn_secs: default_turn_secs(),
            grace_secs: default_grace_secs(),
            start_delay_ms: 0,
            solver_delay_ms: default_solver_delay_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(turn_secs = config.turn_secs, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.turn_secs == 0 {
            return Err(ConfigError::new("turn_secs must be positive".to_string()));
        }
        Ok(config)
    }

    /// Builds the turn timer these settings describe.
    pub fn timer(&self) -> TurnTimer {
        TurnTimer::new(
            Duration::from_secs(self.turn_secs),
            Duration::from_secs(self.grace_secs),
        )
    }

    /// Opener's start delay.
    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }

    /// Solver's think time.
    pub fn solver_delay(&self) -> Duration {
        Duration::from_millis(self.solver_delay_ms)
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
