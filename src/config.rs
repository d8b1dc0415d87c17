//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_engine::{GameEngine, Mode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "noughts.toml";

/// Front-end configuration.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Mode the session starts in.
    #[serde(default)]
    mode: Mode,

    /// Seed for the computer's tie-breaks. Random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// How long the computer "thinks" before moving, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Where the TUI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_think_delay_ms() -> u64 {
    1500
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            seed: None,
            think_delay_ms: default_think_delay_ms(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(mode = %config.mode, seed = ?config.seed, "Config loaded");
        Ok(config)
    }

    /// Resolves the configuration for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// used if present, otherwise the built-in defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, mode: Option<Mode>, seed: Option<u64>) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Builds an engine for this configuration, seeded if a seed is set.
    pub fn new_engine(&self) -> GameEngine {
        match self.seed {
            Some(seed) => GameEngine::with_seed(self.mode, seed),
            None => GameEngine::new(self.mode),
        }
    }

    /// Thinking delay as a [`Duration`].
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
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
