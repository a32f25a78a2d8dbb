//! Configuration management for ticklist.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `ticklist.toml` file
//! 3. User config `~/.config/ticklist/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,

    /// Store behaviour configuration.
    pub store: StoreConfig,

    /// Terminal UI configuration.
    pub ui: UiConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./ticklist.toml` (project local)
    /// 2. `~/.config/ticklist/config.toml` (user config)
    /// 3. Falls back to defaults
    ///
    /// Environment overrides apply in every case.
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(LOCAL_CONFIG_FILE).exists() {
            return Self::from_file(LOCAL_CONFIG_FILE);
        }

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Returns `~/.config/ticklist/config.toml` when a config directory is known.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(USER_CONFIG_FILE))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("TICKLIST_DATA_DIR") {
            self.storage.data_dir = dir;
        }
        if let Ok(slot) = std::env::var("TICKLIST_SLOT") {
            self.storage.slot_name = slot;
        }
        if let Ok(level) = std::env::var("TICKLIST_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Checks values that would otherwise fail much later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.slot_name.trim().is_empty() {
            return Err(ConfigError::Invalid("storage.slot_name must not be empty".to_string()));
        }
        if self.storage.slot_name.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "storage.slot_name must be a plain name, got {:?}",
                self.storage.slot_name
            )));
        }
        if self.store.min_text_chars == 0 {
            return Err(ConfigError::Invalid("store.min_text_chars must be at least 1".to_string()));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid("ui.tick_rate_ms must be positive".to_string()));
        }
        Ok(())
    }

    /// Serialize this configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for ticklist data (default: "~/.ticklist").
    pub data_dir: String,

    /// Name of the slot holding the store snapshot.
    pub slot_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            slot_name: DEFAULT_SLOT_NAME.to_string(),
        }
    }
}

impl StorageConfig {
    /// Get the resolved data directory.
    ///
    /// Relative paths are taken relative to the home directory, or to the
    /// working directory when no home directory is known.
    pub fn data_path(&self) -> PathBuf {
        let dir = PathBuf::from(&self.data_dir);
        if dir.is_absolute() {
            return dir;
        }
        match dirs::home_dir() {
            Some(home) => home.join(dir),
            None => dir,
        }
    }
}

/// Store behaviour configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Shortest accepted text for a new item, in UTF-16 code units.
    pub min_text_chars: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            min_text_chars: DEFAULT_MIN_TEXT_CHARS,
        }
    }
}

/// Terminal UI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event loop tick interval in milliseconds.
    pub tick_rate_ms: u64,

    /// Placeholder text of the new-item input.
    pub placeholder: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            placeholder: DEFAULT_INPUT_PLACEHOLDER.to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "ticklist_core=debug".
    pub level: String,

    /// Log file name inside the data directory.
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}
