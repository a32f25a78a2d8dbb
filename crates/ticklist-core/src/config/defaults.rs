//! Default values for ticklist configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Storage Defaults
// ============================================================================

/// Default data directory. Relative paths resolve under the home directory.
pub const DEFAULT_DATA_DIR: &str = ".ticklist";

/// Default name of the slot holding the store snapshot.
pub const DEFAULT_SLOT_NAME: &str = "todo-storage";

/// File extension of slot files written by `FileStorage`.
pub const SLOT_FILE_EXTENSION: &str = "json";

// ============================================================================
// Store Defaults
// ============================================================================

/// Minimum length of the text of a new item, in UTF-16 code units.
pub const DEFAULT_MIN_TEXT_CHARS: usize = 2;

// ============================================================================
// UI Defaults
// ============================================================================

/// Tick interval of the terminal UI event loop.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Placeholder shown in the empty new-item input.
pub const DEFAULT_INPUT_PLACEHOLDER: &str = "What needs to be done?";

// ============================================================================
// Logging Defaults
// ============================================================================

/// Default log level directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file name, created inside the data directory.
pub const DEFAULT_LOG_FILE: &str = "ticklist.log";

// ============================================================================
// File Locations
// ============================================================================

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "ticklist.toml";

/// Application directory name under the user config directory.
pub const APP_DIR_NAME: &str = "ticklist";

/// User config file name inside [`APP_DIR_NAME`].
pub const USER_CONFIG_FILE: &str = "config.toml";
