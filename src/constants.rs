//! App-wide constants.
//!
//! Centralises the tool name, config and history paths, and environment
//! variable names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "abak";

/// Crate version, from the manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (`.abak.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".abak.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "abak";

/// Default history filename, relative to the working directory.
pub const HISTORY_FILENAME: &str = "calculator_history.txt";

/// Default UI locale tag.
pub const DEFAULT_LOCALE: &str = "ru-RU";

/// Timestamp layout for history records (minute resolution).
pub const HISTORY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Reserved menu token that shows the help text.
pub const HELP_TOKEN: &str = "?";


// ── Environment variable names ──────────────────────────────────────

pub const ENV_HISTORY_FILE: &str = "ABAK_HISTORY_FILE";
pub const ENV_LOCALE: &str = "ABAK_LOCALE";
pub const ENV_COLOR: &str = "ABAK_COLOR";
