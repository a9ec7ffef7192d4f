//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.abak.toml` in the working directory
//! 4. `~/.config/abak/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants;
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("не удалось прочитать файл конфигурации {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("не удалось разобрать файл конфигурации {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub history: HistoryConfig,
    pub ui: UiConfig,
}

/// History log configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Path of the append-only history file. Relative paths resolve
    /// against the working directory.
    pub path: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(constants::HISTORY_FILENAME),
        }
    }
}

/// Presentation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Locale tag applied best-effort at startup.
    pub locale: String,
    /// Whether colored output is enabled.
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: constants::DEFAULT_LOCALE.to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then the local one in `local_dir`, then
    /// applies environment variable overrides. CLI flags are merged by
    /// the caller afterwards.
    pub fn load(local_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config.merge(Self::load_file(&global_path)?);
                log::debug!("loaded global config from {}", global_path.display());
            }
        }

        // Layer 3: local config
        if let Some(dir) = local_dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                config.merge(Self::load_file(&local_path)?);
                log::debug!("loaded local config from {}", local_path.display());
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one; `other` wins for every field
    /// it set away from the defaults.
    fn merge(&mut self, other: Config) {
        let defaults = Config::default();

        if other.history.path != defaults.history.path {
            self.history.path = other.history.path;
        }
        if other.ui.locale != defaults.ui.locale {
            self.ui.locale = other.ui.locale;
        }
        // Disabled color overrides enabled.
        if !other.ui.color {
            self.ui.color = false;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.get(constants::ENV_HISTORY_FILE) {
            self.history.path = PathBuf::from(val);
        }
        if let Some(val) = env.get(constants::ENV_LOCALE) {
            self.ui.locale = val;
        }
        if let Some(val) = env.flag(constants::ENV_COLOR) {
            self.ui.color = val;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(
            config.history.path,
            PathBuf::from("calculator_history.txt")
        );
        assert_eq!(config.ui.locale, "ru-RU");
        assert!(config.ui.color);
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[history]
path = "/var/log/abak/history.txt"

[ui]
locale = "ru"
color = false
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.history.path,
            PathBuf::from("/var/log/abak/history.txt")
        );
        assert_eq!(config.ui.locale, "ru");
        assert!(!config.ui.color);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[ui]\nlocale = \"ru\"\n").unwrap();
        assert_eq!(
            config.history.path,
            PathBuf::from("calculator_history.txt")
        );
        assert!(config.ui.color);
    }

    #[test]
    fn merge_overrides_only_non_default_fields() {
        let mut base = Config::default();
        base.history.path = PathBuf::from("base.txt");

        // `other` left the history path at its default — base keeps its own.
        let mut other = Config::default();
        other.ui.locale = "ru".to_string();
        base.merge(other);

        assert_eq!(base.history.path, PathBuf::from("base.txt"));
        assert_eq!(base.ui.locale, "ru");
    }

    #[test]
    fn merge_disabled_color_wins() {
        let mut base = Config::default();
        let mut other = Config::default();
        other.ui.color = false;
        base.merge(other);
        assert!(!base.ui.color);
    }

    #[test]
    fn env_vars_override_file_values() {
        let env = Env::mock([
            (constants::ENV_HISTORY_FILE, "/tmp/env-history.txt"),
            (constants::ENV_LOCALE, "ru"),
            (constants::ENV_COLOR, "off"),
        ]);
        let mut config = Config::default();
        config.apply_env_vars(&env);

        assert_eq!(config.history.path, PathBuf::from("/tmp/env-history.txt"));
        assert_eq!(config.ui.locale, "ru");
        assert!(!config.ui.color);
    }

    #[test]
    fn invalid_color_env_value_is_ignored() {
        let env = Env::mock([(constants::ENV_COLOR, "sometimes")]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert!(config.ui.color);
    }

    #[test]
    fn load_reads_local_config_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(constants::CONFIG_FILENAME),
            "[history]\npath = \"local.txt\"\n",
        )
        .unwrap();

        let config = Config::load(Some(dir.path()), &Env::mock(Vec::<(&str, &str)>::new()))
            .unwrap();
        assert_eq!(config.history.path, PathBuf::from("local.txt"));
    }

    #[test]
    fn load_rejects_malformed_local_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(constants::CONFIG_FILENAME), "not [valid toml").unwrap();

        let err = Config::load(Some(dir.path()), &Env::mock(Vec::<(&str, &str)>::new()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ParseFile { .. }));
    }
}
