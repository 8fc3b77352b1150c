use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::COLS;

/// What a drop into a full column does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FullColumnPolicy {
    /// Silently leave the game unchanged
    #[default]
    Ignore,
    /// Fail with `MoveError::ColumnFull`
    Reject,
}

/// What a drop after a winner has been decided does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AfterWinPolicy {
    /// Place the piece; the winner stays fixed
    #[default]
    Allow,
    /// Fail with `MoveError::GameOver`
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub full_column: FullColumnPolicy,
    pub after_win: AfterWinPolicy,
}

impl RulesConfig {
    /// Both edge cases reported to the caller as errors
    pub fn strict() -> Self {
        RulesConfig {
            full_column: FullColumnPolicy::Reject,
            after_win: AfterWinPolicy::Reject,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Column the cursor starts on
    pub start_column: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig { start_column: 3 }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub rules: RulesConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.start_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "ui.start_column must be < {COLS}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
