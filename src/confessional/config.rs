//! # Configuration
//!
//! Stored as `config.json` in the data directory. A missing file means defaults.
//!
//! | Key             | Default | Description                                      |
//! |-----------------|---------|--------------------------------------------------|
//! | `min-length`    | `10`    | Minimum trimmed length of a new confession       |
//! | `warn-length`   | `350`   | Draft length above which the counter warns       |
//! | `danger-length` | `450`   | Draft length above which the counter turns red   |
//!
//! `min-length` can only raise the bar: it never goes below [`MIN_TEXT_LENGTH`].
//! `warn-length` must not exceed `danger-length`.

use crate::error::{ConfessionError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Shortest confession ever accepted, whatever the configuration says.
pub const MIN_TEXT_LENGTH: usize = 10;

pub const KEYS: [&str; 3] = ["min-length", "warn-length", "danger-length"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ConfessionConfig {
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    #[serde(default = "default_warn_length")]
    pub warn_length: usize,

    #[serde(default = "default_danger_length")]
    pub danger_length: usize,
}

fn default_min_length() -> usize {
    MIN_TEXT_LENGTH
}

fn default_warn_length() -> usize {
    350
}

fn default_danger_length() -> usize {
    450
}

impl Default for ConfessionConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            warn_length: default_warn_length(),
            danger_length: default_danger_length(),
        }
    }
}

impl ConfessionConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ConfessionError::Io)?;
        let mut config: Self =
            serde_json::from_str(&content).map_err(ConfessionError::Serialization)?;
        if config.min_length < MIN_TEXT_LENGTH {
            tracing::warn!(
                configured = config.min_length,
                floor = MIN_TEXT_LENGTH,
                "min-length below floor, raising it"
            );
            config.min_length = MIN_TEXT_LENGTH;
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ConfessionError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content =
            serde_json::to_string_pretty(self).map_err(ConfessionError::Serialization)?;
        fs::write(config_path, content).map_err(ConfessionError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "min-length" => Some(self.min_length.to_string()),
            "warn-length" => Some(self.warn_length.to_string()),
            "danger-length" => Some(self.danger_length.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let parsed: usize = value
            .trim()
            .parse()
            .map_err(|_| format!("{} expects a non-negative number, got {}", key, value))?;
        let mut updated = self.clone();
        match key {
            "min-length" => {
                if parsed < MIN_TEXT_LENGTH {
                    return Err(format!(
                        "min-length cannot be below {}, got {}",
                        MIN_TEXT_LENGTH, parsed
                    ));
                }
                updated.min_length = parsed;
            }
            "warn-length" => updated.warn_length = parsed,
            "danger-length" => updated.danger_length = parsed,
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        if updated.warn_length > updated.danger_length {
            return Err(format!(
                "warn-length ({}) cannot exceed danger-length ({})",
                updated.warn_length, updated.danger_length
            ));
        }
        *self = updated;
        Ok(())
    }
}
