//! # Configuration
//!
//! Settings for the `textadapt` CLI, stored as `config.json`.
//!
//! ## Location
//!
//! 1. **`TEXTADAPT_CONFIG_DIR`**: overrides the directory when set.
//! 2. **Platform config dir**: resolved via the `directories` crate.
//!
//! A missing file means defaults.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `content_size_category` | `large` | Category `adapt` uses when none is given |
//! | `pretty` | `true` | Pretty-print JSON output |

use crate::environment::ContentSizeCategory;
use crate::error::{Result, TextAdaptError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "TEXTADAPT_CONFIG_DIR";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdaptConfig {
    /// Category used by `adapt` when no `--category` is passed.
    #[serde(default)]
    pub content_size_category: ContentSizeCategory,

    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for AdaptConfig {
    fn default() -> Self {
        Self {
            content_size_category: ContentSizeCategory::default(),
            pretty: default_pretty(),
        }
    }
}

impl AdaptConfig {
    pub const KEYS: &'static [&'static str] = &["content_size_category", "pretty"];

    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "content_size_category" => Some(self.content_size_category.to_string()),
            "pretty" => Some(self.pretty.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "content_size_category" => {
                self.content_size_category = value.parse()?;
            }
            "pretty" => {
                self.pretty = value.parse().map_err(|_| {
                    TextAdaptError::Config(format!("pretty must be true or false, got '{}'", value))
                })?;
            }
            _ => return Err(TextAdaptError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }
}

/// The directory `config.json` lives in.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "textadapt", "textadapt")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TextAdaptError::Config("could not determine config directory".into()))
}
