//! Configuration management for gramdex.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{GramdexError, Result};
use crate::core::indexer::DEFAULT_STOP_CHARS;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub indexing: IndexingConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
}

/// Indexing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexingConfig {
    /// Characters stripped from filenames before lower-casing.
    /// Each character of the string is a stop character.
    #[serde(default = "default_stop_chars")]
    pub stop_chars: String,
}

/// Lookup configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    /// Default number of paths to return per lookup
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Maximum paths per lookup
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,

    /// Maximum gram length in characters
    #[serde(default = "default_max_gram_length")]
    pub max_gram_length: usize,
}

// Default value functions
fn default_stop_chars() -> String {
    DEFAULT_STOP_CHARS.to_string()
}

fn default_limit() -> usize {
    10
}

fn default_max_limit() -> usize {
    100
}

fn default_max_gram_length() -> usize {
    255
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            stop_chars: default_stop_chars(),
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            max_gram_length: default_max_gram_length(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| GramdexError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Create default configuration
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. GRAMDEX_CONFIG env var
    /// 2. XDG config file (~/.config/gramdex/config.toml)
    /// 3. Legacy ./gramdex.toml (for backward compatibility)
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("GRAMDEX_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("gramdex.toml").exists() {
                Self::from_file("gramdex.toml")?
            } else {
                Self::default()
            }
        };

        // Override with environment variables
        config.merge_env();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Indexing configuration
        if let Ok(stop_chars) = env::var("GRAMDEX_STOP_CHARS") {
            self.indexing.stop_chars = stop_chars;
        }

        // Lookup configuration
        if let Ok(default_limit) = env::var("GRAMDEX_DEFAULT_LIMIT") {
            if let Ok(limit) = default_limit.parse() {
                self.lookup.default_limit = limit;
            }
        }
        if let Ok(max_limit) = env::var("GRAMDEX_MAX_LIMIT") {
            if let Ok(limit) = max_limit.parse() {
                self.lookup.max_limit = limit;
            }
        }
        if let Ok(max_len) = env::var("GRAMDEX_MAX_GRAM_LENGTH") {
            if let Ok(len) = max_len.parse() {
                self.lookup.max_gram_length = len;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.lookup.default_limit == 0 {
            return Err(GramdexError::ConfigError(
                "Default limit must be non-zero".to_string(),
            ));
        }

        if self.lookup.default_limit > self.lookup.max_limit {
            return Err(GramdexError::ConfigError(
                "Default limit cannot exceed max limit".to_string(),
            ));
        }

        if self.lookup.max_gram_length == 0 {
            return Err(GramdexError::ConfigError(
                "Max gram length must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Stop chars: {:?}", self.indexing.stop_chars);
        tracing::info!("  Default limit: {}", self.lookup.default_limit);
        tracing::info!("  Max limit: {}", self.lookup.max_limit);
        tracing::info!("  Max gram length: {}", self.lookup.max_gram_length);
    }
}
