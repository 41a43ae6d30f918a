//! XDG Base Directory Support
//!
//! Implements XDG Base Directory specification for config file
//! resolution on Linux/Unix systems. Only the config directory is
//! needed: the index lives in memory and nothing persists between
//! runs.

use std::env;
use std::fs;
use std::path::PathBuf;

/// XDG directory structure for gramdex
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl XdgDirs {
    /// Create new XDG directory structure with proper resolution order
    ///
    /// Priority order (highest to lowest):
    /// 1. Explicit GRAMDEX_CONFIG_DIR env var
    /// 2. XDG_CONFIG_HOME environment variable
    /// 3. XDG default (~/.config)
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Resolve config directory
    fn resolve_config_dir() -> PathBuf {
        if let Ok(dir) = env::var("GRAMDEX_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("gramdex");
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("gramdex")
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        // GRAMDEX_CONFIG_FILE is an explicit override
        if let Ok(file) = env::var("GRAMDEX_CONFIG_FILE") {
            return PathBuf::from(file);
        }

        self.config_dir.join("config.toml")
    }

    /// Ensure the config directory exists
    pub fn ensure_dirs_exist(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.config_dir)
    }

    /// Log resolved paths
    pub fn log_paths(&self) {
        tracing::debug!("Config dir: {:?}", self.config_dir);
        tracing::debug!("Config file: {:?}", self.config_file());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
