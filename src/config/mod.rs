//! Configuration for blogscope
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/blogscope/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod feed;
mod logging;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use feed::{FeedConfig, FileFeed};
pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default theme name
pub const DEFAULT_THEME: &str = "dark";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "dark", "light", "nord", "dracula"
    pub theme: String,

    /// Feed reveal behaviour and loading delay
    pub feed: FeedConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Problems found while loading (values clamped, unknown names).
    /// Reported once logging is up.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            feed: FeedConfig::default(),
            logging: LoggingConfig::default(),
            warnings: Vec::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,

    /// Optional [feed] section
    pub feed: Option<FileFeed>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/blogscope/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("blogscope").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load configuration: env > file > defaults
    ///
    /// A config file that exists but cannot be read or parsed is an error;
    /// silently falling back to defaults would hide the problem.
    pub fn load() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::read_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Read and parse a config file; a missing file yields defaults
    fn read_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse_file_config(&contents)
                .with_context(|| format!("Invalid config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => {
                Err(e).with_context(|| format!("Cannot read config file {}", path.display()))
            }
        }
    }

    pub(crate) fn parse_file_config(contents: &str) -> Result<FileConfig> {
        toml::from_str(contents).context("Failed to parse TOML")
    }

    /// Merge file config with environment overrides
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let mut warnings = Vec::new();

        // Theme: env > file > default
        let theme = env("BLOGSCOPE_THEME")
            .or(file.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        let mut feed = FeedConfig::from_file(file.feed, &mut warnings);

        // Loading delay: env > file (handy for recordings and quick demos)
        if let Some(raw) = env("BLOGSCOPE_LOADING_DELAY_MS") {
            match raw.parse() {
                Ok(ms) => feed.loading_delay_ms = ms,
                Err(_) => warnings.push(format!(
                    "BLOGSCOPE_LOADING_DELAY_MS={:?} is not a number of milliseconds; using {}",
                    raw, feed.loading_delay_ms
                )),
            }
        }

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            theme,
            feed,
            logging,
            warnings,
        }
    }
}
