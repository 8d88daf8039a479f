//! Configuration management for todomvc
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DOUBLE_CLICK_DEFAULT_MS, DOUBLE_CLICK_MAX_MS, DOUBLE_CLICK_MIN_MS,
    NEW_TODO_PLACEHOLDER,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (clicks and double-clicks)
    pub mouse_enabled: bool,
    /// Glyph theme for checkboxes and controls
    pub icon_theme: IconTheme,
    /// Placeholder shown in the empty new-todo field
    pub placeholder: String,
    /// Maximum delay between the two clicks of a double-click
    pub double_click_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Minimum level: error, warn, info, debug or trace
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            icon_theme: IconTheme::default(),
            placeholder: NEW_TODO_PLACEHOLDER.to_string(),
            double_click_ms: DOUBLE_CLICK_DEFAULT_MS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level filter, `None` if the configured name is unknown
    pub fn level_filter(&self) -> Option<log::LevelFilter> {
        self.level.parse().ok()
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        let xdg_config = dirs::config_dir()?.join(APP_DIR_NAME).join("config.toml");
        xdg_config.exists().then_some(xdg_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(DOUBLE_CLICK_MIN_MS..=DOUBLE_CLICK_MAX_MS).contains(&self.ui.double_click_ms) {
            anyhow::bail!(
                "double_click_ms must be between {} and {}, got {}",
                DOUBLE_CLICK_MIN_MS,
                DOUBLE_CLICK_MAX_MS,
                self.ui.double_click_ms
            );
        }

        if self.logging.level_filter().is_none() {
            anyhow::bail!("Invalid logging level '{}'", self.logging.level);
        }

        Ok(())
    }
}
