//! Configuration file handling.
//!
//! The config lives at `~/.config/tmix/config.toml` (platform config dir).
//! `TMIX_CONFIG` overrides the path. Every field has a default, so a missing
//! file or a partial file both load cleanly.

mod migrate;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::pipeline::homoglyph::MAX_PERCENT;
use crate::pipeline::Mode;
use crate::theme::ThemeName;

pub use migrate::{migrate_config, MigrateResult};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "TMIX_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: DefaultsConfig,
    pub ui: UiConfig,
    pub clipboard: ClipboardConfig,
}

/// Starting values for a transform when nothing has been saved yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Chance of substituting each covered character (0-100)
    pub percent: u8,
    /// Words between emoji, 0 disables
    pub interval: usize,
    /// Starting tab
    pub mode: Mode,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            percent: 30,
            interval: 0,
            mode: Mode::Simple,
        }
    }
}

/// Interactive screen settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: ThemeName,
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::Dark,
            tick_rate_ms: 250,
        }
    }
}

/// Clipboard behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Copy every successful result without being asked
    pub copy_on_generate: bool,
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("tmix").join("config.toml"))
    }

    /// Load from the default path. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Parse from TOML text, clamping out-of-range values.
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.defaults.percent = config.defaults.percent.min(MAX_PERCENT);
        config.ui.tick_rate_ms = config.ui.tick_rate_ms.max(16);
        Ok(config)
    }

    /// Write to the default path, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }
}
