//! Configuration management for overlay-kit
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_DIALOG_TITLE, DIALOG_DEFAULT_HEIGHT_PERCENT,
    DIALOG_DEFAULT_WIDTH_PERCENT, DIALOG_MAX_PERCENT, DIALOG_MIN_PERCENT,
};
use crate::dialog::{DialogOptions, DismissalConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Log levels accepted in `[logging] level`
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub dialog: DialogConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (needed for backdrop clicks)
    pub mouse_enabled: bool,
    /// Dialog width as a percentage of the terminal
    pub width_percent: u16,
    /// Dialog height as a percentage of the terminal
    pub height_percent: u16,
    /// Interval between forced redraws; pending dialog mounts and unmounts complete after each draw
    pub tick_rate_ms: u64,
}

/// Dialog behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    pub title: String,
    pub closable: bool,
    pub close_on_esc: bool,
    pub close_on_backdrop_click: bool,
    /// Show the ✕ control in the dialog corner
    pub close_button: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Minimum level written to the log file
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            width_percent: DIALOG_DEFAULT_WIDTH_PERCENT,
            height_percent: DIALOG_DEFAULT_HEIGHT_PERCENT,
            tick_rate_ms: 100,
        }
    }
}

impl Default for DialogConfig {
    fn default() -> Self {
        let dismissal = DismissalConfig::default();
        Self {
            title: DEFAULT_DIALOG_TITLE.to_string(),
            closable: dismissal.closable,
            close_on_esc: dismissal.close_on_esc,
            close_on_backdrop_click: dismissal.close_on_backdrop_click,
            close_button: true,
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

impl DialogConfig {
    pub fn dismissal(&self) -> DismissalConfig {
        DismissalConfig {
            closable: self.closable,
            close_on_esc: self.close_on_esc,
            close_on_backdrop_click: self.close_on_backdrop_click,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
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
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width_percent", self.ui.width_percent), ("height_percent", self.ui.height_percent)] {
            if !(DIALOG_MIN_PERCENT..=DIALOG_MAX_PERCENT).contains(&value) {
                anyhow::bail!(
                    "{} must be between {} and {}, got {}",
                    name,
                    DIALOG_MIN_PERCENT,
                    DIALOG_MAX_PERCENT,
                    value
                );
            }
        }

        if self.ui.tick_rate_ms == 0 || self.ui.tick_rate_ms > 1000 {
            anyhow::bail!("tick_rate_ms must be between 1 and 1000, got {}", self.ui.tick_rate_ms);
        }

        if self.dialog.title.trim().is_empty() {
            anyhow::bail!("dialog title cannot be empty");
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            anyhow::bail!(
                "Invalid logging level '{}'. Expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            );
        }

        Ok(())
    }

    /// Dialog options for the demo dialog
    pub fn dialog_options(&self) -> DialogOptions {
        DialogOptions::new()
            .title(&self.dialog.title)
            .dismissal(self.dialog.dismissal())
            .close_button(self.dialog.close_button)
            .size(self.ui.width_percent, self.ui.height_percent)
    }

    /// The configured level as a `log` filter
    pub fn log_level(&self) -> log::LevelFilter {
        self.logging.level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# overlay-kit Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
