//! Configuration management for Portalist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{CONFIG_GENERATED, FOLDER_PANE_DEFAULT_WIDTH, FOLDER_PANE_MAX_WIDTH, FOLDER_PANE_MIN_WIDTH};
use crate::router::Route;
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub api: ApiConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Route to open on startup, e.g. "/social", "/modules" or "/about"
    pub default_route: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Folder pane width in columns (module browser)
    pub folder_pane_width: u16,
}

/// Portal API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the portal REST API
    pub base_url: String,
    /// Class whose folders and modules the module browser shows
    pub class_id: i64,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Date format for post timestamps
    pub date_format: String,
    /// Time format for post timestamps
    pub time_format: String,
    /// Show an attachment marker on posts that carry an image
    pub show_image_markers: bool,
    /// Show comment counts on feed cards
    pub show_comment_counts: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_route: "/social".to_string(),
            mouse_enabled: true,
            folder_pane_width: FOLDER_PANE_DEFAULT_WIDTH,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000/api".to_string(),
            class_id: 1,
            timeout_seconds: 30,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::PORTAL_DATE_FORMAT.to_string(),
            time_format: "%H:%M".to_string(),
            show_image_markers: true,
            show_comment_counts: true,
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
        let current_dir_config = PathBuf::from("portalist.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("portalist").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.folder_pane_width < FOLDER_PANE_MIN_WIDTH || self.ui.folder_pane_width > FOLDER_PANE_MAX_WIDTH {
            anyhow::bail!(
                "folder_pane_width must be between {} and {} columns, got {}",
                FOLDER_PANE_MIN_WIDTH,
                FOLDER_PANE_MAX_WIDTH,
                self.ui.folder_pane_width
            );
        }

        if Route::parse(&self.ui.default_route).is_none() {
            anyhow::bail!("Invalid default_route '{}'", self.ui.default_route);
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            anyhow::bail!("api.base_url must be an http(s) URL, got '{}'", self.api.base_url);
        }

        if self.api.class_id <= 0 {
            anyhow::bail!("api.class_id must be positive, got {}", self.api.class_id);
        }

        if self.api.timeout_seconds == 0 || self.api.timeout_seconds > 300 {
            anyhow::bail!("api.timeout_seconds must be between 1 and 300");
        }

        // Validate date/time formats
        if let Err(e) = chrono::NaiveDate::parse_from_str("2025-01-01", &self.display.date_format) {
            anyhow::bail!("Invalid date_format '{}': {}", self.display.date_format, e);
        }

        if let Err(e) = chrono::NaiveTime::parse_from_str("12:00", &self.display.time_format) {
            anyhow::bail!("Invalid time_format '{}': {}", self.display.time_format, e);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Portalist Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::PORTAL_DATE_FORMAT)
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
            .map(|dir| dir.join("portalist"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
