//! Configuration file support for fingerpaint.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/fingerpaint/config.toml`. Settings include stroke defaults,
//! touch smoothing tolerance, and image export preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, ExportConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "black"
/// default_width = 5.0
/// touch_tolerance = 10.0
///
/// [export]
/// folder_name = "GnomeArt"
/// dialog_title = "Name your gnomepiece"
/// confirm_label = "Save"
/// cancel_label = "Cancel"
/// background_color = "white"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Stroke defaults (color, width, touch tolerance)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Image export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_width`: 1.0 - 50.0
    /// - `touch_tolerance`: 0.0 - 100.0
    /// - `folder_name`: must be a single, non-empty path component
    fn validate_and_clamp(&mut self) {
        // Width: 1.0 - 50.0
        if !(1.0..=50.0).contains(&self.drawing.default_width) {
            log::warn!(
                "Invalid default_width {:.1}, clamping to 1.0-50.0 range",
                self.drawing.default_width
            );
            self.drawing.default_width = if self.drawing.default_width.is_nan() {
                crate::draw::DEFAULT_STROKE_WIDTH
            } else {
                self.drawing.default_width.clamp(1.0, 50.0)
            };
        }

        // Tolerance: 0.0 - 100.0
        if !(0.0..=100.0).contains(&self.drawing.touch_tolerance) {
            log::warn!(
                "Invalid touch_tolerance {:.1}, clamping to 0.0-100.0 range",
                self.drawing.touch_tolerance
            );
            self.drawing.touch_tolerance = if self.drawing.touch_tolerance.is_nan() {
                crate::input::TOUCH_TOLERANCE
            } else {
                self.drawing.touch_tolerance.clamp(0.0, 100.0)
            };
        }

        // Folder name must stay inside the pictures directory
        let folder = self.export.folder_name.trim();
        if folder.is_empty() || folder == ".." || folder.contains(['/', '\\']) {
            log::warn!(
                "Invalid export folder_name '{}', falling back to 'GnomeArt'",
                self.export.folder_name
            );
            self.export.folder_name = ExportConfig::default().folder_name;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/fingerpaint/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("fingerpaint");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file
    /// does not exist. All loaded values are validated and clamped.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to the default location.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Serializes the config to TOML and writes it to `config_path`,
    /// creating the parent directory if needed.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to `config_path`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
