//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Drawing-related settings.
///
/// Controls the stroke appearance when the surface first opens. The host can
/// change color and width at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default stroke color - either a named color (red, green, blue, yellow, white, black)
    /// or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke width in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_width")]
    pub default_width: f64,

    /// Minimum finger movement, in either axis, before a stroke is extended
    /// (valid range: 0.0 - 100.0)
    #[serde(default = "default_touch_tolerance")]
    pub touch_tolerance: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
            touch_tolerance: default_touch_tolerance(),
        }
    }
}

/// Image export settings.
///
/// Controls where exported drawings are written and what the file name
/// dialog shows.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Folder created under the pictures directory to hold exported images
    #[serde(default = "default_folder_name")]
    pub folder_name: String,

    /// Title of the file name dialog
    #[serde(default = "default_dialog_title")]
    pub dialog_title: String,

    /// Label of the dialog's confirm button
    #[serde(default = "default_confirm_label")]
    pub confirm_label: String,

    /// Label of the dialog's cancel button
    #[serde(default = "default_cancel_label")]
    pub cancel_label: String,

    /// Background painted behind the drawing in exported images.
    /// `"none"` exports over an opaque red background.
    #[serde(default = "default_background_color")]
    pub background_color: ColorSpec,

    /// Overrides the pictures directory (defaults to the platform pictures folder)
    #[serde(default)]
    pub pictures_dir: Option<PathBuf>,

    /// Command run with the saved file path as its only argument so a media
    /// index can pick the new image up
    #[serde(default)]
    pub media_scan_command: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            folder_name: default_folder_name(),
            dialog_title: default_dialog_title(),
            confirm_label: default_confirm_label(),
            cancel_label: default_cancel_label(),
            background_color: default_background_color(),
            pictures_dir: None,
            media_scan_command: None,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_width() -> f64 {
    crate::draw::DEFAULT_STROKE_WIDTH
}

fn default_touch_tolerance() -> f64 {
    crate::input::TOUCH_TOLERANCE
}

fn default_folder_name() -> String {
    "GnomeArt".to_string()
}

fn default_dialog_title() -> String {
    "Name your gnomepiece".to_string()
}

fn default_confirm_label() -> String {
    "Save".to_string()
}

fn default_cancel_label() -> String {
    "Cancel".to_string()
}

fn default_background_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

impl ExportConfig {
    /// Resolved export background; `"none"` disables the configured background.
    pub fn background(&self) -> Option<crate::draw::Color> {
        match &self.background_color {
            ColorSpec::Name(name) if name.eq_ignore_ascii_case("none") => None,
            spec => Some(spec.to_color()),
        }
    }
}
