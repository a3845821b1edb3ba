//! Data types for image export.

use crate::config::ExportConfig;
use crate::draw::{Color, RenderError};
use std::path::PathBuf;
use thiserror::Error;

/// Text shown by the file name dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLabels {
    /// Dialog title
    pub title: String,
    /// Confirm button label
    pub confirm_label: String,
    /// Cancel button label
    pub cancel_label: String,
}

/// What the user did with the file name dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    /// Confirmed with the entered name (may be empty)
    Confirmed(String),
    /// Dismissed via the cancel button
    Cancelled,
}

/// Everything the export pipeline needs besides the pixels.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// Directory that holds the export folder
    pub pictures_dir: PathBuf,
    /// Folder created under `pictures_dir`
    pub folder_name: String,
    /// File name dialog text
    pub labels: DialogLabels,
    /// Background painted behind the drawing; `None` falls back to red
    pub background: Option<Color>,
}

impl ExportRequest {
    /// Builds a request from config, resolving the platform pictures directory
    /// unless the config overrides it.
    pub fn from_config(config: &ExportConfig) -> Result<Self, ExportError> {
        let pictures_dir = match &config.pictures_dir {
            Some(dir) => super::file::expand_tilde(&dir.to_string_lossy()),
            None => dirs::picture_dir()
                .or_else(|| dirs::home_dir().map(|home| home.join("Pictures")))
                .ok_or(ExportError::NoPicturesDir)?,
        };

        Ok(Self {
            pictures_dir,
            folder_name: config.folder_name.clone(),
            labels: DialogLabels {
                title: config.dialog_title.clone(),
                confirm_label: config.confirm_label.clone(),
                cancel_label: config.cancel_label.clone(),
            },
            background: config.background(),
        })
    }

    /// Directory exported files land in.
    pub fn target_directory(&self) -> PathBuf {
        self.pictures_dir.join(&self.folder_name)
    }
}

/// Result of an export request that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The image was written to this path
    Saved(PathBuf),
    /// The user cancelled the dialog; nothing was written
    Cancelled,
}

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Invalid file name '{0}'")]
    InvalidName(String),

    #[error("Nothing to export: drawing is {width}x{height}")]
    EmptyDrawing { width: u32, height: u32 },

    #[error("Could not determine a pictures directory")]
    NoPicturesDir,

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to render image: {0}")]
    Render(#[from] RenderError),

    #[error("File name prompt failed: {0}")]
    Prompt(String),

    #[error("Media index notification failed: {0}")]
    MediaIndex(String),
}
