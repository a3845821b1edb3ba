//! File naming and writing for exported drawings.

use super::types::ExportError;
use crate::draw::PixelBuffer;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Template used when the user confirms the dialog without typing a name.
pub const DEFAULT_NAME_TEMPLATE: &str = "doodle_%Y-%m-%d_%H%M%S";

/// Extension of every exported file.
pub const EXPORT_EXTENSION: &str = "png";

/// Generate a file stem from a chrono template and the current time.
pub fn generate_file_stem(template: &str) -> String {
    Local::now().format(template).to_string()
}

/// Turns user input into a safe file stem.
///
/// Surrounding whitespace and a trailing `.png` are dropped, and an empty
/// name becomes a timestamped default. Names that could escape the export
/// folder are rejected.
pub fn sanitize_file_stem(input: &str) -> Result<String, ExportError> {
    let trimmed = input.trim();
    let stem = match trimmed.len().checked_sub(EXPORT_EXTENSION.len() + 1) {
        Some(cut)
            if trimmed.is_char_boundary(cut)
                && trimmed[cut..].eq_ignore_ascii_case(".png") =>
        {
            trimmed[..cut].trim_end()
        }
        _ => trimmed,
    };

    if stem.is_empty() {
        return Ok(generate_file_stem(DEFAULT_NAME_TEMPLATE));
    }

    if stem == "." || stem == ".." || stem.contains(['/', '\\', '\0']) {
        return Err(ExportError::InvalidName(input.to_string()));
    }

    Ok(stem.to_string())
}

/// Ensure the export directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// First free path among `stem.png`, `stem(1).png`, `stem(2).png`, ...
pub fn unique_file_path(directory: &Path, stem: &str) -> PathBuf {
    let candidate = directory.join(format!("{stem}.{EXPORT_EXTENSION}"));
    if !candidate.exists() {
        return candidate;
    }

    (1u32..)
        .map(|n| directory.join(format!("{stem}({n}).{EXPORT_EXTENSION}")))
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

/// Encode `image` as PNG and write it to `path`.
///
/// Encoding finishes before the file is created. The file is opened with
/// `create_new`, so an existing file fails with `AlreadyExists` and is left
/// untouched.
pub fn write_png(image: &PixelBuffer, path: &Path) -> Result<(), ExportError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(ExportError::EmptyDrawing {
            width: image.width(),
            height: image.height(),
        });
    }

    let mut encoded = Vec::new();
    image.write_png(&mut encoded)?;

    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    if let Err(err) = file.write_all(&encoded).and_then(|_| file.sync_all()) {
        drop(file);
        if let Err(remove_err) = fs::remove_file(path) {
            log::warn!(
                "Failed to remove partial export {}: {}",
                path.display(),
                remove_err
            );
        }
        return Err(err.into());
    }

    log::debug!("File written: {} bytes", encoded.len());
    Ok(())
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
