//! Exporting the drawing as a PNG image.
//!
//! This module handles:
//! - Asking the user for a file name through a confirm/cancel dialog
//! - Flattening the drawing onto its view background
//! - Choosing a non-clobbering file name inside the export folder
//! - Writing the PNG and notifying the media index

pub mod compose;
pub mod dependencies;
pub mod file;
pub mod pipeline;
pub mod types;

#[cfg(test)]
mod tests;

pub use compose::compose_for_export;
pub use dependencies::{
    CommandMediaIndex, ExportDependencies, FixedNamePrompt, ImageSaver, LogMediaIndex, MediaIndex,
    NamePrompt, TerminalPrompt,
};
pub use pipeline::export_drawing;
pub use types::{DialogLabels, ExportError, ExportOutcome, ExportRequest, PromptResponse};
