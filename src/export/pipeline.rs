use std::io;

use crate::draw::PixelBuffer;
use crate::export::{
    compose::compose_for_export,
    dependencies::ExportDependencies,
    file,
    types::{ExportError, ExportOutcome, ExportRequest, PromptResponse},
};

/// How many times a name taken between lookup and write is retried.
const MAX_SAVE_ATTEMPTS: usize = 16;

/// Runs one export: ask for a name, flatten, write, announce.
///
/// `drawing` is the committed buffer snapshot. Failures to write are returned
/// to the caller; a failing media index only logs a warning because the file
/// is already on disk by then.
pub fn export_drawing(
    drawing: &PixelBuffer,
    request: &ExportRequest,
    dependencies: &ExportDependencies,
) -> Result<ExportOutcome, ExportError> {
    log::info!(
        "Starting export of {}x{} drawing",
        drawing.width(),
        drawing.height()
    );

    if drawing.width() == 0 || drawing.height() == 0 {
        return Err(ExportError::EmptyDrawing {
            width: drawing.width(),
            height: drawing.height(),
        });
    }

    // Step 1: Ask for a file name
    let name = match dependencies.prompt.prompt(&request.labels)? {
        PromptResponse::Confirmed(name) => name,
        PromptResponse::Cancelled => {
            log::info!("Export cancelled");
            return Ok(ExportOutcome::Cancelled);
        }
    };
    let stem = file::sanitize_file_stem(&name)?;

    // Step 2: Flatten onto the view background
    let image = compose_for_export(drawing, request.background)?;

    // Step 3: Pick a path that does not overwrite anything and save
    let directory = file::ensure_directory_exists(&request.target_directory())?;
    let mut attempts = 1;
    let path = loop {
        let candidate = file::unique_file_path(&directory, &stem);
        log::info!("Saving drawing to: {}", candidate.display());
        match dependencies.saver.save(&image, &candidate) {
            Ok(()) => break candidate,
            Err(ExportError::Io(err))
                if err.kind() == io::ErrorKind::AlreadyExists && attempts < MAX_SAVE_ATTEMPTS =>
            {
                log::debug!("{} was taken before writing, retrying", candidate.display());
                attempts += 1;
            }
            Err(err) => return Err(err),
        }
    };
    log::info!("Drawing saved successfully: {}", path.display());

    // Step 4: Let the media index know
    if let Err(err) = dependencies.media_index.notify(&path) {
        log::warn!("{}", err);
    }

    Ok(ExportOutcome::Saved(path))
}
