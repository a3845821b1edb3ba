use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use crate::export::{
    file,
    types::{DialogLabels, ExportError, PromptResponse},
};
use crate::draw::PixelBuffer;

/// Abstraction over the dialog that asks for a file name.
pub trait NamePrompt {
    fn prompt(&self, labels: &DialogLabels) -> Result<PromptResponse, ExportError>;
}

/// Abstraction over writing the encoded image to disk.
pub trait ImageSaver {
    fn save(&self, image: &PixelBuffer, path: &Path) -> Result<(), ExportError>;
}

/// Abstraction over telling the platform's media index about a new image.
pub trait MediaIndex {
    fn notify(&self, path: &Path) -> Result<(), ExportError>;
}

/// Bundle of dependencies used by the export pipeline. Each component can be mocked in tests.
pub struct ExportDependencies {
    pub prompt: Box<dyn NamePrompt>,
    pub saver: Box<dyn ImageSaver>,
    pub media_index: Box<dyn MediaIndex>,
}

impl Default for ExportDependencies {
    fn default() -> Self {
        Self {
            prompt: Box::new(TerminalPrompt),
            saver: Box::new(PngFileSaver),
            media_index: Box::new(LogMediaIndex),
        }
    }
}

/// Prompt that answers with a name chosen up front.
pub struct FixedNamePrompt(pub String);

impl NamePrompt for FixedNamePrompt {
    fn prompt(&self, labels: &DialogLabels) -> Result<PromptResponse, ExportError> {
        log::debug!("'{}' answered with preset name '{}'", labels.title, self.0);
        Ok(PromptResponse::Confirmed(self.0.clone()))
    }
}

/// Prompt that asks on the terminal: a line of input confirms, end of input cancels.
pub struct TerminalPrompt;

impl NamePrompt for TerminalPrompt {
    fn prompt(&self, labels: &DialogLabels) -> Result<PromptResponse, ExportError> {
        let mut stderr = io::stderr().lock();
        write!(
            stderr,
            "{}\n[{}: type a name and press Enter] [{}: Ctrl+D] > ",
            labels.title, labels.confirm_label, labels.cancel_label
        )
        .and_then(|_| stderr.flush())
        .map_err(|e| ExportError::Prompt(e.to_string()))?;

        read_response(&mut io::stdin().lock())
    }
}

/// Interprets one line of prompt input.
pub(crate) fn read_response<R: BufRead>(reader: &mut R) -> Result<PromptResponse, ExportError> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| ExportError::Prompt(e.to_string()))?;
    if read == 0 {
        return Ok(PromptResponse::Cancelled);
    }
    Ok(PromptResponse::Confirmed(
        line.trim_end_matches(['\r', '\n']).to_string(),
    ))
}

struct PngFileSaver;

impl ImageSaver for PngFileSaver {
    fn save(&self, image: &PixelBuffer, path: &Path) -> Result<(), ExportError> {
        file::write_png(image, path)
    }
}

/// Media index that only records the new file in the log.
pub struct LogMediaIndex;

impl MediaIndex for LogMediaIndex {
    fn notify(&self, path: &Path) -> Result<(), ExportError> {
        log::info!("New image available: {}", path.display());
        Ok(())
    }
}

/// Media index that runs an external command with the file path appended.
pub struct CommandMediaIndex {
    command: String,
}

impl CommandMediaIndex {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl MediaIndex for CommandMediaIndex {
    fn notify(&self, path: &Path) -> Result<(), ExportError> {
        let mut parts = self.command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| ExportError::MediaIndex("empty media scan command".to_string()))?;

        let status = Command::new(program)
            .args(parts)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .map_err(|e| ExportError::MediaIndex(format!("failed to run '{program}': {e}")))?;

        if !status.success() {
            return Err(ExportError::MediaIndex(format!(
                "'{}' exited with {}",
                self.command, status
            )));
        }
        log::debug!("Media scan command '{}' succeeded", self.command);
        Ok(())
    }
}
