use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use tempfile::TempDir;

use super::{
    dependencies::{
        CommandMediaIndex, ExportDependencies, FixedNamePrompt, ImageSaver, LogMediaIndex,
        MediaIndex, NamePrompt, read_response,
    },
    file,
    pipeline::export_drawing,
    types::{DialogLabels, ExportError, ExportOutcome, ExportRequest, PromptResponse},
};
use crate::config::ExportConfig;
use crate::draw::{PixelBuffer, WHITE};
use crate::input::{DoodleState, TouchEvent, TouchPoint};

struct MockPrompt {
    response: PromptResponse,
    seen: Arc<Mutex<Vec<DialogLabels>>>,
}

impl NamePrompt for MockPrompt {
    fn prompt(&self, labels: &DialogLabels) -> Result<PromptResponse, ExportError> {
        self.seen.lock().unwrap().push(labels.clone());
        Ok(self.response.clone())
    }
}

struct FailingSaver {
    calls: Arc<Mutex<usize>>,
}

impl ImageSaver for FailingSaver {
    fn save(&self, _image: &PixelBuffer, _path: &Path) -> Result<(), ExportError> {
        *self.calls.lock().unwrap() += 1;
        Err(ExportError::Io(std::io::Error::other("disk full")))
    }
}

/// Saver that loses the race for the first name it is given.
struct RacingSaver {
    attempts: Arc<Mutex<Vec<PathBuf>>>,
}

impl ImageSaver for RacingSaver {
    fn save(&self, image: &PixelBuffer, path: &Path) -> Result<(), ExportError> {
        let mut attempts = self.attempts.lock().unwrap();
        attempts.push(path.to_path_buf());
        if attempts.len() == 1 {
            fs::write(path, b"someone else").unwrap();
        }
        file::write_png(image, path)
    }
}

#[derive(Clone, Default)]
struct RecordingIndex {
    paths: Arc<Mutex<Vec<PathBuf>>>,
    fail: bool,
}

impl MediaIndex for RecordingIndex {
    fn notify(&self, path: &Path) -> Result<(), ExportError> {
        self.paths.lock().unwrap().push(path.to_path_buf());
        if self.fail {
            Err(ExportError::MediaIndex("scanner offline".to_string()))
        } else {
            Ok(())
        }
    }
}

fn request_in(dir: &Path) -> ExportRequest {
    let config = ExportConfig {
        pictures_dir: Some(dir.to_path_buf()),
        ..ExportConfig::default()
    };
    ExportRequest::from_config(&config).unwrap()
}

fn dependencies_with(prompt: impl NamePrompt + 'static, index: RecordingIndex) -> ExportDependencies {
    ExportDependencies {
        prompt: Box::new(prompt),
        media_index: Box::new(index),
        ..ExportDependencies::default()
    }
}

fn drawn_snapshot() -> PixelBuffer {
    let mut state = DoodleState::default();
    state.resize(40, 30).unwrap();
    state.handle_touch(&TouchEvent::Down { id: 0, x: 5.0, y: 15.0 });
    state.handle_touch(&TouchEvent::Move {
        pointers: vec![TouchPoint::new(0, 35.0, 15.0)],
    });
    state.handle_touch(&TouchEvent::Up { id: 0 });
    state.snapshot().unwrap()
}

#[test]
fn request_from_config_copies_labels() {
    let temp = TempDir::new().unwrap();
    let request = request_in(temp.path());
    assert_eq!(request.labels.title, "Name your gnomepiece");
    assert_eq!(request.labels.confirm_label, "Save");
    assert_eq!(request.labels.cancel_label, "Cancel");
    assert_eq!(request.background, Some(WHITE));
    assert_eq!(request.target_directory(), temp.path().join("GnomeArt"));
}

#[test]
fn export_writes_png_into_created_folder() {
    let temp = TempDir::new().unwrap();
    let request = request_in(temp.path());
    let index = RecordingIndex::default();
    let deps = dependencies_with(FixedNamePrompt("gnome".to_string()), index.clone());

    let outcome = export_drawing(&drawn_snapshot(), &request, &deps).unwrap();

    let ExportOutcome::Saved(path) = outcome else {
        panic!("expected a saved file");
    };
    assert_eq!(path.file_name().unwrap(), "gnome.png");
    assert!(path.parent().unwrap().ends_with("GnomeArt"));

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = cairo::ImageSurface::create_from_png(&mut Cursor::new(bytes)).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (40, 30));
    assert_eq!(*index.paths.lock().unwrap(), vec![path]);
}

#[test]
fn repeated_names_never_overwrite() {
    let temp = TempDir::new().unwrap();
    let request = request_in(temp.path());
    let deps = dependencies_with(FixedNamePrompt("art".to_string()), RecordingIndex::default());
    let snapshot = drawn_snapshot();

    let first = export_drawing(&snapshot, &request, &deps).unwrap();
    let second = export_drawing(&snapshot, &request, &deps).unwrap();
    let third = export_drawing(&snapshot, &request, &deps).unwrap();

    let names: Vec<_> = [first, second, third]
        .into_iter()
        .map(|outcome| match outcome {
            ExportOutcome::Saved(path) => path.file_name().unwrap().to_string_lossy().into_owned(),
            ExportOutcome::Cancelled => panic!("unexpected cancel"),
        })
        .collect();
    assert_eq!(names, vec!["art.png", "art(1).png", "art(2).png"]);
}

#[test]
fn cancelled_prompt_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let request = request_in(temp.path());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let prompt = MockPrompt {
        response: PromptResponse::Cancelled,
        seen: Arc::clone(&seen),
    };
    let index = RecordingIndex::default();
    let deps = dependencies_with(prompt, index.clone());

    let outcome = export_drawing(&drawn_snapshot(), &request, &deps).unwrap();

    assert_eq!(outcome, ExportOutcome::Cancelled);
    assert!(!request.target_directory().exists());
    assert!(index.paths.lock().unwrap().is_empty());
    assert_eq!(seen.lock().unwrap()[0].cancel_label, "Cancel");
}

#[test]
fn save_failure_is_reported() {
    let temp = TempDir::new().unwrap();
    let request = request_in(temp.path());
    let calls = Arc::new(Mutex::new(0));
    let index = RecordingIndex::default();
    let deps = ExportDependencies {
        prompt: Box::new(FixedNamePrompt("art".to_string())),
        saver: Box::new(FailingSaver {
            calls: Arc::clone(&calls),
        }),
        media_index: Box::new(index.clone()),
    };

    let err = export_drawing(&drawn_snapshot(), &request, &deps).unwrap_err();

    assert!(matches!(err, ExportError::Io(_)));
    assert_eq!(*calls.lock().unwrap(), 1);
    assert!(index.paths.lock().unwrap().is_empty());
}

#[test]
fn name_taken_during_save_moves_to_next_suffix() {
    let temp = TempDir::new().unwrap();
    let request = request_in(temp.path());
    let attempts = Arc::new(Mutex::new(Vec::new()));
    let deps = ExportDependencies {
        prompt: Box::new(FixedNamePrompt("art".to_string())),
        saver: Box::new(RacingSaver {
            attempts: Arc::clone(&attempts),
        }),
        media_index: Box::new(RecordingIndex::default()),
    };

    let outcome = export_drawing(&drawn_snapshot(), &request, &deps).unwrap();

    let ExportOutcome::Saved(path) = outcome else {
        panic!("expected a saved file");
    };
    assert_eq!(path.file_name().unwrap(), "art(1).png");
    assert_eq!(attempts.lock().unwrap().len(), 2);
    let first = path.with_file_name("art.png");
    assert_eq!(fs::read(first).unwrap(), b"someone else");
}

#[test]
fn empty_drawing_is_rejected_before_prompting() {
    let temp = TempDir::new().unwrap();
    let request = request_in(temp.path());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let prompt = MockPrompt {
        response: PromptResponse::Confirmed("z".to_string()),
        seen: Arc::clone(&seen),
    };
    let deps = dependencies_with(prompt, RecordingIndex::default());

    let mut state = DoodleState::default();
    state.resize(0, 0).unwrap();
    let err = export_drawing(&state.snapshot().unwrap(), &request, &deps).unwrap_err();

    assert!(matches!(err, ExportError::EmptyDrawing { .. }));
    assert!(seen.lock().unwrap().is_empty());
    assert!(!request.target_directory().exists());
    assert!(!request.target_directory().join("z.png").exists());
}

#[test]
fn media_index_failure_keeps_saved_file() {
    let temp = TempDir::new().unwrap();
    let request = request_in(temp.path());
    let index = RecordingIndex {
        fail: true,
        ..RecordingIndex::default()
    };
    let deps = dependencies_with(FixedNamePrompt("art".to_string()), index);

    let outcome = export_drawing(&drawn_snapshot(), &request, &deps).unwrap();
    let ExportOutcome::Saved(path) = outcome else {
        panic!("expected a saved file");
    };
    assert!(path.exists());
}

#[test]
fn invalid_name_is_rejected_before_writing() {
    let temp = TempDir::new().unwrap();
    let request = request_in(temp.path());
    let deps = dependencies_with(
        FixedNamePrompt("../outside".to_string()),
        RecordingIndex::default(),
    );

    let err = export_drawing(&drawn_snapshot(), &request, &deps).unwrap_err();
    assert!(matches!(err, ExportError::InvalidName(_)));
    assert!(!request.target_directory().exists());
}

#[test]
fn prompt_input_parsing() {
    let mut confirmed = Cursor::new("sunset\r\n");
    assert_eq!(
        read_response(&mut confirmed).unwrap(),
        PromptResponse::Confirmed("sunset".to_string())
    );

    let mut empty_line = Cursor::new("\n");
    assert_eq!(
        read_response(&mut empty_line).unwrap(),
        PromptResponse::Confirmed(String::new())
    );

    let mut eof = Cursor::new("");
    assert_eq!(read_response(&mut eof).unwrap(), PromptResponse::Cancelled);
}

#[cfg(unix)]
#[test]
fn command_media_index_reports_exit_status() {
    let temp = TempDir::new().unwrap();
    let marker = temp.path().join("scanned.png");

    CommandMediaIndex::new("touch").notify(&marker).unwrap();
    assert!(marker.exists());

    let err = CommandMediaIndex::new("false").notify(&marker).unwrap_err();
    assert!(matches!(err, ExportError::MediaIndex(_)));
    assert!(CommandMediaIndex::new("  ").notify(&marker).is_err());
}

#[test]
fn log_media_index_always_succeeds() {
    assert!(LogMediaIndex.notify(Path::new("/tmp/none.png")).is_ok());
}
