use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const STROKE_SCRIPT: &str = r#"[
    { "action": "down", "id": 0, "x": 10, "y": 10 },
    { "action": "move", "pointers": [{ "id": 0, "x": 40, "y": 10 }] },
    { "action": "move", "pointers": [{ "id": 0, "x": 70, "y": 30 }] },
    { "action": "up", "id": 0 }
]"#;

fn fingerpaint_cmd() -> Command {
    Command::cargo_bin("fingerpaint").expect("binary exists")
}

fn write_script(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("touches.json");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn fingerpaint_help_prints_usage() {
    fingerpaint_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Multi-touch finger painting with smoothed strokes",
        ));
}

#[test]
fn no_script_prints_usage() {
    let temp = TempDir::new().unwrap();
    fingerpaint_cmd()
        .args(["--config"])
        .arg(temp.path().join("config.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("--script touches.json"));
}

#[test]
fn replay_without_export_reports_event_count() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), STROKE_SCRIPT);

    fingerpaint_cmd()
        .arg("--script")
        .arg(&script)
        .arg("--config")
        .arg(temp.path().join("config.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Replayed 4 touch events"));
}

#[test]
fn export_with_name_writes_png() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), STROKE_SCRIPT);
    let pictures = temp.path().join("pictures");

    fingerpaint_cmd()
        .arg("--script")
        .arg(&script)
        .args(["--export", "--name", "doodle", "--width", "120", "--height", "80"])
        .arg("--output-dir")
        .arg(&pictures)
        .arg("--config")
        .arg(temp.path().join("config.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));

    let saved = pictures.join("GnomeArt").join("doodle.png");
    let bytes = std::fs::read(&saved).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn closed_prompt_cancels_export() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), STROKE_SCRIPT);
    let pictures = temp.path().join("pictures");

    fingerpaint_cmd()
        .arg("--script")
        .arg(&script)
        .arg("--export")
        .arg("--output-dir")
        .arg(&pictures)
        .arg("--config")
        .arg(temp.path().join("config.toml"))
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Export cancelled"))
        .stderr(predicate::str::contains("Name your gnomepiece"));

    assert!(!pictures.join("GnomeArt").exists());
}

#[test]
fn version_reports_package_version() {
    fingerpaint_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn zero_sized_surface_export_fails_without_leaving_a_file() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), STROKE_SCRIPT);
    let pictures = temp.path().join("pictures");

    fingerpaint_cmd()
        .arg("--script")
        .arg(&script)
        .args(["--export", "--name", "z", "--width", "0", "--height", "0"])
        .arg("--output-dir")
        .arg(&pictures)
        .arg("--config")
        .arg(temp.path().join("config.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to export"));

    assert!(!pictures.join("GnomeArt").join("z.png").exists());
}

#[test]
fn invalid_name_fails_visibly() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), STROKE_SCRIPT);

    fingerpaint_cmd()
        .arg("--script")
        .arg(&script)
        .args(["--export", "--name", "../escape"])
        .arg("--output-dir")
        .arg(temp.path())
        .arg("--config")
        .arg(temp.path().join("config.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid file name"));
}

#[test]
fn missing_script_is_an_error() {
    let temp = TempDir::new().unwrap();
    fingerpaint_cmd()
        .arg("--script")
        .arg(temp.path().join("absent.json"))
        .arg("--config")
        .arg(temp.path().join("config.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read touch script"));
}

#[test]
fn init_config_writes_example_once() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("fingerpaint").join("config.toml");

    fingerpaint_cmd()
        .arg("--init-config")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));
    assert!(config.exists());

    fingerpaint_cmd()
        .arg("--init-config")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
