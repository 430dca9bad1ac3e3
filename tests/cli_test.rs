//! Integration tests for the parlance CLI
//!
//! These tests run the actual binary to verify:
//! - Text arguments, --file, and stdin inputs all detect
//! - Text and JSON output formats
//! - Exit behavior on bad input

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Get the path to the parlance binary
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_parlance"))
}

/// Run parlance with args and return (stdout, stderr, exit_code)
fn run_detect(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(binary_path())
        .args(args)
        .output()
        .expect("Failed to execute parlance binary");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Run parlance with `input` piped on stdin
fn run_detect_stdin(args: &[&str], input: &str) -> (String, String, i32) {
    let mut child = Command::new(binary_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn parlance binary");

    child
        .stdin
        .as_mut()
        .expect("child should have piped stdin")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for binary");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn test_detects_text_argument() {
    let (stdout, stderr, exit_code) = run_detect(&["Ceci n'est pas une pipe"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(
        stdout.starts_with("fr\t"),
        "expected French detection, got: {}",
        stdout
    );
    assert!(stdout.contains("French"), "got: {}", stdout);
}

#[test]
fn test_json_output_is_valid() {
    let (stdout, stderr, exit_code) = run_detect(&[
        "--format",
        "json",
        "We hold these truths to be self-evident.",
    ]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);

    let report: serde_json::Value =
        serde_json::from_str(&stdout).expect("JSON output should be valid");
    assert_eq!(report["language"].as_str(), Some("en"));
    assert_eq!(report["name"].as_str(), Some("English"));
    assert_eq!(report["self_name"].as_str(), Some("English"));

    let confidence = report["confidence"].as_f64().expect("numeric confidence");
    assert!(confidence > 0.5 && confidence <= 1.0, "got {}", confidence);
}

#[test]
fn test_detects_file_input() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("letter.txt");
    std::fs::write(
        &path,
        "Tous les êtres humains naissent libres et égaux",
    )
    .expect("Failed to write fixture file");

    let (stdout, stderr, exit_code) = run_detect(&["--file", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.starts_with("fr\t"), "got: {}", stdout);
}

#[test]
fn test_missing_file_fails() {
    let (_stdout, stderr, exit_code) = run_detect(&["--file", "/nonexistent/letter.txt"]);

    assert_ne!(exit_code, 0);
    assert!(
        stderr.contains("Failed to open file"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_detects_stdin() {
    let (stdout, stderr, exit_code) = run_detect_stdin(
        &[],
        "Всі люди народжуються вільними і рівними у своїй гідності та правах",
    );

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.starts_with("uk\t"), "got: {}", stdout);
    assert!(stdout.contains("Ukrainian"), "got: {}", stdout);
}

#[test]
fn test_empty_stdin_is_undetermined() {
    let (stdout, stderr, exit_code) = run_detect_stdin(&[], "");

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.starts_with("und\t"), "got: {}", stdout);
    assert!(stdout.contains("Unknown language"), "got: {}", stdout);
}

#[test]
fn test_file_flag_conflicts_with_text() {
    let (_stdout, _stderr, exit_code) = run_detect(&["--file", "x.txt", "some text"]);
    assert_ne!(exit_code, 0);
}

#[test]
fn test_version_flag() {
    let (stdout, stderr, exit_code) = run_detect(&["--version"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("parlance"), "got: {}", stdout);
}
