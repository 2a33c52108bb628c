//! End-to-end CLI tests for chatlens.
//!
//! These tests run the actual binary with various arguments and check the
//! output.
//!
//! # Test Categories
//!
//! - **Basic functionality**: parsing and report rendering via CLI
//! - **Output formats**: text, JSON, CSV
//! - **Filters**: date and sender filtering
//! - **Error handling**: proper messages and exit codes for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with test exports.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let chat = "12/1/23, 10:05 AM - Alice: Hello
world
12/1/23, 10:06 AM - Bob created group \"Trip\"
12/1/23, 10:07 AM - Bob: Hi Alice!
12/2/23, 9:15 AM - Alice: coffee coffee coffee
12/2/23, 9:16 AM - Bob: <Media omitted>";
    fs::write(dir.path().join("chat.txt"), chat).unwrap();

    fs::write(dir.path().join("notes.txt"), "just some notes\nno timestamps").unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();

    dir
}

fn chatlens() -> Command {
    Command::cargo_bin("chatlens").expect("binary exists")
}

// ============================================================================
// Basic functionality
// ============================================================================

#[test]
fn test_text_report_to_stdout() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["--date-order", "month-first"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chat report"))
        .stdout(predicate::str::contains("Messages:       5 (4 user, 1 system)"))
        .stdout(predicate::str::contains("coffee"))
        .stdout(predicate::str::contains("Alice"));
}

#[test]
fn test_status_goes_to_stderr() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["-d", "month-first"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Found 5 messages"))
        .stdout(predicate::str::contains("Found 5 messages").not());
}

#[test]
fn test_empty_export_is_not_an_error() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("empty.txt"))
        .args(["-d", "day-first"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Messages:       0"));
}

#[test]
fn test_skip_system_flag() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["-d", "month-first", "--skip-system"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Messages:       4 (4 user, 0 system)"));
}

#[test]
fn test_top_flag_limits_tables() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["-d", "month-first", "--top", "1", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"word\": \"coffee\""))
        .stdout(predicate::str::contains("\"word\": \"hello\"").not());
}

// ============================================================================
// Output formats
// ============================================================================

#[test]
fn test_json_format() {
    let dir = setup_fixtures();

    let output = chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["-d", "month-first", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["summary"]["total_messages"], 5);
    assert_eq!(value["summary"]["system_messages"], 1);
    assert_eq!(value["summary"]["media_messages"], 1);
}

#[test]
fn test_csv_format() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["-d", "month-first", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Participant;Messages;Share;Words;Media"))
        .stdout(predicate::str::contains("Alice;2;"))
        .stdout(predicate::str::contains("Bob;2;"));
}

#[test]
fn test_output_file() {
    let dir = setup_fixtures();
    let out_path = dir.path().join("report.json");

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["-d", "month-first", "--format", "json", "-o"])
        .arg(&out_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Report saved to"));

    let content = fs::read_to_string(&out_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["summary"]["total_messages"], 5);
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn test_user_filter() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["-d", "month-first", "--user", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Messages:       2 (2 user, 0 system)"));
}

#[test]
fn test_date_filters() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["-d", "month-first", "--after", "2023-12-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Messages:       2"));

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["-d", "month-first", "--before", "2023-12-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Messages:       3"));
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn test_missing_file_fails() {
    chatlens()
        .arg("no_such_file.txt")
        .args(["-d", "day-first"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_unrecognizable_export_fails() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("notes.txt"))
        .args(["-d", "day-first"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no recognizable message lines"));
}

#[test]
fn test_date_order_is_required() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--date-order"));
}

#[test]
fn test_unknown_date_order_rejected() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["-d", "year-first"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("year-first"));
}

#[test]
fn test_invalid_filter_date_rejected() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["-d", "month-first", "--after", "01-12-2023"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"))
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}
