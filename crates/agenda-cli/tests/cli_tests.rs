//! Integration tests for the `agenda` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the check, list,
//! suggest, and free subcommands through the actual binary, including
//! stdin piping, file input, and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the events.json fixture.
fn events_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/events.json")
}

// ─────────────────────────────────────────────────────────────────────────────
// Check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_reports_per_event_status() {
    // "Call" overlaps "Team Meeting"; everything else is admitted.
    Command::cargo_bin("agenda")
        .unwrap()
        .args(["check", "-i", events_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Event added successfully!").count(3))
        .stdout(predicate::str::contains(
            "Conflict with event: Team Meeting (2026-03-01 10:00:00 - 2026-03-01 11:00:00)",
        ));
}

#[test]
fn check_from_stdin() {
    let input = r#"[
        {"title":"A","start":"2026-03-01T10:00:00","end":"2026-03-01T11:00:00"},
        {"title":"B","start":"2026-03-01T11:00:00","end":"2026-03-01T12:00:00"}
    ]"#;

    // Boundary touch at 11:00 is not a conflict.
    Command::cargo_bin("agenda")
        .unwrap()
        .arg("check")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Event added successfully!").count(2))
        .stdout(predicate::str::contains("Conflict").not());
}

// ─────────────────────────────────────────────────────────────────────────────
// List subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn list_outputs_sorted_json() {
    let output = Command::cargo_bin("agenda")
        .unwrap()
        .args(["list", "-i", events_json_path()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let records: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let titles: Vec<&str> = records
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();

    // "Call" conflicts and is dropped; the rest come out in start order.
    assert_eq!(titles, ["Review", "Team Meeting", "Lunch"]);
}

#[test]
fn list_reports_dropped_conflicts_on_stderr() {
    Command::cargo_bin("agenda")
        .unwrap()
        .args(["list", "-i", events_json_path()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping 'Call'"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Suggest subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn suggest_returns_reference_time_when_gap_exists() {
    // 09:20-10:00 is a 40-minute gap; a 30-minute slot fits at 09:20.
    Command::cargo_bin("agenda")
        .unwrap()
        .args([
            "suggest",
            "-i",
            events_json_path(),
            "--duration",
            "30",
            "--after",
            "2026-03-01T09:20:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-03-01T09:20:00"));
}

#[test]
fn suggest_skips_busy_stretch() {
    // After 09:00: Review runs 09:00-09:20, then the gap fits a 40-minute slot.
    Command::cargo_bin("agenda")
        .unwrap()
        .args([
            "suggest",
            "-i",
            events_json_path(),
            "--duration",
            "40",
            "--after",
            "2026-03-01T09:00:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-03-01T09:20:00"));
}

#[test]
fn suggest_on_empty_input_echoes_after() {
    Command::cargo_bin("agenda")
        .unwrap()
        .args(["suggest", "--duration", "30", "--after", "2026-03-01T09:00:00"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-03-01T09:00:00"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Free subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn free_lists_window_gaps_as_json() {
    let input = r#"[
        {"title":"A","start":"2026-03-01T10:00:00","end":"2026-03-01T11:00:00"}
    ]"#;

    let output = Command::cargo_bin("agenda")
        .unwrap()
        .args([
            "free",
            "--from",
            "2026-03-01T08:00:00",
            "--to",
            "2026-03-01T17:00:00",
        ])
        .write_stdin(input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let slots: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let slots = slots.as_array().unwrap();
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0]["duration_minutes"], 120);
    assert_eq!(slots[1]["duration_minutes"], 360);
}

// ─────────────────────────────────────────────────────────────────────────────
// Error handling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn malformed_json_fails_with_context() {
    Command::cargo_bin("agenda")
        .unwrap()
        .arg("check")
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse event list JSON"));
}

#[test]
fn missing_input_file_fails_with_context() {
    Command::cargo_bin("agenda")
        .unwrap()
        .args(["list", "-i", "/nonexistent/events.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn bad_timestamp_argument_is_rejected() {
    Command::cargo_bin("agenda")
        .unwrap()
        .args(["suggest", "--duration", "30", "--after", "yesterday"])
        .write_stdin("[]")
        .assert()
        .failure();
}
