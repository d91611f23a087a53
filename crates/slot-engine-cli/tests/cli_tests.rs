//! Integration tests for the `slots` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the generate, windows,
//! and stats subcommands through the actual binary, including stdin/stdout
//! piping, file I/O, and error reporting. Every invocation pins `--now` so
//! the fixtures stay deterministic.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

const NOW: &str = "2023-12-12T06:30:00";

/// Helper: path to the availability.json fixture (7-day, 08:00-16:00 daily).
fn availability_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/availability.json")
}

/// Helper: path to the booked.json fixture (one day, booking 10:00-11:30).
fn booked_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/booked.json")
}

/// Helper: read the availability.json fixture as a string.
fn availability_json() -> String {
    std::fs::read_to_string(availability_path()).expect("availability.json fixture must exist")
}

// ─────────────────────────────────────────────────────────────────────────────
// Generate subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn generate_stdin_to_stdout() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["generate", "--now", NOW])
        .write_stdin(availability_json())
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-12-12"))
        .stdout(predicate::str::contains("2023-12-18"));
}

#[test]
fn generate_produces_eight_slots_per_day() {
    let output = Command::cargo_bin("slots")
        .unwrap()
        .args(["generate", "-i", availability_path(), "--now", NOW])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let slots: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let days = slots.as_object().unwrap();
    assert_eq!(days.len(), 7);
    for day_slots in days.values() {
        assert_eq!(day_slots.as_array().unwrap().len(), 8);
    }
    assert_eq!(
        days["2023-12-12"][0]["from"],
        serde_json::json!("2023-12-12T08:00:00")
    );
}

#[test]
fn generate_excludes_booked_slots() {
    let output = Command::cargo_bin("slots")
        .unwrap()
        .args(["generate", "-i", booked_path(), "--now", NOW])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    // The 10:00-11:30 booking knocks out the 10:00 and 11:00 slots.
    let slots: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let day = slots["2023-12-12"].as_array().unwrap();
    assert_eq!(day.len(), 6);
    for slot in day {
        assert_ne!(slot["from"], serde_json::json!("2023-12-12T10:00:00"));
        assert_ne!(slot["from"], serde_json::json!("2023-12-12T11:00:00"));
    }
}

#[test]
fn generate_file_to_file() {
    let output_path = "/tmp/slots-test-generate-output.json";
    let _ = std::fs::remove_file(output_path);

    Command::cargo_bin("slots")
        .unwrap()
        .args([
            "generate",
            "-i",
            availability_path(),
            "-o",
            output_path,
            "--now",
            NOW,
        ])
        .assert()
        .success();

    let written = std::fs::read_to_string(output_path).expect("output file must exist");
    assert!(written.contains("2023-12-12"));
    let _ = std::fs::remove_file(output_path);
}

#[test]
fn generate_compact_is_single_line() {
    let output = Command::cargo_bin("slots")
        .unwrap()
        .args(["generate", "-i", availability_path(), "--now", NOW, "--compact"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.trim_end().lines().count(), 1);
}

#[test]
fn generate_accepts_now_without_seconds() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["generate", "-i", availability_path(), "--now", "2023-12-12T06:30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-12-12"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Windows subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn windows_lists_anchored_occurrences() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["windows", "-i", availability_path(), "--now", NOW])
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-12-12 08:00 .. 2023-12-12 16:00"))
        .stdout(predicate::str::contains("Tue"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Stats subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn stats_reports_counts_and_date_range() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["stats", "-i", availability_path(), "--now", NOW])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dates:       7"))
        .stdout(predicate::str::contains("Slots:       56"))
        .stdout(predicate::str::contains("First date:  2023-12-12"))
        .stdout(predicate::str::contains("Last date:   2023-12-18"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Error reporting
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn malformed_configuration_fails_with_context() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["generate", "--now", NOW])
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to parse availability configuration",
        ));
}

#[test]
fn unknown_timezone_fails_when_now_must_be_derived() {
    let config = availability_json().replace("Europe/Helsinki", "Atlantis/Sunken_City");

    Command::cargo_bin("slots")
        .unwrap()
        .arg("generate")
        .write_stdin(config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timezone"));
}

#[test]
fn invalid_now_fails_with_expected_format() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["generate", "-i", availability_path(), "--now", "12.12.2023"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM-DDTHH:MM"));
}

#[test]
fn missing_input_file_fails_with_path() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["generate", "-i", "/nonexistent/availability.json", "--now", NOW])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/availability.json"));
}
