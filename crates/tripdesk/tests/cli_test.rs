//! Integration tests for the `tripdesk` binary.
//!
//! These run the scriptable subcommands against seeded temp data
//! directories — the interactive shell needs a TTY and is exercised
//! through the core crate's unit tests instead.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

use tripdesk_core::report::REPORT_FILE;
use tripdesk_core::store::{
    FLIGHTS_FILE, HOTELS_FILE, LAST_ID_FILE, RESERVATIONS_FILE, USERS_FILE,
};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `tripdesk` binary with env isolation.
fn tripdesk_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("tripdesk");
    cmd.env("HOME", "/tmp/tripdesk-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/tripdesk-test-nonexistent")
        .env("XDG_DATA_HOME", "/tmp/tripdesk-test-nonexistent")
        .env_remove("TRIPDESK_DATA_DIR")
        .env_remove("TRIPDESK_OUTPUT");
    cmd
}

/// A data directory with one flight, one hotel, and two reservations
/// (one Approved against the flight, one Pending against the hotel).
fn seeded_data_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(FLIGHTS_FILE),
        "100|Lisbon|Porto|2026-09-01 08:00|2026-09-01 09:00|4\n",
    )
    .unwrap();
    std::fs::write(dir.path().join(HOTELS_FILE), "7|Hotel Mar|Faro|2\n").unwrap();
    std::fs::write(
        dir.path().join(RESERVATIONS_FILE),
        r#"[
  {"id": 1001, "username": "ana", "target": {"kind": "flight", "id": 100}, "status": "Approved"},
  {"id": 1002, "username": "bruno", "target": {"kind": "hotel", "id": 7}, "status": "Pending"}
]
"#,
    )
    .unwrap();
    std::fs::write(dir.path().join(LAST_ID_FILE), "1002\n").unwrap();
    dir
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    tripdesk_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("flights")
            .and(predicate::str::contains("hotels"))
            .and(predicate::str::contains("reservations"))
            .and(predicate::str::contains("report")),
    );
}

#[test]
fn test_version_flag() {
    tripdesk_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tripdesk"));
}

#[test]
fn test_invalid_subcommand() {
    let output = tripdesk_cmd().arg("frobnicate").output().unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("unrecognized") || text.contains("invalid") || text.contains("frobnicate"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_invalid_output_format() {
    tripdesk_cmd()
        .args(["--output", "xml", "flights", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("possible values").or(predicate::str::contains("invalid")));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    tripdesk_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    tripdesk_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Listings ────────────────────────────────────────────────────────

#[test]
fn test_flights_list_table() {
    let dir = seeded_data_dir();
    tripdesk_cmd()
        .args(["--data-dir", dir.path().to_str().unwrap(), "flights", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lisbon").and(predicate::str::contains("Porto")));
}

#[test]
fn test_flights_list_json_shows_advertised_availability() {
    let dir = seeded_data_dir();
    let output = tripdesk_cmd()
        .args([
            "--data-dir",
            dir.path().to_str().unwrap(),
            "--output",
            "json",
            "flights",
            "list",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let flights: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("flights list should emit valid JSON");
    let flight = &flights[0];
    assert_eq!(flight["number"], 100);
    assert_eq!(flight["seats"], 4);
    // 4 seats, one Approved booking -> 3 advertised.
    assert_eq!(flight["available"], 3);
}

#[test]
fn test_hotels_list_plain() {
    let dir = seeded_data_dir();
    tripdesk_cmd()
        .args([
            "--data-dir",
            dir.path().to_str().unwrap(),
            "--output",
            "plain",
            "hotels",
            "list",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("7\n"));
}

#[test]
fn test_empty_data_dir_lists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    tripdesk_cmd()
        .args(["--data-dir", dir.path().to_str().unwrap(), "flights", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No flights on file."));
}

// ── Reservation filters ─────────────────────────────────────────────

#[test]
fn test_reservations_list_filter_by_status() {
    let dir = seeded_data_dir();
    tripdesk_cmd()
        .args([
            "--data-dir",
            dir.path().to_str().unwrap(),
            "reservations",
            "list",
            "--status",
            "pending",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("bruno").and(predicate::str::contains("ana").not()));
}

#[test]
fn test_reservations_list_filter_by_user() {
    let dir = seeded_data_dir();
    tripdesk_cmd()
        .args([
            "--data-dir",
            dir.path().to_str().unwrap(),
            "--output",
            "plain",
            "reservations",
            "list",
            "--user",
            "ana",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("1001\n"));
}

// ── Report ──────────────────────────────────────────────────────────

#[test]
fn test_report_writes_file() {
    let dir = seeded_data_dir();
    tripdesk_cmd()
        .args(["--data-dir", dir.path().to_str().unwrap(), "report"])
        .assert()
        .success();

    let report = std::fs::read_to_string(dir.path().join(REPORT_FILE)).unwrap();
    assert!(report.contains("1001 | ana | Flight 100 | Approved"));
    assert!(report.contains("1002 | bruno | Hotel 7 | Pending"));
}

// ── Data errors ─────────────────────────────────────────────────────

#[test]
fn test_malformed_flights_file_names_the_line() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(FLIGHTS_FILE), "garbage line\n").unwrap();

    tripdesk_cmd()
        .args(["--data-dir", dir.path().to_str().unwrap(), "flights", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(FLIGHTS_FILE));
}

#[test]
fn test_corrupt_users_json_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(USERS_FILE), "{not json").unwrap();

    tripdesk_cmd()
        .args(["--data-dir", dir.path().to_str().unwrap(), "flights", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(USERS_FILE));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_show_without_config_file() {
    // Falls back to defaults when no config file exists.
    tripdesk_cmd().args(["config", "show"]).assert().success();
}

/// A config home carrying the given `config.toml`.
fn config_home_with(contents: &str) -> TempDir {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join("tripdesk");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), contents).unwrap();
    home
}

#[test]
fn test_config_default_output_applies_without_flag() {
    let dir = seeded_data_dir();
    let config_home = config_home_with("[defaults]\noutput = \"json\"\n");

    let output = tripdesk_cmd()
        .env("XDG_CONFIG_HOME", config_home.path())
        .args(["--data-dir", dir.path().to_str().unwrap(), "flights", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let flights: serde_json::Value = serde_json::from_slice(&output.stdout)
        .expect("defaults.output = json should switch the listing to JSON");
    assert_eq!(flights[0]["number"], 100);
}

#[test]
fn test_output_flag_beats_config_default() {
    let dir = seeded_data_dir();
    let config_home = config_home_with("[defaults]\noutput = \"json\"\n");

    tripdesk_cmd()
        .env("XDG_CONFIG_HOME", config_home.path())
        .args([
            "--data-dir",
            dir.path().to_str().unwrap(),
            "--output",
            "plain",
            "flights",
            "list",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("100\n"));
}
