//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library. Commands
//! that hit the network (pack open) are exercised only up to their offline
//! failure paths.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command with a temporary data directory
fn cli_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("holocron").expect("Failed to find holocron binary");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

/// Start a one-thread stub card API on a random port; returns its base URL.
///
/// Serves small listings (3 films, 6 people, 4 starships) plus per-record
/// detail pages, enough to fill either pack configuration.
fn spawn_stub_api() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind stub API port");
    let port = listener.local_addr().unwrap().port();

    std::thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            serve_one(&mut stream, port);
        }
    });

    format!("http://127.0.0.1:{}/api", port)
}

fn serve_one(stream: &mut TcpStream, port: u16) {
    let Ok(peer) = stream.try_clone() else { return };
    let mut reader = BufReader::new(peer);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    // Drain headers up to the blank line
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) if line == "\r\n" || line == "\n" => break,
            Ok(_) => {}
            Err(_) => return,
        }
    }

    let path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let (status, body) = match route(path, port) {
        Some(body) => ("200 OK", body),
        None => ("404 Not Found", "{}".to_string()),
    };

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

fn route(path: &str, port: u16) -> Option<String> {
    let sections = [("films", 3u32), ("people", 6), ("starships", 4)];

    for (section, count) in sections {
        if path == format!("/api/{}/", section) {
            let results: Vec<_> = (1..=count).map(|id| record(section, id, port)).collect();
            return Some(
                json!({
                    "count": count,
                    "next": null,
                    "previous": null,
                    "results": results,
                })
                .to_string(),
            );
        }
        for id in 1..=count {
            if path == format!("/api/{}/{}/", section, id) {
                return Some(record(section, id, port).to_string());
            }
        }
    }
    None
}

fn record(section: &str, id: u32, port: u16) -> serde_json::Value {
    let url = format!("http://127.0.0.1:{}/api/{}/{}/", port, section, id);
    match section {
        "films" => json!({ "title": format!("Episode {}", id), "episode_id": id, "url": url }),
        "people" => json!({ "name": format!("Person {}", id), "url": url }),
        _ => json!({ "name": format!("Ship {}", id), "url": url }),
    }
}

// ============================================================================
// Info Command Tests
// ============================================================================

#[test]
fn test_info_command() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Holocron"))
        .stdout(predicate::str::contains("Points: 100"))
        .stdout(predicate::str::contains("Album: 0 / 124 (0%)"));
}

#[test]
fn test_info_shows_data_directory() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data directory:"));
}

#[test]
fn test_info_lists_all_sections() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Films: 0 / 6"))
        .stdout(predicate::str::contains("Characters: 0 / 82"))
        .stdout(predicate::str::contains("Starships: 0 / 36"));
}

// ============================================================================
// Points Command Tests
// ============================================================================

#[test]
fn test_points_starts_at_100() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("points")
        .assert()
        .success()
        .stdout(predicate::str::contains("Points: 100"));
}

#[test]
fn test_points_persist_across_invocations() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir).arg("points").assert().success();
    cli_cmd(&data_dir)
        .arg("points")
        .assert()
        .success()
        .stdout(predicate::str::contains("Points: 100"));
}

// ============================================================================
// Album Command Tests
// ============================================================================

#[test]
fn test_album_show_empty() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["album", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Films: 0 collected"))
        .stdout(predicate::str::contains("Characters: 0 collected"))
        .stdout(predicate::str::contains("Starships: 0 collected"));
}

#[test]
fn test_album_show_single_section() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["album", "show", "--section", "people"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Characters: 0 collected"))
        .stdout(predicate::str::contains("Films").not());
}

#[test]
fn test_album_show_invalid_section() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["album", "show", "--section", "planets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid section"));
}

#[test]
fn test_album_reset_requires_confirmation() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["album", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IRREVERSIBLE"))
        .stdout(predicate::str::contains("--yes"));
}

#[test]
fn test_album_reset_with_confirmation() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["album", "reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Album reset. Points: 100"));
}

// ============================================================================
// Pack Command Tests
// ============================================================================

#[test]
fn test_pack_list_shows_all_packs() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["pack", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("25 points each"))
        .stdout(predicate::str::contains("Pack #1: available"))
        .stdout(predicate::str::contains("Pack #4: available"));
}

#[test]
fn test_pack_list_shows_configurations() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["pack", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config A: 1 film, 3 characters, 1 starship"))
        .stdout(predicate::str::contains("Config B: 3 characters, 2 starships"));
}

#[test]
fn test_pack_status_idle() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["pack", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Active pack: none"))
        .stdout(predicate::str::contains("Cooldown: none"));
}

#[test]
fn test_pack_open_invalid_number() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["pack", "open", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pack"));
}

#[test]
fn test_pack_open_zero_rejected() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["pack", "open", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Must be 1-4"));
}

#[test]
fn test_pack_open_keep_all_finishes_the_pack() {
    let data_dir = TempDir::new().unwrap();
    let api = spawn_stub_api();

    cli_cmd(&data_dir)
        .args(["pack", "open", "1", "--keep-all", "--api-url", &api])
        .assert()
        .success()
        .stdout(predicate::str::contains("revealed"))
        .stdout(predicate::str::contains("Kept 5 of 5 cards"))
        .stdout(predicate::str::contains("Points: 75"));

    // The reveal is over: no pack may be left active, only the cooldown runs
    cli_cmd(&data_dir)
        .args(["pack", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Active pack: none"))
        .stdout(predicate::str::contains("Cooldown: none").not());
}

#[test]
fn test_pack_open_blocked_during_cooldown() {
    let data_dir = TempDir::new().unwrap();
    let api = spawn_stub_api();

    cli_cmd(&data_dir)
        .args(["pack", "open", "1", "--keep-all", "--api-url", &api])
        .assert()
        .success();

    cli_cmd(&data_dir)
        .args(["pack", "open", "2", "--keep-all", "--api-url", &api])
        .assert()
        .failure()
        .stderr(predicate::str::contains("locked"));
}

// ============================================================================
// General CLI Tests
// ============================================================================

#[test]
fn test_help_output() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("collectible card album"));
}

#[test]
fn test_version_output() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}
