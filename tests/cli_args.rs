//! Tests for CLI argument parsing against the built binary.
//!
//! Every case fails before the terminal is touched, so no TTY is needed.

use std::process::Command;

fn triplist_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_triplist"))
}

#[test]
fn help_lists_options() {
    let output = triplist_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for option in ["--config", "--base-url", "--region", "--log-file", "--log-level"] {
        assert!(stdout.contains(option), "missing {} in help: {}", option, stdout);
    }
}

#[test]
fn unknown_region_is_rejected() {
    let output = triplist_cmd()
        .args(["--region", "asia"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("asia"), "unexpected stderr: {}", stderr);
}

#[test]
fn invalid_base_url_exits_with_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = triplist_cmd()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["--base-url", "ftp://trips.test"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config validation failed"), "unexpected stderr: {}", stderr);
}

#[test]
fn malformed_config_file_exits_with_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[api\n").unwrap();

    let output = triplist_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"), "unexpected stderr: {}", stderr);
}
