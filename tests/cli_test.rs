//! CLI smoke tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_config_prints_paths() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("creatorlink").unwrap();
    cmd.env("CREATORLINK_CONFIG_DIR", temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config directory:"))
        .stdout(predicate::str::contains("Remembered email: (none)"));
}

#[test]
fn test_help_mentions_subcommands() {
    let mut cmd = Command::cargo_bin("creatorlink").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("creatorlink").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("creatorlink"));
}
