//! Binary-level smoke tests
//!
//! These exercise the CLI surface without any network access: help output,
//! settings initialization, and the configuration display. The config
//! directory is isolated per test through FINBRIEF_CONFIG_DIR.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finbrief(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finbrief").unwrap();
    cmd.env("FINBRIEF_CONFIG_DIR", config_dir.path());
    cmd.env_remove("SIMPLEFIN_ACCESS_URL");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    finbrief(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("send"))
        .stdout(predicate::str::contains("preview"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn no_subcommand_prints_hint() {
    let temp = TempDir::new().unwrap();
    finbrief(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("finbrief --help"));
}

#[test]
fn init_writes_settings_file() {
    let temp = TempDir::new().unwrap();

    finbrief(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default settings"));

    assert!(temp.path().join("settings.json").exists());

    // A second init leaves the existing file alone
    finbrief(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn config_shows_unset_values() {
    let temp = TempDir::new().unwrap();
    finbrief(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Access URL configured: false"))
        .stdout(predicate::str::contains("(unset)"));
}

#[test]
fn send_without_access_url_fails() {
    let temp = TempDir::new().unwrap();
    finbrief(&temp)
        .args(["send", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SimpleFIN access URL is not configured"));
}
