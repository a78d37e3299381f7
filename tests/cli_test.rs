//! Integration tests for the `gdj` binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A `gdj` invocation isolated from the caller's environment, with its resume
/// log inside `temp`.
fn gdj(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("gdj"));
    for var in [
        "GDJ_INTEGRATION_BRANCH",
        "GDJ_INTEGRATION2_BRANCH",
        "GDJ_RELEASE_BRANCH",
        "GDJ_REMOTE",
        "GDJ_LOG_FILE",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd.env("NO_COLOR", "1")
        .arg("--log-file")
        .arg(log_path(temp));
    cmd
}

fn log_path(temp: &TempDir) -> PathBuf {
    temp.path().join("gdj_activity")
}

fn git(dir: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap();
    assert!(status.success(), "git {:?} failed", args);
}

/// A fresh repository with one commit on `branch`.
fn setup_repo(branch: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    git(dir, &["init", "-q"]);
    git(dir, &["checkout", "-q", "-b", branch]);
    git(dir, &["config", "user.email", "dj@example.com"]);
    git(dir, &["config", "user.name", "DJ"]);
    fs::write(dir.join("README"), "hello\n").unwrap();
    git(dir, &["add", "README"]);
    git(dir, &["commit", "-q", "-m", "initial"]);
    temp
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    gdj(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_DESCRIPTION")))
        .stdout(predicate::str::contains("integrate2"));
    Ok(())
}

#[test]
fn cli_without_verb_prints_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    gdj(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    gdj(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_verb() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    gdj(&temp).arg("bogus").assert().failure();
    Ok(())
}

#[test]
fn cli_i_requires_branch() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    gdj(&temp).arg("i").assert().failure();
    Ok(())
}

#[test]
fn continue_without_log_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    gdj(&temp)
        .arg("continue")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No pending commands"));
    Ok(())
}

#[test]
fn pending_lists_log() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(log_path(&temp), "git push origin staging\ngit checkout feature\n")?;

    gdj(&temp)
        .arg("pending")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. git push origin staging"))
        .stdout(predicate::str::contains("2. git checkout feature"));
    Ok(())
}

#[test]
fn pending_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(log_path(&temp), "git checkout feature\n")?;

    let output = gdj(&temp).args(["pending", "--json"]).output()?;
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed["commands"][0], "git checkout feature");
    Ok(())
}

#[test]
fn abort_yes_discards_log() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(log_path(&temp), "git checkout feature\n")?;

    gdj(&temp).args(["abort", "--yes"]).assert().success();

    assert!(!log_path(&temp).exists());
    Ok(())
}

#[test]
fn completions_generate_script() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    gdj(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gdj"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn continue_runs_pending_commands() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(log_path(&temp), "true\ntrue\n")?;

    gdj(&temp)
        .arg("continue")
        .assert()
        .success()
        .stdout(predicate::str::contains("$ true"));

    assert!(!log_path(&temp).exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn continue_stops_at_failure_and_keeps_rest() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(log_path(&temp), "true\nfalse\ntrue\n")?;

    gdj(&temp)
        .arg("continue")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Command failed: false."))
        .stderr(predicate::str::contains("Fix it and run gdj continue"));

    assert_eq!(fs::read_to_string(log_path(&temp))?, "false\ntrue");
    Ok(())
}

#[cfg(unix)]
#[test]
fn integrate_refuses_same_branch() -> Result<(), Box<dyn std::error::Error>> {
    let repo = setup_repo("staging");
    let temp = TempDir::new()?;

    gdj(&temp)
        .arg("-C")
        .arg(repo.path())
        .arg("integrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Can not integrate staging into staging",
        ));

    assert!(!log_path(&temp).exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn integrate_refuses_uncommitted_changes() -> Result<(), Box<dyn std::error::Error>> {
    let repo = setup_repo("feature");
    fs::write(repo.path().join("README"), "changed\n")?;
    let temp = TempDir::new()?;

    gdj(&temp)
        .arg("-C")
        .arg(repo.path())
        .arg("integrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to integrate feature: you have uncommitted changes",
        ));
    Ok(())
}

#[cfg(unix)]
#[test]
fn release_refuses_integration_branch() -> Result<(), Box<dyn std::error::Error>> {
    let repo = setup_repo("staging");
    let temp = TempDir::new()?;

    gdj(&temp)
        .arg("-C")
        .arg(repo.path())
        .arg("release")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Can not integrate staging into master",
        ));
    Ok(())
}

#[cfg(unix)]
#[test]
fn failed_precondition_keeps_existing_log() -> Result<(), Box<dyn std::error::Error>> {
    let repo = setup_repo("staging");
    let temp = TempDir::new()?;
    fs::write(log_path(&temp), "git checkout feature\n")?;

    gdj(&temp)
        .arg("-C")
        .arg(repo.path())
        .arg("integrate")
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(log_path(&temp))?, "git checkout feature\n");
    Ok(())
}

#[cfg(unix)]
#[test]
fn continue_ignores_login_shell() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(log_path(&temp), "true\n")?;

    gdj(&temp)
        .env("SHELL", "/nonexistent/fish")
        .arg("continue")
        .assert()
        .success();

    assert!(!log_path(&temp).exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn get_failure_on_first_step_is_resumable() -> Result<(), Box<dyn std::error::Error>> {
    // No remote is configured, so the pull fails straight away.
    let repo = setup_repo("feature");
    let temp = TempDir::new()?;

    gdj(&temp)
        .arg("-C")
        .arg(repo.path())
        .arg("get")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Fix it and run gdj continue"));

    assert_eq!(
        fs::read_to_string(log_path(&temp))?,
        "git pull --rebase origin feature"
    );

    gdj(&temp)
        .arg("pending")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. git pull --rebase origin feature"));
    Ok(())
}
