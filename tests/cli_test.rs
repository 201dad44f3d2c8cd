//! Integration tests for CLI argument parsing.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn cli_no_project_fails_with_configuration_error() {
    let mut cmd = Command::new(cargo_bin("cairn"));
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("project directory is required"));
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::new(cargo_bin("cairn"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Minimal CI pipeline runner"))
        .stdout(predicate::str::contains("--push-timeout"))
        .stdout(predicate::str::contains("--branch"));
}

#[test]
fn cli_shows_version() {
    let mut cmd = Command::new(cargo_bin("cairn"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_reports_the_failing_step_on_stderr() {
    // An empty directory fails at the first step whether the go toolchain
    // is installed (nothing to build) or not (spawn failure).
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::new(cargo_bin("cairn"));
    cmd.args(["-p", temp.path().to_str().unwrap()]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("go build"))
        .stderr(predicate::str::contains("failed to execute"));
}

#[test]
fn cli_rejects_a_non_numeric_push_timeout() {
    let mut cmd = Command::new(cargo_bin("cairn"));
    cmd.args(["--push-timeout", "soon"]);
    cmd.assert().failure().code(2);
}
