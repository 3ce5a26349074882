//! CLI surface tests: usage message, help, no-op paths.

use assert_cmd::Command;
use predicates::prelude::*;

fn pipeline() -> Command {
    let mut cmd = Command::cargo_bin("pipeline").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn no_subcommand_prints_two_line_usage_and_exits_zero() {
    pipeline()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "pipeline all|extract|dedup|compile [--minify]|minify|gzip|stats",
        ))
        .stdout(predicate::str::contains("cuppa"));
}

#[test]
fn unknown_subcommand_is_an_informational_noop() {
    pipeline()
        .arg("frobnicate")
        .assert()
        .success()
        .stdout(predicate::str::contains("pipeline all|extract"));
}

#[test]
fn usage_message_is_exactly_two_lines() {
    let output = pipeline().output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn help_lists_every_stage() {
    let assert = pipeline().arg("--help").assert().success();
    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    for stage in ["extract", "dedup", "compile", "minify", "gzip", "stats", "all"] {
        assert!(stdout.contains(stage), "help is missing stage '{}'", stage);
    }
}

#[test]
fn unknown_subcommand_performs_no_work() {
    let dir = tempfile::tempdir().unwrap();
    pipeline()
        .args(["--root"])
        .arg(dir.path())
        .arg("frobnicate")
        .assert()
        .success();
    // No stage directories were created
    assert!(!dir.path().join("cleaned").exists());
    assert!(!dir.path().join("compiled").exists());
}
