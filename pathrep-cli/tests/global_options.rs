//! Integration tests for global CLI options.
//!
//! These tests verify the flags shared by every subcommand:
//! - `--verbose` surfaces debug logging on stderr
//! - `--quiet` suppresses error reporting while preserving exit codes
//! - `--version` and `--help` work

mod common;

use common::TestEnv;
use predicates::prelude::*;

/// Verbose mode emits debug messages on stderr.
#[test]
fn test_verbose_emits_debug_logging() {
    let env = TestEnv::new();

    env.command()
        .arg("--verbose")
        .arg("encode")
        .arg("--hex")
        .arg("abc")
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}

/// Quiet mode silences the error report but keeps the exit code.
#[test]
fn test_quiet_suppresses_error_output() {
    let env = TestEnv::new();

    env.command()
        .arg("--quiet")
        .arg("encode")
        .arg("\u{F700}")
        .assert()
        .failure()
        .code(1)
        .stderr("");
}

/// The version flag prints the binary name.
#[test]
fn test_version_flag() {
    let env = TestEnv::new();

    env.command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pathrep"));
}

/// Help lists every subcommand.
#[test]
fn test_help_lists_subcommands() {
    let env = TestEnv::new();

    env.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("decode"))
        .stdout(predicate::str::contains("encode"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("--verbose"));
}
