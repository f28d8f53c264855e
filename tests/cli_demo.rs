#![allow(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::restriction
)]
//! CLI Demo Tests
//!
//! Runs the `dbglevel` binary with a selector in `DEBUG` and checks what
//! reaches each stream.

use std::process::{Command, Output};

const INHERITED_VARS: [&str; 6] = [
    "DEBUG_LEVEL",
    "DEBUG_SPACING_FILE",
    "DEBUG_SPACING_FUNCTION",
    "DEBUG_SPACING_LINE",
    "DEBUG_OUT",
    "DBGLEVEL_LOG",
];

fn run_demo(selector: &str, extra: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_dbglevel"));
    for var in INHERITED_VARS {
        command.env_remove(var);
    }
    command.arg("demo").env("DEBUG", selector).env("DEBUG_COLOR", "never");
    for (key, value) in extra {
        command.env(key, value);
    }
    command.output().expect("failed to run dbglevel")
}

#[test]
fn test_invalid_level_warns_and_continues() {
    let output = run_demo("9:foo;1:*", &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {stderr}");
    assert!(
        stderr.contains("[DBGLEVEL WARN] invalid level '9' in selector term '9:foo'"),
        "stderr: {stderr}"
    );
    assert!(stdout.lines().any(|line| line.starts_with(" FATAL ")), "stdout: {stdout}");
    assert!(!stdout.contains(" ERROR "), "stdout: {stdout}");
}

#[test]
fn test_multi_digit_level_warns() {
    let output = run_demo("07:foo", &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {stderr}");
    assert!(stderr.contains("invalid level '07'"), "stderr: {stderr}");
}

#[test]
fn test_empty_selector_is_silent() {
    let output = run_demo("", &[]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_malformed_environment_fails() {
    let output = run_demo("*", &[("DEBUG_SPACING_LINE", "wide")]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("DEBUG_SPACING_LINE"), "stderr: {stderr}");
}
