//! Assertions over captured command output.

use std::process::Output;

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).to_string()
}

fn check(stream: &str, haystack: &str, needle: &str, present: bool) {
    assert_eq!(
        haystack.contains(needle),
        present,
        "{} should {}contain '{}', got: {}",
        stream,
        if present { "" } else { "not " },
        needle,
        haystack
    );
}

pub fn stdout(output: &Output) -> String {
    text(&output.stdout)
}

pub fn stderr(output: &Output) -> String {
    text(&output.stderr)
}

/// Panics with the captured stderr if the command failed.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed ({:?}):\n{}",
        output.status.code(),
        stderr(output)
    );
}

/// Failures must be the ordinary exit 1 (or clap's 2), never a panic.
pub fn assert_failure(output: &Output) {
    let code = output.status.code();
    assert!(
        matches!(code, Some(1) | Some(2)),
        "expected exit 1 or 2, got {:?}:\n{}",
        code,
        stderr(output)
    );
}

pub fn assert_stdout_contains(output: &Output, expected: &str) {
    check("stdout", &stdout(output), expected, true);
}

pub fn assert_stdout_excludes(output: &Output, excluded: &str) {
    check("stdout", &stdout(output), excluded, false);
}

pub fn assert_stderr_contains(output: &Output, expected: &str) {
    check("stderr", &stderr(output), expected, true);
}

pub fn assert_stderr_excludes(output: &Output, excluded: &str) {
    check("stderr", &stderr(output), excluded, false);
}
