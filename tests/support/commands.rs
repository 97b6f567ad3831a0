//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

const SCRUBBED: &[&str] = &[
    "STSENV_LOG",
    "STSENV_SCHEMA",
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "AWS_SESSION_TOKEN",
];

impl Test {
    /// Create an stsenv command with a scrubbed environment.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("stsenv").expect("failed to find stsenv binary");
        for var in SCRUBBED {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Shortcut for `stsenv` with `payload` on stdin.
    pub fn export(&self, payload: &str) -> Output {
        self.cmd()
            .write_stdin(payload)
            .output()
            .expect("failed to run stsenv")
    }

    /// Shortcut for `stsenv --print <format>`.
    pub fn print(&self, format: &str, payload: &str) -> Output {
        self.cmd()
            .args(["--print", format])
            .write_stdin(payload)
            .output()
            .expect("failed to run stsenv --print")
    }

    /// Shortcut for `stsenv -- <command...>`.
    pub fn run(&self, payload: &str, command: &[&str]) -> Output {
        self.cmd()
            .arg("--")
            .args(command)
            .write_stdin(payload)
            .output()
            .expect("failed to run stsenv --")
    }
}
