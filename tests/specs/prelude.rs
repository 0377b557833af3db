// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared harness: a scratch state directory and fluent command assertions.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub use serde_json::json;

/// An isolated desk: its own state directory and config file.
pub struct Desk {
    dir: TempDir,
}

impl Desk {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    /// A desk with Ana (id 1, pix advanced) and Bruno (id 2, boleto basic).
    pub fn staffed() -> Self {
        let desk = Self::empty();
        desk.file(
            "agents.json",
            r#"[
                {"id": 1, "name": "Ana", "max_capacity": 4},
                {"id": 2, "name": "Bruno", "max_capacity": 4}
            ]"#,
        );
        desk.triage().args(&["agents", "sync", "agents.json"]).passes();
        desk.triage().args(&["expertise", "set", "pix", "advanced", "--agent", "1"]).passes();
        desk.triage().args(&["expertise", "set", "boleto", "1", "--agent", "2"]).passes();
        desk
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn state_dir(&self) -> PathBuf {
        self.path().join("state")
    }

    /// Write a file relative to the desk root.
    pub fn file(&self, name: &str, content: &str) {
        std::fs::write(self.path().join(name), content).unwrap();
    }

    /// Write `config.toml` in the state directory.
    pub fn config(&self, toml: &str) {
        std::fs::create_dir_all(self.state_dir()).unwrap();
        std::fs::write(self.state_dir().join("config.toml"), toml).unwrap();
    }

    pub fn triage(&self) -> Cli {
        let mut cli = cli();
        cli.cmd.current_dir(self.path()).env("TRIAGE_STATE_DIR", self.state_dir());
        cli
    }
}

pub struct Cli {
    cmd: Command,
}

/// A `triage` invocation with color and inherited state settings cleared.
pub fn cli() -> Cli {
    let mut cmd = Command::cargo_bin("triage").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("COLOR")
        .env_remove("TRIAGE_CONFIG")
        .env_remove("TRIAGE_STATE_DIR")
        .env_remove("TRIAGE_LOG");
    Cli { cmd }
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    pub fn passes(mut self) -> Run {
        let output = self.cmd.output().unwrap();
        let run = Run::from(output);
        assert_eq!(run.code, 0, "expected success\nstdout:\n{}\nstderr:\n{}", run.stdout, run.stderr);
        run
    }

    pub fn fails_with(mut self, code: i32) -> Run {
        let output = self.cmd.output().unwrap();
        let run = Run::from(output);
        assert_eq!(run.code, code, "unexpected exit code\nstdout:\n{}\nstderr:\n{}", run.stdout, run.stderr);
        run
    }
}

pub struct Run {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for Run {
    fn from(output: std::process::Output) -> Self {
        Self {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl Run {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout.contains(needle), "stdout unexpectedly has {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}
