//! Common test utilities for dirsync binary tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated `PATH` in a temp directory, optionally holding
//!   fake engine scripts that log their arguments instead of syncing
//! - `TestResult`: captured exit status and output

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Result of running the dirsync binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// stdout lines that are dry-run renderings
    pub fn dry_run_lines(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .filter(|l| l.starts_with("[dry-run] "))
            .collect()
    }
}

/// Isolated environment: `PATH` points only at `bin/` inside a temp dir.
pub struct TestEnv {
    root: TempDir,
    bin: PathBuf,
    log: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        let bin = root.path().join("bin");
        fs::create_dir_all(&bin).expect("create bin dir");
        let log = root.path().join("engine-calls.log");
        Self { root, bin, log }
    }

    /// Install a fake engine that records `name args...` and exits with `exit_code`.
    #[cfg(unix)]
    pub fn with_engine(self, name: &str, exit_code: i32) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"{} $*\" >> '{}'\nexit {}\n",
            name,
            self.log.display(),
            exit_code
        );
        let path = self.bin.join(name);
        fs::write(&path, script).expect("write fake engine");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake engine");
        self
    }

    /// Path inside the temp dir
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Run dirsync with a clean environment and the isolated `PATH`
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_dirsync"))
            .args(args)
            .env_clear()
            .env("PATH", &self.bin)
            .env("TERM", "dumb")
            .env("NO_COLOR", "1")
            .current_dir(self.root.path())
            .output()
            .expect("run dirsync");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Lines recorded by fake engines, in call order
    pub fn engine_calls(&self) -> Vec<String> {
        match fs::read_to_string(&self.log) {
            Ok(text) => text.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
