//! Shared testing utilities for filewright CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated working directory for CLI exercises.
///
/// Every command runs with the temp directory as its working directory, so
/// settings files and relative output roots stay inside the sandbox and
/// tests can run in parallel.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the working directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `filewright` binary.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("filewright").expect("Failed to locate filewright binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Absolute path of the default output root (`outputs/`).
    pub fn output_root(&self) -> PathBuf {
        self.work_dir.join("outputs")
    }

    /// Absolute path of a file under the default output root.
    pub fn output_path(&self, relative: &str) -> PathBuf {
        self.output_root().join(relative)
    }

    /// Write `filewright.toml` into the working directory.
    pub fn write_settings(&self, content: &str) {
        fs::write(self.work_dir.join("filewright.toml"), content)
            .expect("Failed to write settings file");
    }

    /// Write a helper file (batch specs, rule tables) into the working
    /// directory and return its absolute path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write helper file");
        path
    }

    /// Content of a file under the default output root.
    pub fn read_output(&self, relative: &str) -> String {
        fs::read_to_string(self.output_path(relative)).expect("Failed to read output file")
    }

    /// Assert a file exists under the default output root.
    pub fn assert_output_exists(&self, relative: &str) {
        assert!(
            self.output_path(relative).is_file(),
            "{} should exist under the output root",
            relative
        );
    }

    /// Assert nothing exists at this relative path under the default root.
    pub fn assert_output_missing(&self, relative: &str) {
        assert!(
            !self.output_path(relative).exists(),
            "{} should not exist under the output root",
            relative
        );
    }
}
