//! Shared testing utilities for datamode CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
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

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `datamode` binary within the
    /// default working directory.
    ///
    /// `PROJECT_MODE` is scrubbed so the surrounding environment cannot leak
    /// a mode into the exercise; tests opt back in with `.env(...)`.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `datamode` binary within a
    /// custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("datamode").expect("Failed to locate datamode binary");
        cmd.current_dir(dir.as_ref()).env_remove("PROJECT_MODE");
        cmd
    }

    /// Write a `datamode.toml` properties file into the working directory.
    pub fn write_default_config(&self, content: &str) -> PathBuf {
        self.write_config_at(self.work_dir.join("datamode.toml"), content)
    }

    /// Write a properties file at an arbitrary path under the test root.
    pub fn write_config_at<P: AsRef<Path>>(&self, path: P, content: &str) -> PathBuf {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config parent directory");
        }
        fs::write(path, content).expect("Failed to write properties file");
        path.to_path_buf()
    }

    /// Path inside the test root, outside the working directory.
    pub fn root_path<P: AsRef<Path>>(&self, relative: P) -> PathBuf {
        self.root.path().join(relative)
    }
}
