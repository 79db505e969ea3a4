//! Shared test utilities for pydev integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A throwaway project directory the pydev binary runs inside.
pub struct TestProject {
    /// Temporary directory (kept alive for the lifetime of TestProject)
    pub _temp_dir: TempDir,
    /// Project root, named `proj` so resolution rules see a stable basename
    pub dir: PathBuf,
}

impl TestProject {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let dir = temp_dir.path().join("proj");
        fs::create_dir(&dir).expect("failed to create project dir");
        Self {
            _temp_dir: temp_dir,
            dir,
        }
    }

    /// Run the pydev binary in the project directory.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().expect("failed to run pydev")
    }

    /// Command for the pydev binary with a scrubbed environment: the
    /// resolution and credential variables never leak in from the host.
    pub fn command(&self) -> Command {
        pydev_command(&self.dir)
    }
}

pub fn pydev_command(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pydev"));
    cmd.current_dir(dir)
        .env_remove("VIRTUAL_ENV")
        .env_remove("WORKON_HOME")
        .env_remove("TWINE_USERNAME")
        .env_remove("TWINE_PASSWORD");
    cmd
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
