//! Virtual environment discovery.
//!
//! The active environment is found once per invocation, from an explicit
//! `--venv` override or a layered fallback over the working directory and
//! the `VIRTUAL_ENV` / `WORKON_HOME` environment variables.

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Conventional environment directory name under the project root.
pub const VENV_DIR: &str = "venv";
/// Set by an activated virtual environment.
pub const VIRTUAL_ENV_VAR: &str = "VIRTUAL_ENV";
/// virtualenvwrapper convention: one named environment per project.
pub const WORKON_HOME_VAR: &str = "WORKON_HOME";

/// Input specification consumed by `lock`.
pub const REQUIREMENTS_IN: &str = "requirements.in";
/// Pinned requirements produced by `lock`, consumed by `init` and `bundle`.
pub const REQUIREMENTS_TXT: &str = "requirements.txt";
/// Build output directory for sdists, wheels, and bundles.
pub const DIST_DIR: &str = "dist";
/// Coverage data file removed by `clean`.
pub const COVERAGE_FILE: &str = ".coverage";

/// Resolved configuration passed to exactly one handler per invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing the environment's installed executables
    /// (`<venv>/bin`, or `<venv>/Scripts` on Windows).
    pub scripts_dir: PathBuf,
}

impl Config {
    /// Resolve against the process working directory.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let cwd = env::current_dir().context("cannot determine current directory")?;
        Ok(Self::resolve_in(&cwd, explicit))
    }

    /// Resolve against a given working directory.
    pub fn resolve_in(cwd: &Path, explicit: Option<&Path>) -> Self {
        let root = venv_root(cwd, explicit);
        Self {
            scripts_dir: root.join(scripts_subdir()),
        }
    }

    /// The environment root directory.
    pub fn venv_root(&self) -> &Path {
        self.scripts_dir.parent().unwrap_or(&self.scripts_dir)
    }

    /// Path of an installed executable inside the environment.
    pub fn tool(&self, name: &str) -> PathBuf {
        self.scripts_dir.join(name)
    }
}

/// Determine the environment root directory.
///
/// Order: explicit override, `<cwd>/venv` if it exists, `$VIRTUAL_ENV`,
/// `$WORKON_HOME/<cwd basename>`, then `<cwd>/venv` whether or not it
/// exists yet.
pub fn venv_root(cwd: &Path, explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let local = cwd.join(VENV_DIR);
    if local.is_dir() {
        return local;
    }

    if let Ok(path) = env::var(VIRTUAL_ENV_VAR) {
        return PathBuf::from(path);
    }

    if let Ok(home) = env::var(WORKON_HOME_VAR) {
        if let Some(name) = cwd.file_name() {
            return Path::new(&home).join(name);
        }
    }

    local
}

/// Executable subdirectory inside an environment.
pub fn scripts_subdir() -> &'static str {
    if cfg!(windows) {
        "Scripts"
    } else {
        "bin"
    }
}

/// Interpreter used to create environments.
pub fn interpreter() -> &'static str {
    if cfg!(windows) {
        "python"
    } else {
        "python3"
    }
}
