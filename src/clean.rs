//! Workspace cleaning.

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::{Config, COVERAGE_FILE, DIST_DIR};

/// Remove the virtual environment, coverage data, and build output.
/// Missing targets are skipped without error.
pub fn clean_workspace(config: &Config) -> Result<()> {
    let mut cleaned = false;

    let venv = config.venv_root();
    if venv.exists() {
        println!("Removing {}...", venv.display());
        fs::remove_dir_all(venv)?;
        cleaned = true;
    }

    let coverage = Path::new(COVERAGE_FILE);
    if coverage.exists() {
        println!("Removing coverage data...");
        fs::remove_file(coverage)?;
        cleaned = true;
    }

    let dist = Path::new(DIST_DIR);
    if dist.exists() {
        println!("Removing {}/...", DIST_DIR);
        fs::remove_dir_all(dist)?;
        cleaned = true;
    }

    if cleaned {
        println!("Clean complete.");
    } else {
        println!("Nothing to clean.");
    }

    Ok(())
}
