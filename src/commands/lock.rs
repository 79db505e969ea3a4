//! Lock command - pins dependencies with pip-compile.

use anyhow::{Context, Result};
use std::fs;

use crate::config::{Config, REQUIREMENTS_IN, REQUIREMENTS_TXT};
use crate::process::Cmd;

pub fn lock(config: &Config) -> Result<()> {
    fs::metadata(REQUIREMENTS_IN)
        .with_context(|| format!("{} not found", REQUIREMENTS_IN))?;

    Cmd::new(config.tool("pip"))
        .args(["install", "pip-tools"])
        .run_interactive()?;

    Cmd::new(config.tool("pip-compile"))
        .arg(REQUIREMENTS_IN)
        .args(["--output-file", REQUIREMENTS_TXT])
        .error_msg("dependency locking failed")
        .run_interactive()?;

    let locked = fs::read_to_string(REQUIREMENTS_TXT)
        .with_context(|| format!("cannot read {}", REQUIREMENTS_TXT))?;
    println!(
        "Locked {} dependencies into {}.",
        pinned_count(&locked),
        REQUIREMENTS_TXT
    );
    Ok(())
}

/// Number of pinned entries in a requirements file (comments and blank
/// lines don't count).
fn pinned_count(requirements: &str) -> usize {
    requirements
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .count()
}
