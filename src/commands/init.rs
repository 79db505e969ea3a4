//! Init command - creates the environment and installs dependencies.

use anyhow::{Context, Result};
use std::fs;

use crate::config::{self, Config, REQUIREMENTS_TXT};
use crate::process::Cmd;

pub fn init(config: &Config) -> Result<()> {
    fs::metadata(REQUIREMENTS_TXT)
        .with_context(|| format!("{} not found (run `pydev lock` first)", REQUIREMENTS_TXT))?;

    let venv = config.venv_root();
    println!("Creating virtual environment at {}...", venv.display());
    Cmd::new(config::interpreter())
        .args(["-m", "venv"])
        .arg_path(venv)
        .error_msg("virtual environment creation failed")
        .run_interactive()?;

    Cmd::new(config.tool("pip"))
        .args(["install", "-r", REQUIREMENTS_TXT])
        .run_interactive()?;

    Cmd::new(config.tool("pip"))
        .args(["install", "-e", "."])
        .run_interactive()?;

    println!("Environment ready.");
    Ok(())
}
