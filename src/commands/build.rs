//! Build command - produces sdist and wheel artifacts.

use anyhow::Result;

use crate::config::{Config, DIST_DIR};
use crate::process::Cmd;

pub fn build(config: &Config) -> Result<()> {
    Cmd::new(config.tool("pip"))
        .args(["install", "build"])
        .run_interactive()?;

    Cmd::new(config.tool("python"))
        .args(["-m", "build", "--sdist", "--wheel", "--outdir", DIST_DIR, "."])
        .error_msg("distribution build failed")
        .run_interactive()?;

    Ok(())
}
