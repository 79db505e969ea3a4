//! Bundle command - builds a standalone executable with pex.

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::Path;

use crate::config::{Config, DIST_DIR, REQUIREMENTS_TXT};
use crate::process::Cmd;

pub fn bundle(config: &Config) -> Result<()> {
    // pex resolves against the active environment, so set it up first.
    super::init::init(config)?;

    Cmd::new(config.tool("pip"))
        .args(["install", "pex"])
        .run_interactive()?;

    let project = project_name()?;
    let output = Path::new(DIST_DIR).join(format!("{}.pex", project));
    fs::create_dir_all(DIST_DIR)?;

    Cmd::new(config.tool("pex"))
        .arg(".")
        .args(["-r", REQUIREMENTS_TXT])
        .args(["-m", &entry_module(&project)])
        .arg("-o")
        .arg_path(&output)
        .error_msg("bundling failed")
        .run_interactive()?;

    println!("Bundle written to {}.", output.display());
    Ok(())
}

/// Project name, taken from the working directory basename.
fn project_name() -> Result<String> {
    let cwd = env::current_dir().context("cannot determine current directory")?;
    cwd.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .context("current directory has no name")
}

/// Entry-point module for a project: hyphens are not valid in module names.
fn entry_module(project: &str) -> String {
    project.replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_module_maps_hyphens_to_underscores() {
        assert_eq!(entry_module("my-tool"), "my_tool");
        assert_eq!(entry_module("plain"), "plain");
    }
}
