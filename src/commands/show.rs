//! Show command - prints the resolved configuration.

use anyhow::Result;

use crate::config::{self, Config};

pub fn show_config(config: &Config) -> Result<()> {
    println!("Configuration:");
    println!("  interpreter: {}", config::interpreter());
    println!("  environment: {}", config.venv_root().display());
    println!("  executables: {}", config.scripts_dir.display());
    if config.venv_root().is_dir() {
        println!("  status: present");
    } else {
        println!("  status: missing (run `pydev init` to create it)");
    }
    Ok(())
}
