//! Clean command - removes the environment and build artifacts.

use anyhow::Result;

use crate::config::Config;

pub fn clean(config: &Config) -> Result<()> {
    crate::clean::clean_workspace(config)
}
