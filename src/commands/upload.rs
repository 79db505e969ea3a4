//! Upload command - publishes built artifacts with twine.

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::{Config, DIST_DIR};
use crate::process::Cmd;

/// Package index username, read before any tool runs.
pub const USERNAME_VAR: &str = "TWINE_USERNAME";
/// Package index password, read before any tool runs.
pub const PASSWORD_VAR: &str = "TWINE_PASSWORD";

pub fn upload(config: &Config) -> Result<()> {
    let username =
        env::var(USERNAME_VAR).with_context(|| format!("{} is not set", USERNAME_VAR))?;
    let password =
        env::var(PASSWORD_VAR).with_context(|| format!("{} is not set", PASSWORD_VAR))?;

    Cmd::new(config.tool("pip"))
        .args(["install", "twine"])
        .run_interactive()?;

    let artifacts = built_artifacts(Path::new(DIST_DIR))?;
    if artifacts.is_empty() {
        bail!("no artifacts in {}/ (run `pydev build` first)", DIST_DIR);
    }

    let mut cmd = Cmd::new(config.tool("twine"))
        .arg("upload")
        .env(USERNAME_VAR, &username)
        .env(PASSWORD_VAR, &password)
        .error_msg("upload failed");
    for artifact in &artifacts {
        cmd = cmd.arg_path(artifact);
    }
    cmd.run_interactive()?;

    println!("Uploaded {} artifact(s).", artifacts.len());
    Ok(())
}

/// Wheels and sdists under the output directory, sorted by name.
fn built_artifacts(dist: &Path) -> Result<Vec<PathBuf>> {
    let mut artifacts = Vec::new();
    if !dist.is_dir() {
        return Ok(artifacts);
    }

    for entry in WalkDir::new(dist).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.ends_with(".whl") || name.ends_with(".tar.gz") {
            artifacts.push(entry.into_path());
        }
    }

    artifacts.sort();
    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_dist_directory_yields_no_artifacts() {
        let dir = TempDir::new().unwrap();
        let artifacts = built_artifacts(&dir.path().join("dist")).unwrap();
        assert!(artifacts.is_empty());
    }

    #[test]
    fn only_wheels_and_sdists_are_collected() {
        let dir = TempDir::new().unwrap();
        let dist = dir.path().join("dist");
        fs::create_dir(&dist).unwrap();
        fs::write(dist.join("proj-1.0-py3-none-any.whl"), b"").unwrap();
        fs::write(dist.join("proj-1.0.tar.gz"), b"").unwrap();
        fs::write(dist.join("notes.txt"), b"").unwrap();
        fs::create_dir(dist.join("proj-0.9.tar.gz")).unwrap();

        let artifacts = built_artifacts(&dist).unwrap();
        let names: Vec<String> = artifacts
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["proj-1.0-py3-none-any.whl", "proj-1.0.tar.gz"]);
    }
}
