//! Preflight command - runs workspace checks.

use anyhow::{bail, Result};

use crate::config::Config;

pub fn preflight(config: &Config) -> Result<()> {
    let report = crate::preflight::run_preflight(config);
    report.print();

    if !report.all_passed() {
        bail!(
            "preflight failed: {} check(s) failed",
            report.fail_count()
        );
    }

    println!("All preflight checks passed.");
    Ok(())
}
