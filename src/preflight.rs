//! Preflight checks for the project workspace.
//!
//! Validates the interpreter, environment, and project files before any
//! workflow command shells out. Run with `pydev preflight`.

use std::path::Path;

use crate::config::{self, Config, REQUIREMENTS_IN, REQUIREMENTS_TXT};

/// Result of a single preflight check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed.
    Pass,
    /// Check failed - workflow commands will fail.
    Fail,
    /// Check passed but with a warning.
    Warn,
}

impl CheckResult {
    fn pass_with(name: &str, details: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Pass,
            details: Some(details.to_string()),
        }
    }

    fn fail(name: &str, details: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Fail,
            details: Some(details.to_string()),
        }
    }

    fn warn(name: &str, details: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warn,
            details: Some(details.to_string()),
        }
    }
}

/// Results of all preflight checks.
pub struct PreflightReport {
    pub checks: Vec<CheckResult>,
}

impl PreflightReport {
    /// Returns true if no check failed.
    pub fn all_passed(&self) -> bool {
        !self.checks.iter().any(|c| c.status == CheckStatus::Fail)
    }

    pub fn fail_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.status == CheckStatus::Fail)
            .count()
    }

    pub fn warn_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.status == CheckStatus::Warn)
            .count()
    }

    /// Print the report to stdout.
    pub fn print(&self) {
        println!("=== Preflight Check Results ===\n");

        for check in &self.checks {
            let (icon, status_str) = match check.status {
                CheckStatus::Pass => ("✓", "PASS"),
                CheckStatus::Fail => ("✗", "FAIL"),
                CheckStatus::Warn => ("⚠", "WARN"),
            };

            print!("  {} [{}] {}", icon, status_str, check.name);
            match &check.details {
                Some(details) => println!(": {}", details),
                None => println!(),
            }
        }

        println!();
        let total = self.checks.len();
        let passed = self
            .checks
            .iter()
            .filter(|c| c.status == CheckStatus::Pass)
            .count();
        println!("Summary: {}/{} passed", passed, total);
        if self.fail_count() > 0 {
            println!("         {} FAILED", self.fail_count());
        }
        if self.warn_count() > 0 {
            println!("         {} warnings", self.warn_count());
        }
    }
}

/// Run all preflight checks against the resolved configuration.
pub fn run_preflight(config: &Config) -> PreflightReport {
    let mut checks = Vec::new();

    let interpreter = config::interpreter();
    match which::which(interpreter) {
        Ok(path) => checks.push(CheckResult::pass_with(interpreter, &path.display().to_string())),
        Err(_) => checks.push(CheckResult::fail(
            interpreter,
            "Not found on PATH. Install Python 3.",
        )),
    }

    let venv = config.venv_root();
    if venv.is_dir() {
        checks.push(CheckResult::pass_with(
            "environment",
            &venv.display().to_string(),
        ));
    } else {
        checks.push(CheckResult::warn(
            "environment",
            "Not created yet. Run `pydev init`.",
        ));
    }

    let pip = config.tool("pip");
    if pip.exists() {
        checks.push(CheckResult::pass_with("pip", &pip.display().to_string()));
    } else {
        checks.push(CheckResult::warn(
            "pip",
            "Not installed in the environment. Run `pydev init`.",
        ));
    }

    checks.push(check_project_file(
        REQUIREMENTS_IN,
        "Needed by `pydev lock`.",
    ));
    checks.push(check_project_file(
        REQUIREMENTS_TXT,
        "Run `pydev lock` to generate it.",
    ));

    PreflightReport { checks }
}

fn check_project_file(name: &str, hint: &str) -> CheckResult {
    if Path::new(name).is_file() {
        CheckResult::pass_with(name, "present")
    } else {
        CheckResult::warn(name, &format!("Not found. {}", hint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(statuses: &[CheckStatus]) -> PreflightReport {
        PreflightReport {
            checks: statuses
                .iter()
                .enumerate()
                .map(|(i, status)| CheckResult {
                    name: format!("check-{}", i),
                    status: *status,
                    details: None,
                })
                .collect(),
        }
    }

    #[test]
    fn report_passes_without_failures() {
        let report = report_with(&[CheckStatus::Pass, CheckStatus::Warn]);
        assert!(report.all_passed());
        assert_eq!(report.fail_count(), 0);
        assert_eq!(report.warn_count(), 1);
    }

    #[test]
    fn report_fails_when_any_check_fails() {
        let report = report_with(&[CheckStatus::Pass, CheckStatus::Fail, CheckStatus::Fail]);
        assert!(!report.all_passed());
        assert_eq!(report.fail_count(), 2);
    }

    #[test]
    fn missing_project_file_is_a_warning() {
        let result = check_project_file("no-such-file-12345.in", "Create it.");
        assert_eq!(result.status, CheckStatus::Warn);
        assert!(result.details.unwrap().contains("Create it."));
    }
}
