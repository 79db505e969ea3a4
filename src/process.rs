//! External command execution.
//!
//! All subcommand work is delegated to external tools; this module is the
//! single place they are launched from. A non-zero exit converts into a
//! typed [`ToolError`] so every caller fails the same way.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;

/// An external tool reported failure via its exit status.
#[derive(Debug, Error)]
#[error("'{tool}' failed (exit code {code})")]
pub struct ToolError {
    /// Program name as invoked.
    pub tool: String,
    /// Exit code, or -1 if terminated by signal.
    pub code: i32,
}

/// Result of a captured command execution.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> i32 {
        self.status.code().unwrap_or(-1)
    }

    pub fn stdout_trimmed(&self) -> &str {
        self.stdout.trim()
    }

    pub fn stderr_trimmed(&self) -> &str {
        self.stderr.trim()
    }
}

/// Builder for one external command invocation.
pub struct Cmd {
    program: PathBuf,
    args: Vec<OsString>,
    current_dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
    allow_fail: bool,
    error_prefix: Option<String>,
}

impl Cmd {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            envs: Vec::new(),
            allow_fail: false,
            error_prefix: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<str>) -> Self {
        self.args.push(OsString::from(arg.as_ref()));
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            self.args.push(OsString::from(arg.as_ref()));
        }
        self
    }

    pub fn arg_path(mut self, path: &Path) -> Self {
        self.args.push(path.as_os_str().to_os_string());
        self
    }

    /// Set the working directory for the child.
    pub fn dir(mut self, dir: &Path) -> Self {
        self.current_dir = Some(dir.to_path_buf());
        self
    }

    /// Pass an environment variable to the child.
    pub fn env(mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.envs
            .push((key.as_ref().to_string(), value.as_ref().to_string()));
        self
    }

    /// Don't fail on non-zero exit.
    pub fn allow_fail(mut self) -> Self {
        self.allow_fail = true;
        self
    }

    /// Custom context line prepended to the failure diagnostic.
    pub fn error_msg(mut self, msg: impl AsRef<str>) -> Self {
        self.error_prefix = Some(msg.as_ref().to_string());
        self
    }

    fn tool_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.to_string_lossy().into_owned())
    }

    fn build(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(ref dir) = self.current_dir {
            cmd.current_dir(dir);
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd
    }

    fn failure(&self, code: i32, stderr: Option<&str>) -> anyhow::Error {
        let error = anyhow::Error::new(ToolError {
            tool: self.tool_name(),
            code,
        });
        let error = match stderr {
            Some(s) if !s.is_empty() => error.context(s.to_string()),
            _ => error,
        };
        match &self.error_prefix {
            Some(prefix) => error.context(prefix.clone()),
            None => error,
        }
    }

    /// Run the command and capture its output.
    pub fn run(self) -> Result<CommandResult> {
        let output = self.build().output().with_context(|| {
            format!(
                "Failed to execute '{}'. Is it installed?",
                self.program.display()
            )
        })?;

        let result = CommandResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if !self.allow_fail && !result.success() {
            let stderr = result.stderr_trimmed().to_string();
            return Err(self.failure(result.code(), Some(&stderr)));
        }

        Ok(result)
    }

    /// Run the command with inherited stdio.
    ///
    /// Tool output streams directly to the terminal; this is the normal mode
    /// for workflow steps so installer and build progress stays visible.
    pub fn run_interactive(self) -> Result<ExitStatus> {
        let mut cmd = self.build();
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let status = cmd.status().with_context(|| {
            format!(
                "Failed to execute '{}'. Is it installed?",
                self.program.display()
            )
        })?;

        if !self.allow_fail && !status.success() {
            return Err(self.failure(status.code().unwrap_or(-1), None));
        }

        Ok(status)
    }
}
