//! toolchain::runner
//!
//! Invocation type, runner trait, and the process-spawning implementation.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;

use crate::core::env::Environment;
use crate::engine::Context;
use crate::ui::output::indent;

/// Errors from running an external tool.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The program could not be started (missing binary, bad cwd, ...).
    #[error("could not run `{program}`: {source}")]
    Spawn {
        /// Program name as invoked
        program: String,
        /// Underlying OS error
        source: std::io::Error,
    },

    /// The program ran and exited unsuccessfully.
    #[error("`{command}` {}{}", exit_text(.code), stderr_text(.stderr))]
    Failed {
        /// Full command line
        command: String,
        /// Exit code, `None` if terminated by a signal
        code: Option<i32>,
        /// Captured standard error
        stderr: String,
    },
}

fn exit_text(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

fn stderr_text(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(":\n{}", indent(trimmed, "    "))
    }
}

/// Captured output of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

/// A fully described external program run.
///
/// Built from a [`Context`], so the working directory and environment are
/// the context's, never the process's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name or path
    pub program: String,
    /// Arguments, in order
    pub args: Vec<OsString>,
    /// Working directory of the child
    pub cwd: PathBuf,
    /// Complete environment of the child
    pub env: Environment,
}

impl Invocation {
    /// Start an invocation of `program` in the context's directory and
    /// environment.
    pub fn new(ctx: &Context, program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: ctx.cwd.clone(),
            env: ctx.env.clone(),
        }
    }

    /// Append an argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append a path argument.
    pub fn path_arg(self, path: &Path) -> Self {
        self.arg(path.as_os_str())
    }

    /// Arguments as (lossily decoded) strings.
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    /// The command line as a user would type it, e.g. `go mod tidy`.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.clone())
            .chain(self.args_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Something that can run an [`Invocation`] to completion.
pub trait ToolRunner {
    /// Run the invocation, blocking until it exits.
    ///
    /// # Errors
    ///
    /// `ToolError::Spawn` if it cannot start, `ToolError::Failed` if it
    /// exits unsuccessfully.
    fn run(&self, invocation: &Invocation) -> Result<ToolOutput, ToolError>;
}

/// Runs invocations as real child processes.
///
/// The child gets exactly the invocation's environment (the process
/// environment is cleared first), a null stdin, and captured output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<ToolOutput, ToolError> {
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .env_clear()
            .envs(invocation.env.iter())
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ToolError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(ToolError::Failed {
                command: invocation.command_line(),
                code: output.status.code(),
                stderr,
            });
        }

        Ok(ToolOutput { stdout, stderr })
    }
}
