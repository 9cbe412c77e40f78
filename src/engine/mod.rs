//! engine
//!
//! Execution context shared by every command.
//!
//! # Design
//!
//! gov never touches process-global state while running a command. The
//! working directory and environment variables that a subcommand reads or
//! changes live in [`Context`], which handlers borrow mutably. Every child
//! process is spawned from the context, so a change made by one step (for
//! example `create` moving into the new project directory) is seen by the
//! steps that follow it.

use std::path::{Path, PathBuf};

use crate::core::env::Environment;
use crate::core::paths::{GovPaths, PathError};
use crate::ui::output::Verbosity;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags plus the explicit
/// working directory and environment.
#[derive(Debug, Clone)]
pub struct Context {
    /// Working directory for spawned tools and relative paths.
    pub cwd: PathBuf,
    /// Environment passed to spawned tools.
    pub env: Environment,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    /// Create a context with default flags.
    pub fn new(cwd: PathBuf, env: Environment) -> Self {
        Self {
            cwd,
            env,
            debug: false,
            quiet: false,
        }
    }

    /// Build a context from the running process.
    ///
    /// A relative `cwd_override` is resolved against the process working
    /// directory.
    pub fn from_process(cwd_override: Option<&Path>) -> std::io::Result<Self> {
        let current = std::env::current_dir()?;
        let cwd = match cwd_override {
            Some(dir) => current.join(dir),
            None => current,
        };
        Ok(Self::new(cwd, Environment::from_process()))
    }

    /// Output verbosity implied by the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Storage paths for this context's home directory.
    pub fn paths(&self) -> Result<GovPaths, PathError> {
        GovPaths::from_env(&self.env)
    }

    /// Change the working directory. Relative paths resolve against the
    /// current one.
    pub fn change_dir(&mut self, dir: &Path) {
        self.cwd = self.cwd.join(dir);
    }
}
