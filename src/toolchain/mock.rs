//! toolchain::mock
//!
//! Recording runner for deterministic testing.
//!
//! # Design
//!
//! [`RecordingRunner`] never spawns anything. It records each invocation
//! and succeeds, unless configured to fail invocations whose command line
//! starts with a given prefix.
//!
//! # Example
//!
//! ```
//! use gov::core::env::Environment;
//! use gov::engine::Context;
//! use gov::toolchain::mock::RecordingRunner;
//! use gov::toolchain::{Invocation, ToolRunner};
//! use std::path::PathBuf;
//!
//! let ctx = Context::new(PathBuf::from("/work"), Environment::new());
//! let runner = RecordingRunner::new().fail_on("go build");
//!
//! assert!(runner.run(&Invocation::new(&ctx, "git").arg("init")).is_ok());
//! assert!(runner.run(&Invocation::new(&ctx, "go").arg("build")).is_err());
//!
//! assert_eq!(runner.command_lines(), vec!["git init", "go build"]);
//! ```

use std::sync::{Arc, Mutex};

use super::runner::{Invocation, ToolError, ToolOutput, ToolRunner};

/// Exit code reported for simulated failures.
pub const SIMULATED_EXIT_CODE: i32 = 1;

/// Mock runner for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    inner: Arc<Mutex<RecordingRunnerInner>>,
}

#[derive(Debug, Default)]
struct RecordingRunnerInner {
    /// Every invocation seen, in order.
    invocations: Vec<Invocation>,
    /// Command-line prefixes that fail with a non-zero exit.
    fail_prefixes: Vec<String>,
    /// Programs that fail to spawn.
    missing_programs: Vec<String>,
}

impl RecordingRunner {
    /// Create a runner where every invocation succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail invocations whose command line starts with `prefix`.
    pub fn fail_on(self, prefix: impl Into<String>) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.fail_prefixes.push(prefix.into());
        }
        self
    }

    /// Treat `program` as not installed.
    pub fn missing(self, program: impl Into<String>) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.missing_programs.push(program.into());
        }
        self
    }

    /// Get all recorded invocations.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.inner.lock().unwrap().invocations.clone()
    }

    /// Get all recorded command lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap()
            .invocations
            .iter()
            .map(Invocation::command_line)
            .collect()
    }

    /// Forget recorded invocations (failure configuration is kept).
    pub fn clear(&self) {
        self.inner.lock().unwrap().invocations.clear();
    }
}

impl ToolRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<ToolOutput, ToolError> {
        let mut inner = self.inner.lock().unwrap();
        inner.invocations.push(invocation.clone());

        if inner.missing_programs.contains(&invocation.program) {
            return Err(ToolError::Spawn {
                program: invocation.program.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "program not found"),
            });
        }

        let command = invocation.command_line();
        if inner
            .fail_prefixes
            .iter()
            .any(|prefix| command.starts_with(prefix.as_str()))
        {
            return Err(ToolError::Failed {
                command,
                code: Some(SIMULATED_EXIT_CODE),
                stderr: "simulated failure".to_string(),
            });
        }

        Ok(ToolOutput::default())
    }
}
