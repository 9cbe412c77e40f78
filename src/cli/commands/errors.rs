//! Per-step command failures.
//!
//! Each variant names the step that failed; the message is what the user
//! sees, followed by the underlying cause.

use thiserror::Error;

use crate::core::config::ConfigError;
use crate::core::env::EnvError;
use crate::core::paths::PathError;
use crate::core::types::TypeError;
use crate::toolchain::ToolError;

/// A failed step of a subcommand.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Failed to init git: {0}")]
    GitInit(ToolError),

    #[error("Failed to init go mod: {0}")]
    ModInit(ToolError),

    #[error("Failed to init go mod: {0}")]
    InvalidModule(TypeError),

    #[error("Failed to build: {0}")]
    Build(ToolError),

    #[error("Failed to create directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to tidy deps: {0}")]
    Tidy(ToolError),

    #[error("Failed to create .gov dir: {0}")]
    CreateGovDir(std::io::Error),

    #[error("Failed to copy go binary: {0}")]
    CopyBinary(ToolError),

    #[error("Failed to update PATH: {0}")]
    UpdatePath(EnvError),

    #[error("Failed to locate .gov directory: {0}")]
    Home(PathError),

    #[error("Failed to load config: {0}")]
    Config(ConfigError),
}
