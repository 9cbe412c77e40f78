//! cli
//!
//! Command-line interface layer for gov.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Build the execution [`Context`](crate::engine::Context)
//! - Delegate to command handlers
//!
//! # Exit Status
//!
//! Argument errors propagate out of [`run`] and end the process with
//! status 1. A command that fails part-way reports the failure and
//! returns normally.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use crate::engine::Context;
use crate::toolchain::SystemRunner;
use anyhow::{Context as _, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                return Ok(());
            }
            // Bare `gov` shows usage on stdout, like `--help`.
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                Cli::command().print_help()?;
                return Ok(());
            }
            _ => return Err(err.into()),
        },
    };

    let mut ctx =
        Context::from_process(cli.cwd.as_deref()).context("Failed to determine working directory")?;
    ctx.debug = cli.debug;
    ctx.quiet = cli.quiet;

    commands::dispatch(cli.command, &mut ctx, &SystemRunner)
}
