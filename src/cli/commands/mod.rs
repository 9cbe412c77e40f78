//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Describes the external programs it needs as [`Invocation`]s
//! 2. Runs them, in order, through the [`ToolRunner`] it is given
//! 3. Prints one line per completed step
//!
//! Handlers stop at the first failing step and return a [`CommandError`].
//! [`dispatch`] prints that error and returns normally: a failed step is
//! reported, not escalated to the exit status.

mod activate;
mod build;
mod completion;
mod config_cmd;
mod create;
mod deps;
mod errors;
mod init;
mod save_bin;
mod use_cmd;

// Re-export command functions for testing and direct invocation
pub use activate::{activate, deactivate};
pub use build::build;
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use create::create;
pub use deps::deps;
pub use errors::CommandError;
pub use init::init;
pub use save_bin::save_bin;
pub use use_cmd::use_version;

use std::path::Path;

use crate::cli::args::{Command, ConfigAction};
use crate::core::config::Config;
use crate::engine::Context;
use crate::toolchain::{Invocation, ToolError, ToolOutput, ToolRunner};
use crate::ui::output;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &mut Context, runner: &dyn ToolRunner) -> Result<()> {
    let outcome = match command {
        Command::Init => init(ctx, runner),
        Command::Build => build(ctx, runner),
        Command::Create { name } => create(ctx, runner, &name),
        Command::Deps => deps(ctx, runner),
        Command::Activate { print } => activate(ctx, print),
        Command::Deactivate { print } => deactivate(ctx, print),
        Command::Use { version } => use_version(ctx, &version),
        Command::SaveBin => save_bin(ctx, runner),

        Command::Config { action } => {
            return match action {
                ConfigAction::Get { key } => config_get(ctx, &key),
                ConfigAction::Set { key, value } => config_set(ctx, &key, &value),
                ConfigAction::List => config_list(ctx),
            }
        }
        Command::Completion { shell } => return completion(shell),
    };

    if let Err(err) = outcome {
        output::failure(&err);
    }
    Ok(())
}

/// Run one external program, with debug tracing around it.
pub(crate) fn run_tool(
    ctx: &Context,
    runner: &dyn ToolRunner,
    invocation: Invocation,
) -> Result<ToolOutput, ToolError> {
    let verbosity = ctx.verbosity();
    output::debug(
        format!("running `{}` in {}", invocation, invocation.cwd.display()),
        verbosity,
    );

    let result = runner.run(&invocation)?;

    for (stream, text) in [("stdout", &result.stdout), ("stderr", &result.stderr)] {
        if !text.trim().is_empty() {
            output::debug(
                format!("{} of `{}`:\n{}", stream, invocation, output::indent(text.trim_end(), "  ")),
                verbosity,
            );
        }
    }

    Ok(result)
}

/// Create a directory and its parents, mode 0755 where modes apply.
pub(crate) fn create_dir_all(path: &Path) -> std::io::Result<()> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(path)
}

/// Load the user configuration for this context.
pub(crate) fn load_config(ctx: &Context) -> Result<Config, CommandError> {
    let paths = ctx.paths().map_err(CommandError::Home)?;
    Config::load(&ctx.env, &paths).map_err(CommandError::Config)
}
