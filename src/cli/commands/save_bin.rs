//! save-bin command - Stash the Go binary in ~/.gov

use super::{create_dir_all, run_tool, CommandError};
use crate::core::config::Config;
use crate::engine::Context;
use crate::toolchain::{Invocation, ToolRunner};
use crate::ui::output;

/// Copy the configured Go binary to `~/.gov/go`.
///
/// Creates `~/.gov` first. The copy is done by `cp`, so it follows `cp`'s
/// rules (e.g. an existing `~/.gov/go` directory receives the file).
pub fn save_bin(ctx: &Context, runner: &dyn ToolRunner) -> Result<(), CommandError> {
    let paths = ctx.paths().map_err(CommandError::Home)?;
    create_dir_all(paths.gov_dir()).map_err(CommandError::CreateGovDir)?;

    let config = Config::load(&ctx.env, &paths).map_err(CommandError::Config)?;
    let invocation = Invocation::new(ctx, "cp")
        .path_arg(config.go_binary())
        .path_arg(&paths.saved_binary());

    run_tool(ctx, runner, invocation).map_err(CommandError::CopyBinary)?;
    output::success("Go binary saved to .gov directory.", ctx.verbosity());
    Ok(())
}
