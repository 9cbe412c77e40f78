//! init command - Initialize a Go project in the working directory

use super::{load_config, run_tool, CommandError};
use crate::core::types::ModulePath;
use crate::engine::Context;
use crate::toolchain::{Invocation, ToolRunner};
use crate::ui::output;

/// Module manifest whose presence skips `go mod init`.
pub const GO_MOD: &str = "go.mod";

/// Initialize a Go project.
///
/// Runs `git init`, then `go mod init <module>` when the working directory
/// has no `go.mod`. The module comes from the `module_name` config key.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `runner` - Runs `git` and `go`
pub fn init(ctx: &Context, runner: &dyn ToolRunner) -> Result<(), CommandError> {
    let verbosity = ctx.verbosity();

    run_tool(ctx, runner, Invocation::new(ctx, "git").arg("init")).map_err(CommandError::GitInit)?;
    output::success("Git repository initialized.", verbosity);

    // An unreadable go.mod counts as present, like any other stat failure.
    let manifest = ctx.cwd.join(GO_MOD);
    if !matches!(manifest.try_exists(), Ok(false)) {
        output::debug(
            format!("{} exists, skipping go mod init", manifest.display()),
            verbosity,
        );
        return Ok(());
    }

    let config = load_config(ctx)?;
    let module = ModulePath::new(config.module_name()).map_err(CommandError::InvalidModule)?;

    run_tool(
        ctx,
        runner,
        Invocation::new(ctx, "go").args(["mod", "init", module.as_str()]),
    )
    .map_err(CommandError::ModInit)?;
    output::success("Go module initialized.", verbosity);

    Ok(())
}
