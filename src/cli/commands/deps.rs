//! deps command - Tidy module dependencies

use super::{run_tool, CommandError};
use crate::engine::Context;
use crate::toolchain::{Invocation, ToolRunner};
use crate::ui::output;

/// Resolve and prune dependencies with `go mod tidy`.
pub fn deps(ctx: &Context, runner: &dyn ToolRunner) -> Result<(), CommandError> {
    run_tool(ctx, runner, Invocation::new(ctx, "go").args(["mod", "tidy"]))
        .map_err(CommandError::Tidy)?;
    output::success("Dependencies managed.", ctx.verbosity());
    Ok(())
}
