//! build command - Build the project

use super::{run_tool, CommandError};
use crate::engine::Context;
use crate::toolchain::{Invocation, ToolRunner};
use crate::ui::output;

/// Build the project with `go build`.
pub fn build(ctx: &Context, runner: &dyn ToolRunner) -> Result<(), CommandError> {
    run_tool(ctx, runner, Invocation::new(ctx, "go").arg("build")).map_err(CommandError::Build)?;
    output::success("Project built successfully.", ctx.verbosity());
    Ok(())
}
