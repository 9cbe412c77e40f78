//! create command - Create a new project directory and initialize it

use std::io;
use std::path::Path;

use super::{create_dir_all, init, CommandError};
use crate::engine::Context;
use crate::toolchain::ToolRunner;
use crate::ui::output;

/// Create a new virtual environment project.
///
/// Creates `name` (with parents) under the working directory, makes it the
/// context's working directory, and runs [`init`] there. The context keeps
/// pointing at the new directory afterwards.
///
/// A failed init step is reported and the project is still announced; the
/// directory exists either way. Only a failure to create the directory
/// is returned.
///
/// # Arguments
///
/// * `ctx` - Execution context; its `cwd` is updated
/// * `runner` - Runs `git` and `go`
/// * `name` - Directory to create, relative to the working directory
pub fn create(ctx: &mut Context, runner: &dyn ToolRunner, name: &Path) -> Result<(), CommandError> {
    if name.as_os_str().is_empty() {
        return Err(CommandError::CreateDir(io::Error::new(
            io::ErrorKind::InvalidInput,
            "project name cannot be empty",
        )));
    }

    let target = ctx.cwd.join(name);
    create_dir_all(&target).map_err(CommandError::CreateDir)?;

    ctx.change_dir(name);
    output::debug(
        format!("working directory is now {}", ctx.cwd.display()),
        ctx.verbosity(),
    );

    if let Err(err) = init(ctx, runner) {
        output::failure(&err);
    }

    output::success(
        format!("Virtual environment project '{}' created.", name.display()),
        ctx.verbosity(),
    );
    Ok(())
}
