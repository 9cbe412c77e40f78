//! activate / deactivate commands - Toggle the virtual environment overrides
//!
//! Both commands edit the context environment only. A child process cannot
//! change its parent shell, so with `--print` they also write the equivalent
//! POSIX shell statements to stdout for use with `eval`.

use super::CommandError;
use crate::engine::Context;
use crate::ui::output;

/// Set `GOROOT` to `~/.gov/go` and put `~/.gov/go/bin` first on `PATH`.
///
/// An existing `~/.gov/go/bin` entry is moved to the front rather than
/// added again, so activating twice leaves `PATH` unchanged.
pub fn activate(ctx: &mut Context, print: bool) -> Result<(), CommandError> {
    let paths = ctx.paths().map_err(CommandError::Home)?;
    let goroot = paths.goroot().to_string_lossy().into_owned();

    ctx.env
        .prepend_path(&paths.goroot_bin())
        .map_err(CommandError::UpdatePath)?;
    ctx.env.set("GOROOT", goroot.as_str());

    if !paths.goroot_bin().is_dir() {
        output::warn(
            format!("{} does not exist; go will not be found there", paths.goroot_bin().display()),
            ctx.verbosity(),
        );
    }

    let message = "Virtual environment activated.";
    if print {
        println!("export GOROOT={}", shell_quote(&goroot));
        if let Some(path) = ctx.env.get("PATH") {
            println!("export PATH={}", shell_quote(path));
        }
        output::note(message, ctx.verbosity());
    } else {
        output::success(message, ctx.verbosity());
    }
    Ok(())
}

/// Unset `GOROOT` and drop `~/.gov/go/bin` from `PATH`.
pub fn deactivate(ctx: &mut Context, print: bool) -> Result<(), CommandError> {
    let paths = ctx.paths().map_err(CommandError::Home)?;

    ctx.env.unset("GOROOT");
    let path_changed = ctx
        .env
        .remove_path_entry(&paths.goroot_bin())
        .map_err(CommandError::UpdatePath)?;

    let message = "Virtual environment deactivated.";
    if print {
        println!("unset GOROOT");
        if path_changed {
            match ctx.env.get("PATH") {
                Some(path) => println!("export PATH={}", shell_quote(path)),
                None => println!("unset PATH"),
            }
        }
        output::note(message, ctx.verbosity());
    } else {
        output::success(message, ctx.verbosity());
    }
    Ok(())
}

/// Quote a value for POSIX shells.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
