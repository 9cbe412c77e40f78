//! use command - Select a Go version for the virtual environment

use super::CommandError;
use crate::core::types::GoVersion;
use crate::engine::Context;
use crate::ui::output;

/// Select a Go version.
///
/// Only acknowledges the version, echoing it exactly as given; nothing is
/// downloaded and the active toolchain does not change. Under `--debug` the
/// version is also checked against Go's release naming.
pub fn use_version(ctx: &Context, version: &str) -> Result<(), CommandError> {
    match GoVersion::new(version) {
        Ok(parsed) => output::debug(
            format!("{} is not installed by gov", parsed.toolchain_name()),
            ctx.verbosity(),
        ),
        Err(err) => output::debug(
            format!("'{version}' is not a Go release: {err}"),
            ctx.verbosity(),
        ),
    }
    output::success(
        format!("Using Go version {version} in virtual environment."),
        ctx.verbosity(),
    );
    Ok(())
}
