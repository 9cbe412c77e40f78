//! core::paths
//!
//! Centralized path routing for gov storage locations.
//!
//! # Storage Layout
//!
//! All gov data lives under `$HOME/.gov/`:
//! - `go` - Saved toolchain binary (written by `save-bin`), and the
//!   `GOROOT` that `activate` points at
//! - `config.toml` - User configuration
//!
//! No code outside this module should compute `*.join(".gov")` paths.
//!
//! # Example
//!
//! ```
//! use gov::core::paths::GovPaths;
//! use std::path::{Path, PathBuf};
//!
//! let paths = GovPaths::from_home(Path::new("/home/alice"));
//!
//! assert_eq!(paths.gov_dir(), Path::new("/home/alice/.gov"));
//! assert_eq!(paths.goroot_bin(), PathBuf::from("/home/alice/.gov/go/bin"));
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

use super::env::Environment;

/// Errors resolving gov paths.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("home directory not found")]
    NoHomeDir,
}

/// Centralized path routing for gov storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GovPaths {
    gov_dir: PathBuf,
}

impl GovPaths {
    /// Name of the configuration directory under `$HOME`.
    pub const DIR_NAME: &'static str = ".gov";

    /// Create paths rooted at an explicit gov directory.
    pub fn new(gov_dir: PathBuf) -> Self {
        Self { gov_dir }
    }

    /// Create paths for the given home directory.
    pub fn from_home(home: &Path) -> Self {
        Self::new(home.join(Self::DIR_NAME))
    }

    /// Create paths from the home directory recorded in `env`.
    pub fn from_env(env: &Environment) -> Result<Self, PathError> {
        let home = env.home_dir().ok_or(PathError::NoHomeDir)?;
        Ok(Self::from_home(&home))
    }

    /// The configuration directory (`~/.gov`).
    pub fn gov_dir(&self) -> &Path {
        &self.gov_dir
    }

    /// The `GOROOT` assigned by `activate`.
    pub fn goroot(&self) -> PathBuf {
        self.gov_dir.join("go")
    }

    /// The directory `activate` prepends to `PATH`.
    pub fn goroot_bin(&self) -> PathBuf {
        self.goroot().join("bin")
    }

    /// Destination of `save-bin`.
    ///
    /// This is the same location as [`GovPaths::goroot`]: a saved binary
    /// and an activated root cannot coexist.
    pub fn saved_binary(&self) -> PathBuf {
        self.gov_dir.join("go")
    }

    /// Canonical config file location.
    pub fn config_path(&self) -> PathBuf {
        self.gov_dir.join("config.toml")
    }
}
