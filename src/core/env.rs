//! core::env
//!
//! An explicit, in-memory view of the process environment.
//!
//! Commands never call `std::env::set_var`. They edit an [`Environment`]
//! owned by the execution context, and every child process is spawned with
//! exactly that environment.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from environment edits.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("cannot add '{}' to PATH: {source}", .path.display())]
    InvalidPathEntry {
        path: PathBuf,
        source: std::env::JoinPathsError,
    },
}

/// Environment variables, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    /// Get a variable's value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Set a variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Remove a variable, returning its previous value.
    pub fn unset(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    /// Iterate over all variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Resolve the home directory.
    ///
    /// Uses `HOME` from this environment, falling back to the platform
    /// lookup when it is unset or empty.
    pub fn home_dir(&self) -> Option<PathBuf> {
        self.get("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
    }

    /// Entries of `PATH`, in order. Empty when `PATH` is unset.
    pub fn path_entries(&self) -> Vec<PathBuf> {
        match self.get("PATH") {
            Some(path) if !path.is_empty() => std::env::split_paths(path).collect(),
            _ => Vec::new(),
        }
    }

    /// Put `dir` at the front of `PATH`.
    ///
    /// Existing occurrences of `dir` are dropped first, so prepending the
    /// same directory twice leaves a single entry.
    pub fn prepend_path(&mut self, dir: &Path) -> Result<(), EnvError> {
        let mut entries = vec![dir.to_path_buf()];
        entries.extend(self.path_entries().into_iter().filter(|e| e != dir));
        self.set_path_entries(entries, dir)
    }

    /// Remove every occurrence of `dir` from `PATH`.
    ///
    /// Returns true if anything was removed. `PATH` is unset when no
    /// entries remain.
    pub fn remove_path_entry(&mut self, dir: &Path) -> Result<bool, EnvError> {
        let entries = self.path_entries();
        let before = entries.len();
        let kept: Vec<PathBuf> = entries.into_iter().filter(|e| e != dir).collect();
        if kept.len() == before {
            return Ok(false);
        }
        if kept.is_empty() {
            self.unset("PATH");
        } else {
            self.set_path_entries(kept, dir)?;
        }
        Ok(true)
    }

    fn set_path_entries(&mut self, entries: Vec<PathBuf>, dir: &Path) -> Result<(), EnvError> {
        let joined = std::env::join_paths(entries).map_err(|source| EnvError::InvalidPathEntry {
            path: dir.to_path_buf(),
            source,
        })?;
        self.set("PATH", joined.to_string_lossy().into_owned());
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
