//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`GoVersion`] - Validated Go release version
//! - [`ModulePath`] - Validated Go module path
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented.
//!
//! # Examples
//!
//! ```
//! use gov::core::types::{GoVersion, ModulePath};
//!
//! let version = GoVersion::new("go1.22.3").unwrap();
//! assert_eq!(version.as_str(), "1.22.3");
//!
//! let module = ModulePath::new("example.com/hello").unwrap();
//! assert_eq!(module.as_str(), "example.com/hello");
//!
//! assert!(GoVersion::new("latest").is_err());
//! assert!(ModulePath::new("has space").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid Go version: {0}")]
    InvalidGoVersion(String),

    #[error("invalid module path: {0}")]
    InvalidModulePath(String),
}

/// A validated Go release version.
///
/// Accepted forms are `MAJOR.MINOR`, `MAJOR.MINOR.PATCH`, optionally followed
/// by a pre-release tag (`rc1`, `beta2`), optionally prefixed with `go`.
/// The `go` prefix is stripped on construction.
///
/// # Example
///
/// ```
/// use gov::core::types::GoVersion;
///
/// let v = GoVersion::new("1.23rc1").unwrap();
/// assert_eq!(v.as_str(), "1.23rc1");
/// assert_eq!(v.toolchain_name(), "go1.23rc1");
///
/// assert!(GoVersion::new("").is_err());
/// assert!(GoVersion::new("1").is_err());
/// assert!(GoVersion::new("1.22.x").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GoVersion(String);

impl GoVersion {
    /// Create a new validated version.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidGoVersion` if the string is not a Go release.
    pub fn new(version: impl Into<String>) -> Result<Self, TypeError> {
        let version = version.into();
        let normalized = version.strip_prefix("go").unwrap_or(version.as_str());
        Self::validate(normalized)?;
        Ok(Self(normalized.to_string()))
    }

    fn validate(version: &str) -> Result<(), TypeError> {
        if version.is_empty() {
            return Err(TypeError::InvalidGoVersion(
                "version cannot be empty".into(),
            ));
        }

        let (numbers, prerelease) = match version.find(|c: char| c.is_ascii_alphabetic()) {
            Some(idx) => (&version[..idx], Some(&version[idx..])),
            None => (version, None),
        };

        let components: Vec<&str> = numbers.split('.').collect();
        if !(2..=3).contains(&components.len()) {
            return Err(TypeError::InvalidGoVersion(format!(
                "'{version}' must look like MAJOR.MINOR or MAJOR.MINOR.PATCH"
            )));
        }
        if components
            .iter()
            .any(|c| c.is_empty() || !c.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(TypeError::InvalidGoVersion(format!(
                "'{version}' has a non-numeric component"
            )));
        }

        if let Some(tag) = prerelease {
            let number = tag
                .strip_prefix("rc")
                .or_else(|| tag.strip_prefix("beta"))
                .ok_or_else(|| {
                    TypeError::InvalidGoVersion(format!(
                        "unknown pre-release tag '{tag}', expected rcN or betaN"
                    ))
                })?;
            if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
                return Err(TypeError::InvalidGoVersion(format!(
                    "pre-release tag '{tag}' must end in a number"
                )));
            }
        }

        Ok(())
    }

    /// Get the version without the `go` prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the toolchain name as Go spells it (`go1.22.3`).
    pub fn toolchain_name(&self) -> String {
        format!("go{}", self.0)
    }
}

impl TryFrom<String> for GoVersion {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<GoVersion> for String {
    fn from(version: GoVersion) -> Self {
        version.0
    }
}

impl std::fmt::Display for GoVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated Go module path, as passed to `go mod init`.
///
/// Module paths:
/// - Cannot be empty
/// - Cannot start with `-` or `/`, or end with `/`
/// - Cannot contain whitespace or control characters
/// - Cannot contain `.` or `..` path elements
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModulePath(String);

impl ModulePath {
    /// Create a new validated module path.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidModulePath` if the path is unusable.
    pub fn new(path: impl Into<String>) -> Result<Self, TypeError> {
        let path = path.into();
        Self::validate(&path)?;
        Ok(Self(path))
    }

    fn validate(path: &str) -> Result<(), TypeError> {
        if path.is_empty() {
            return Err(TypeError::InvalidModulePath(
                "module path cannot be empty".into(),
            ));
        }
        if path.starts_with('-') {
            return Err(TypeError::InvalidModulePath(
                "module path cannot start with '-'".into(),
            ));
        }
        if path.starts_with('/') || path.ends_with('/') {
            return Err(TypeError::InvalidModulePath(
                "module path cannot start or end with '/'".into(),
            ));
        }
        if path.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(TypeError::InvalidModulePath(
                "module path cannot contain whitespace".into(),
            ));
        }
        if path.split('/').any(|elem| elem == "." || elem == ".." || elem.is_empty()) {
            return Err(TypeError::InvalidModulePath(format!(
                "'{path}' has an empty, '.' or '..' element"
            )));
        }
        Ok(())
    }

    /// Get the module path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ModulePath {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ModulePath> for String {
    fn from(path: ModulePath) -> Self {
        path.0
    }
}

impl AsRef<str> for ModulePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModulePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
