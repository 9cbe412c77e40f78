//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! 1. `$GOV_CONFIG` if set
//! 2. `~/.gov/config.toml` (canonical write location)
//!
//! # Validation
//!
//! Config values are validated after parsing (e.g., `module_name` must be a
//! usable Go module path).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use super::ConfigError;
use crate::core::types::ModulePath;

/// User configuration.
///
/// # Example
///
/// ```toml
/// module_name = "example.com/scratch"
/// go_binary = "/opt/go/bin/go"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GovConfig {
    /// Module path passed to `go mod init` (default: "project")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,

    /// Binary copied by `save-bin` (default: "/usr/local/go/bin/go")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_binary: Option<PathBuf>,
}

impl GovConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = &self.module_name {
            ModulePath::new(name.as_str())
                .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;
        }

        if let Some(binary) = &self.go_binary {
            if binary.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "go_binary cannot be empty".into(),
                ));
            }
        }

        Ok(())
    }
}

/// Keys accepted by `gov config get/set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    ModuleName,
    GoBinary,
}

impl ConfigKey {
    /// All keys, in listing order.
    pub const ALL: [ConfigKey; 2] = [ConfigKey::ModuleName, ConfigKey::GoBinary];

    /// The key as written in `config.toml`.
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::ModuleName => "module_name",
            ConfigKey::GoBinary => "go_binary",
        }
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "module_name" | "module" => Ok(ConfigKey::ModuleName),
            "go_binary" | "binary" => Ok(ConfigKey::GoBinary),
            other => Err(ConfigError::UnknownKey(other.to_string())),
        }
    }
}

impl std::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config: GovConfig = toml::from_str(
            r#"
            module_name = "example.com/app"
            go_binary = "/opt/go/bin/go"
            "#,
        )
        .unwrap();
        assert_eq!(config.module_name.as_deref(), Some("example.com/app"));
        assert_eq!(config.go_binary, Some(PathBuf::from("/opt/go/bin/go")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_config_is_default() {
        let config: GovConfig = toml::from_str("").unwrap();
        assert_eq!(config, GovConfig::default());
    }

    #[test]
    fn invalid_module_name_rejected() {
        let config = GovConfig {
            module_name: Some("bad name".into()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn key_aliases() {
        assert_eq!("module".parse::<ConfigKey>().unwrap(), ConfigKey::ModuleName);
        assert_eq!("go_binary".parse::<ConfigKey>().unwrap(), ConfigKey::GoBinary);
        assert!("trunk".parse::<ConfigKey>().is_err());
    }
}
