//! core::config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! Searched in order:
//! 1. `$GOV_CONFIG` if set
//! 2. `~/.gov/config.toml` (canonical write location)
//!
//! A missing file is not an error: defaults are used. The environment is
//! read from the caller's [`Environment`], not the process.
//!
//! # Example
//!
//! ```no_run
//! use gov::core::config::Config;
//! use gov::core::env::Environment;
//! use gov::core::paths::GovPaths;
//!
//! let env = Environment::from_process();
//! let paths = GovPaths::from_env(&env).unwrap();
//! let config = Config::load(&env, &paths).unwrap();
//!
//! println!("Module: {}", config.module_name());
//! println!("Go binary: {}", config.go_binary().display());
//! ```

pub mod schema;

pub use schema::{ConfigKey, GovConfig};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::env::Environment;
use super::paths::GovPaths;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "GOV_CONFIG";

/// Module path used by `go mod init` when none is configured.
pub const DEFAULT_MODULE_NAME: &str = "project";

/// Binary copied by `save-bin` when none is configured.
pub const DEFAULT_GO_BINARY: &str = "/usr/local/go/bin/go";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Loaded configuration plus the file it belongs to.
#[derive(Debug, Clone)]
pub struct Config {
    /// Parsed values
    pub values: GovConfig,
    /// Where the config is read from and written to
    path: PathBuf,
    /// Whether `path` existed at load time
    loaded: bool,
}

impl Config {
    /// Load configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read,
    /// parsed, or validated.
    pub fn load(env: &Environment, paths: &GovPaths) -> Result<Config, ConfigError> {
        let path = Self::resolve_path(env, paths);
        if !path.exists() {
            return Ok(Config {
                values: GovConfig::default(),
                path,
                loaded: false,
            });
        }

        let values = Self::read_config(&path)?;
        values.validate()?;
        Ok(Config {
            values,
            path,
            loaded: true,
        })
    }

    /// The config file location: `$GOV_CONFIG`, else `~/.gov/config.toml`.
    pub fn resolve_path(env: &Environment, paths: &GovPaths) -> PathBuf {
        match env.get(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => paths.config_path(),
        }
    }

    fn read_config(path: &Path) -> Result<GovConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Write the current values back to the config file atomically.
    ///
    /// Creates parent directories if needed.
    pub fn save(&self) -> Result<&Path, ConfigError> {
        self.values.validate()?;
        Self::write_config_atomic(&self.path, &self.values)?;
        Ok(&self.path)
    }

    fn write_config_atomic(path: &Path, config: &GovConfig) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        // Write to temp file in same directory (for atomic rename)
        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessors with defaults
    // =========================================================================

    /// Module path for `go mod init`.
    ///
    /// Defaults to "project".
    pub fn module_name(&self) -> &str {
        self.values
            .module_name
            .as_deref()
            .unwrap_or(DEFAULT_MODULE_NAME)
    }

    /// Binary copied by `save-bin`.
    ///
    /// Defaults to `/usr/local/go/bin/go`.
    pub fn go_binary(&self) -> &Path {
        self.values
            .go_binary
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_GO_BINARY))
    }

    /// Effective value for a key, defaults applied.
    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::ModuleName => self.module_name().to_string(),
            ConfigKey::GoBinary => self.go_binary().display().to_string(),
        }
    }

    /// Set a key in memory. Call [`Config::save`] to persist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the value does not validate.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<(), ConfigError> {
        let mut updated = self.values.clone();
        match key {
            ConfigKey::ModuleName => updated.module_name = Some(value.to_string()),
            ConfigKey::GoBinary => updated.go_binary = Some(PathBuf::from(value)),
        }
        updated.validate()?;
        self.values = updated;
        Ok(())
    }

    /// The config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The path the config was loaded from, if the file existed.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.loaded.then_some(self.path.as_path())
    }
}
