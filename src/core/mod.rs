//! core
//!
//! Core domain types, environment, paths, and configuration for gov.
//!
//! # Modules
//!
//! - [`types`] - Strong types: GoVersion, ModulePath
//! - [`env`] - Explicit environment variable map
//! - [`paths`] - Centralized path routing for `~/.gov`
//! - [`config`] - Configuration schema and loading

pub mod config;
pub mod env;
pub mod paths;
pub mod types;
