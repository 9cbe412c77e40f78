//! gov - Go virtual environment helper
//!
//! gov wraps `git`, `go` and `cp` to give a Go project a lightweight
//! "virtual environment": project scaffolding, builds, dependency tidying,
//! and a `~/.gov` directory holding a stashed toolchain binary.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, dispatches handlers)
//! - [`engine`] - Execution context carried through every command
//! - [`toolchain`] - Single doorway for spawning external programs
//! - [`core`] - Domain types, environment map, paths, and configuration
//! - [`ui`] - Output utilities
//!
//! # Invariants
//!
//! 1. Commands never mutate the process environment or working directory;
//!    both live in [`engine::Context`]
//! 2. Every external program is spawned through a [`toolchain::ToolRunner`]

pub mod cli;
pub mod core;
pub mod engine;
pub mod toolchain;
pub mod ui;
