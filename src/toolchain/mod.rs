//! toolchain
//!
//! Single interface for running external programs (`git`, `go`, `cp`).
//!
//! # Architecture
//!
//! This module is the **only doorway** to child processes. Commands describe
//! what to run as an [`Invocation`] and hand it to a [`ToolRunner`]; no
//! other module touches `std::process::Command`.
//!
//! - [`SystemRunner`] spawns real processes.
//! - [`mock::RecordingRunner`] records invocations for tests.
//!
//! # Invariants
//!
//! - A child's working directory and environment come from the
//!   [`crate::engine::Context`], never from the gov process itself
//! - Every run blocks until the child exits

pub mod mock;
mod runner;

pub use runner::{Invocation, SystemRunner, ToolError, ToolOutput, ToolRunner};
