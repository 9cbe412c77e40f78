//! ui
//!
//! User-facing output.
//!
//! All command output goes through [`output`] so that `--quiet` and
//! `--debug` are honored consistently.

pub mod output;
