//! buildinfo CLI library.
//!
//! Argument parsing and command handlers for the `build-info` binary.

pub mod cli;
pub mod commands;
