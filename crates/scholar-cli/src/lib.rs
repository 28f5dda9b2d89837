//! Scholar CLI library
//!
//! Argument parsing and command implementations behind the `scholar` binary.

pub mod cli;
pub mod commands;
