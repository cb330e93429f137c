//! Library exports for relink-cli.
//!
//! This module exports the CLI structure for use by tests and tooling
//! that render documentation from the command definitions.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
