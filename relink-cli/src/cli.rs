//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, EmptyCommand, EnsureDirCommand, IsAbsoluteCommand, LinkCommand,
    NormalizeCommand, ShortestPathCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};

/// Path normalization, shortest relative paths and relocatable symlinks.
#[derive(Parser)]
#[command(name = "relink")]
#[command(
    version,
    about = "Normalize paths and create relocatable relative symlinks",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Canonical separator for printed paths (/, \, slash, backslash, native)
    #[arg(long, value_name = "SEP", global = true, env = "RELINK_SEPARATOR")]
    pub separator: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the normalized form of one or more paths
    Normalize(NormalizeCommand),

    /// Exit 0 if a path is absolute, 1 otherwise
    IsAbsolute(IsAbsoluteCommand),

    /// Print the shortest relative path between two absolute paths
    ShortestPath(ShortestPathCommand),

    /// Create a symlink that stores a relative path to its target
    Link(LinkCommand),

    /// Remove everything inside a directory
    Empty(EmptyCommand),

    /// Create a directory and its parents if missing
    EnsureDir(EnsureDirCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
