//! Main entry point for the relink CLI.
//!
//! This is the command-line interface for the relink path toolkit.
//! It provides commands for:
//! - `normalize`, `is-absolute`, `shortest-path`: path math
//! - `link`: create relocatable relative symlinks
//! - `empty`, `ensure-dir`: directory maintenance

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library log records to stderr at the requested verbosity
    if let Err(e) = relink::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("WARN: {e}");
    }

    let global = GlobalOptions {
        quiet: cli.quiet,
        separator: cli.separator,
    };

    let result = match cli.command {
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::IsAbsolute(cmd) => cmd.execute(&global),
        cli::Command::ShortestPath(cmd) => cmd.execute(&global),
        cli::Command::Link(cmd) => cmd.execute(&global),
        cli::Command::Empty(cmd) => cmd.execute(&global),
        cli::Command::EnsureDir(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet || e.exit_code() != 1 {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
