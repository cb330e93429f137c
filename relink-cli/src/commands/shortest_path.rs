//! Command to print the shortest relative path between two paths.

use crate::error::CliError;
use crate::utils::{load_configuration, path_resolver, GlobalOptions};
use clap::Args;

/// Print the shortest path from FROM to TO.
///
/// The result is relative to FROM's directory, or to FROM itself with
/// `--from-dir`. Both paths must be absolute.
#[derive(Args)]
pub struct ShortestPathCommand {
    /// Absolute starting path
    #[arg(value_name = "FROM")]
    pub from: String,

    /// Absolute destination path
    #[arg(value_name = "TO")]
    pub to: String,

    /// Treat FROM as a directory rather than a file
    #[arg(long)]
    pub from_dir: bool,
}

impl ShortestPathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let shortest =
            path_resolver(&config).shortest_path(&self.from, &self.to, self.from_dir)?;
        println!("{shortest}");
        Ok(())
    }
}
