//! Command to empty a directory.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use relink::fs::{host_platform, DirectoryPurger};
use std::path::PathBuf;

/// Remove everything inside a directory, keeping the directory itself.
#[derive(Args)]
pub struct EmptyCommand {
    /// Directory to empty
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Do not create the directory when it is missing
    #[arg(long)]
    pub no_create: bool,

    /// Print the removal counts as JSON
    #[arg(long)]
    pub json: bool,
}

impl EmptyCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let ensure_exists = !self.no_create && config.ensure_exists();

        let platform = host_platform();
        let report =
            DirectoryPurger::new(platform.as_ref()).empty_directory(&self.dir, ensure_exists)?;

        if self.json {
            let json = serde_json::to_string(&report)
                .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
            println!("{json}");
        } else if !global.quiet {
            println!("{}: {report}", self.dir.display());
        }
        Ok(())
    }
}
