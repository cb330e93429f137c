//! Command to create a directory if it does not exist.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use relink::fs::{host_platform, DirectoryPurger};
use std::path::PathBuf;

/// Create a directory and any missing parents.
#[derive(Args)]
pub struct EnsureDirCommand {
    /// Directory to create
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,
}

impl EnsureDirCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let platform = host_platform();
        DirectoryPurger::new(platform.as_ref()).ensure_directory_exists(&self.dir)?;
        Ok(())
    }
}
