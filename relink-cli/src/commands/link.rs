//! Command to create a relative symlink.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use relink::fs::{host_platform, RelativeSymlinkCreator};
use std::path::PathBuf;

/// Create LINK pointing at TARGET through the shortest relative path.
#[derive(Args)]
pub struct LinkCommand {
    /// Existing file or directory the link points at (relative paths are
    /// read from the link's directory)
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Location of the new link
    #[arg(value_name = "LINK")]
    pub link: PathBuf,
}

impl LinkCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let platform = host_platform();
        let created = RelativeSymlinkCreator::new(platform.as_ref())
            .create_relative_symlink(&self.target, &self.link)?;

        if !global.quiet {
            println!("{created}");
        }
        Ok(())
    }
}
