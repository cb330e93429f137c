//! Command to test whether a path is absolute.

use crate::error::CliError;
use crate::utils::{load_configuration, path_normalizer, GlobalOptions};
use clap::Args;

/// Exit 0 if the path is absolute, 1 otherwise.
///
/// A drive or scheme prefix alone does not make a path absolute; the text
/// after it has to start with a separator.
#[derive(Args)]
pub struct IsAbsoluteCommand {
    /// Path to test
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl IsAbsoluteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        if path_normalizer(&config).is_absolute(&self.path) {
            if !global.quiet {
                println!("absolute");
            }
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} is not absolute",
                self.path
            )))
        }
    }
}
