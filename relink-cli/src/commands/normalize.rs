//! Command to print normalized paths.

use crate::error::CliError;
use crate::utils::{load_configuration, path_normalizer, GlobalOptions};
use clap::Args;
use relink::NormalizedPath;
use serde::Serialize;

/// Print the normalized form of one or more paths.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Paths to normalize (any mix of / and \)
    #[arg(value_name = "PATH", required = true, allow_hyphen_values = true)]
    pub paths: Vec<String>,

    /// Print prefix, absoluteness and segments as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct NormalizedEntry<'a> {
    input: &'a str,
    normalized: String,
    #[serde(flatten)]
    parts: NormalizedPath,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let normalizer = path_normalizer(&config);

        if self.json {
            let entries: Vec<NormalizedEntry<'_>> = self
                .paths
                .iter()
                .map(|input| {
                    let parts = normalizer.normalize(input);
                    NormalizedEntry {
                        input,
                        normalized: parts.to_string(),
                        parts,
                    }
                })
                .collect();
            let json = serde_json::to_string_pretty(&entries)
                .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
            println!("{json}");
        } else {
            for input in &self.paths {
                println!("{}", normalizer.normalize_str(input));
            }
        }

        Ok(())
    }
}
