//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading and path math setup.

use crate::error::CliError;
use relink::config::{Config, ConfigBuilder};
use relink::path::{PathNormalizer, RelativePathResolver, Separator};

/// Global CLI options shared across all commands.
///
/// `--verbose` only sets the logger level in `main`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Separator override from the command line.
    pub separator: Option<String>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref separator) = global.separator {
        Separator::parse(separator).map_err(CliError::InvalidArguments)?;
        builder = builder.with_config(Config {
            separator: Some(separator.clone()),
            ..Default::default()
        });
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Normalizer using the configured separator.
pub fn path_normalizer(config: &Config) -> PathNormalizer {
    PathNormalizer::new(config.separator())
}

/// Shortest-path resolver using the configured separator.
pub fn path_resolver(config: &Config) -> RelativePathResolver {
    RelativePathResolver::with_normalizer(path_normalizer(config))
}
