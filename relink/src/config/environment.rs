//! Environment variable handling for configuration overrides.
//!
//! This module provides support for RELINK_* environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::Separator;
use std::env;

/// Environment variable overriding the separator.
pub const ENV_SEPARATOR: &str = "RELINK_SEPARATOR";

/// Environment variable overriding `purge.ensure_exists`.
pub const ENV_ENSURE_EXISTS: &str = "RELINK_ENSURE_EXISTS";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use relink::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unrecognized separator
    /// or an invalid boolean.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(value) = env::var(ENV_SEPARATOR) {
            Separator::parse(&value).map_err(|message| Error::Validation {
                field: ENV_SEPARATOR.into(),
                message,
            })?;
            config.separator = Some(value);
        }

        if let Ok(value) = env::var(ENV_ENSURE_EXISTS) {
            let purge = config.purge.get_or_insert_with(Default::default);
            purge.ensure_exists = Some(Self::parse_bool(ENV_ENSURE_EXISTS, &value)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
