//! Configuration validation.
//!
//! Parsing already rejects unknown keys and wrong types; this module checks
//! the values themselves.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::Separator;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use relink::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { separator: Some(":".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref separator) = config.separator {
            Self::validate_separator(separator)?;
        }
        Ok(())
    }

    fn validate_separator(value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(Error::Validation {
                field: "separator".into(),
                message: "cannot be empty".into(),
            });
        }

        Separator::parse(value)
            .map(|_| ())
            .map_err(|message| Error::Validation {
                field: "separator".into(),
                message: format!("{message} (expected /, \\, slash, backslash or native)"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::PurgeConfig;

    #[test]
    fn test_validate_empty_config() {
        ConfigValidator::validate(&Config::default()).unwrap();
    }

    #[test]
    fn test_validate_accepted_separators() {
        for value in ["/", "\\", "slash", "BACKSLASH", "native", " / "] {
            let config = Config {
                separator: Some(value.to_string()),
                ..Default::default()
            };
            assert!(ConfigValidator::validate(&config).is_ok(), "{value:?}");
        }
    }

    #[test]
    fn test_validate_separator_empty() {
        let config = Config {
            separator: Some(String::new()),
            ..Default::default()
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_validate_separator_unknown() {
        let config = Config {
            separator: Some("//".to_string()),
            purge: Some(PurgeConfig {
                ensure_exists: Some(true),
            }),
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "separator"));
    }
}
