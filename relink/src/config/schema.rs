//! Configuration schema definitions.
//!
//! Every field is optional so that partial files from several locations can
//! be merged; the accessors on [`Config`] supply the built-in defaults.

use serde::{Deserialize, Serialize};

use crate::path::Separator;

/// Default for [`PurgeConfig::ensure_exists`].
pub const DEFAULT_ENSURE_EXISTS: bool = true;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use relink::config::{Config, PurgeConfig};
/// use relink::path::Separator;
///
/// let config = Config {
///     separator: Some("\\".to_string()),
///     purge: Some(PurgeConfig { ensure_exists: Some(false) }),
/// };
/// assert_eq!(config.separator(), Separator::Backslash);
/// assert!(!config.ensure_exists());
///
/// let defaults = Config::default();
/// assert_eq!(defaults.separator(), Separator::native());
/// assert!(defaults.ensure_exists());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Canonical separator for normalized output: `/`, `\`, `slash`,
    /// `backslash` or `native`.
    pub separator: Option<String>,

    /// Directory purge settings.
    pub purge: Option<PurgeConfig>,
}

/// Settings for emptying directories.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PurgeConfig {
    /// Create the directory before emptying it when it is missing.
    pub ensure_exists: Option<bool>,
}

impl Config {
    /// The configured separator, or the host separator.
    ///
    /// Unrecognized values fall back to the host separator; run
    /// [`crate::config::ConfigValidator`] to reject them instead.
    #[must_use]
    pub fn separator(&self) -> Separator {
        self.separator
            .as_deref()
            .and_then(|s| Separator::parse(s).ok())
            .unwrap_or_default()
    }

    /// Whether purging creates a missing directory first.
    #[must_use]
    pub fn ensure_exists(&self) -> bool {
        self.purge
            .as_ref()
            .and_then(|p| p.ensure_exists)
            .unwrap_or(DEFAULT_ENSURE_EXISTS)
    }
}
