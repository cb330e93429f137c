//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, PurgeConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use relink::config::{Config, ConfigMerger};
///
/// let low = Config { separator: Some("/".to_string()), ..Default::default() };
/// let high = Config { separator: Some("\\".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.separator.as_deref(), Some("\\"));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Values present in `source` win; nested sections merge field by field.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.separator.is_some() {
            target.separator.clone_from(&source.separator);
        }

        if let Some(ref source_purge) = source.purge {
            target.purge = Some(match target.purge {
                Some(ref existing) => Self::merge_purge(existing, source_purge),
                None => source_purge.clone(),
            });
        }
    }

    fn merge_purge(target: &PurgeConfig, source: &PurgeConfig) -> PurgeConfig {
        PurgeConfig {
            ensure_exists: source.ensure_exists.or(target.ensure_exists),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/test/{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_overwrites() {
        let low = Config {
            separator: Some("/".to_string()),
            ..Default::default()
        };
        let high = Config {
            separator: Some("\\".to_string()),
            ..Default::default()
        };

        let result = ConfigMerger::merge(vec![make_source(1, low), make_source(2, high)]);
        assert_eq!(result.separator.as_deref(), Some("\\"));
    }

    #[test]
    fn test_merge_none_values_dont_overwrite() {
        let low = Config {
            separator: Some("/".to_string()),
            purge: Some(PurgeConfig {
                ensure_exists: Some(false),
            }),
        };
        let high = Config {
            purge: Some(PurgeConfig::default()),
            ..Default::default()
        };

        let result = ConfigMerger::merge(vec![make_source(1, low), make_source(2, high)]);
        assert_eq!(result.separator.as_deref(), Some("/"));
        assert_eq!(result.purge.unwrap().ensure_exists, Some(false));
    }

    #[test]
    fn test_merge_purge_field_by_field() {
        let mut target = Config::default();
        let source = Config {
            purge: Some(PurgeConfig {
                ensure_exists: Some(true),
            }),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.purge, source.purge);
    }

    #[test]
    fn test_merge_empty_sources() {
        assert_eq!(ConfigMerger::merge(Vec::new()), Config::default());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn config_strategy() -> impl Strategy<Value = Config> {
            (
                prop::option::of(prop_oneof![
                    Just("/".to_string()),
                    Just("\\".to_string()),
                    Just("native".to_string()),
                ]),
                prop::option::of(prop::option::of(any::<bool>())),
            )
                .prop_map(|(separator, purge)| Config {
                    separator,
                    purge: purge.map(|ensure_exists| PurgeConfig { ensure_exists }),
                })
        }

        proptest! {
            /// Merging an empty config changes nothing
            #[test]
            fn prop_merge_empty_is_right_identity(config in config_strategy()) {
                let mut result = config.clone();
                ConfigMerger::merge_into(&mut result, &Config::default());
                prop_assert_eq!(result, config);
            }

            /// Merging into an empty config reproduces the source's effective values
            #[test]
            fn prop_merge_into_empty_copies_values(config in config_strategy()) {
                let mut result = Config::default();
                ConfigMerger::merge_into(&mut result, &config);
                prop_assert_eq!(result.separator(), config.separator());
                prop_assert_eq!(result.ensure_exists(), config.ensure_exists());
            }

            /// Values set in the higher source always win
            #[test]
            fn prop_merge_source_wins(low in config_strategy(), high in config_strategy()) {
                let mut result = low.clone();
                ConfigMerger::merge_into(&mut result, &high);

                if high.separator.is_some() {
                    prop_assert_eq!(&result.separator, &high.separator);
                } else {
                    prop_assert_eq!(&result.separator, &low.separator);
                }

                let high_ensure = high.purge.as_ref().and_then(|p| p.ensure_exists);
                if let Some(value) = high_ensure {
                    prop_assert_eq!(result.ensure_exists(), value);
                } else {
                    prop_assert_eq!(result.ensure_exists(), low.ensure_exists());
                }
            }
        }
    }
}
