//! Property-based tests for path handling.
//!
//! Note: The normalize module already has property tests for idempotence.
//! This module focuses on the shortest-path round trip.

use super::normalize::PathNormalizer;
use super::shortest::RelativePathResolver;
use super::types::Separator;
use proptest::prelude::*;

// Small alphabet so generated paths share ancestors often
fn path_component_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[a-c]", "[a-z0-9_-]{1,6}"]
}

fn root_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("/".to_string()),
        Just("c:/".to_string()),
        Just("d:\\".to_string()),
    ]
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    (root_strategy(), prop::collection::vec(path_component_strategy(), 1..6))
        .prop_map(|(root, parts)| format!("{root}{}", parts.join("/")))
}

fn shared_root_pair_strategy() -> impl Strategy<Value = (String, String)> {
    (
        root_strategy(),
        prop::collection::vec(path_component_strategy(), 0..4),
        prop::collection::vec(path_component_strategy(), 1..4),
        prop::collection::vec(path_component_strategy(), 1..4),
    )
        .prop_map(|(root, common, a, b)| {
            let mut from = common.clone();
            from.extend(a);
            let mut to = common;
            to.extend(b);
            (
                format!("{root}{}", from.join("/")),
                format!("{root}{}", to.join("\\")),
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Joining the shortest path onto from's directory lands on `to`
    #[test]
    fn shortest_path_round_trip(from in absolute_path_strategy(), to in absolute_path_strategy()) {
        for separator in [Separator::Slash, Separator::Backslash] {
            let normalizer = PathNormalizer::new(separator);
            let resolver = RelativePathResolver::with_normalizer(normalizer);

            let rel = resolver.shortest_path(&from, &to, false).unwrap();
            let from_dir = normalizer.normalize(&from).parent().to_string();
            prop_assert_eq!(normalizer.join(&from_dir, &rel), normalizer.normalize(&to));
        }
    }

    // Same property for paths that are guaranteed to share an ancestor
    #[test]
    fn shortest_path_round_trip_shared((from, to) in shared_root_pair_strategy()) {
        let normalizer = PathNormalizer::new(Separator::Slash);
        let resolver = RelativePathResolver::with_normalizer(normalizer);

        let rel = resolver.shortest_path(&from, &to, false).unwrap();
        prop_assert!(!normalizer.is_absolute(&rel) || from.starts_with('/'));
        let from_dir = normalizer.normalize(&from).parent().to_string();
        prop_assert_eq!(normalizer.join(&from_dir, &rel), normalizer.normalize(&to));
    }

    // Directory mode resolves relative to `from` itself
    #[test]
    fn shortest_path_directory_round_trip(from in absolute_path_strategy(), to in absolute_path_strategy()) {
        let normalizer = PathNormalizer::new(Separator::Slash);
        let resolver = RelativePathResolver::with_normalizer(normalizer);

        let rel = resolver.shortest_path(&from, &to, true).unwrap();
        let from_dir = normalizer.normalize_str(&from);
        prop_assert_eq!(normalizer.join(&from_dir, &rel), normalizer.normalize(&to));
    }

    // Output only ever uses the canonical separator
    #[test]
    fn shortest_path_uses_canonical_separator(from in absolute_path_strategy(), to in absolute_path_strategy()) {
        let resolver = RelativePathResolver::new(Separator::Backslash);
        let rel = resolver.shortest_path(&from, &to, false).unwrap();
        prop_assert!(!rel.contains('/'));
    }

    // Relative results never start with a separator
    #[test]
    fn shortest_path_is_relative_when_shortened(from in absolute_path_strategy(), to in absolute_path_strategy()) {
        let normalizer = PathNormalizer::new(Separator::Slash);
        let resolver = RelativePathResolver::with_normalizer(normalizer);
        let rel = resolver.shortest_path(&from, &to, false).unwrap();
        if rel != normalizer.normalize_str(&to) {
            prop_assert!(!normalizer.is_absolute(&rel));
        }
    }
}
