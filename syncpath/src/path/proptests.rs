//! Property-based tests across the path helpers.
//!
//! Note: normalize and levels already carry light property tests. This
//! module checks how the helpers agree with each other on canonical paths.

use super::dirname::dirname;
use super::hidden::is_hidden;
use super::levels::{folder_levels, level_of};
use super::normalize::normalize;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9_.-]{0,12}"
}

fn canonical_parts_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 1..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Canonical input is a fixed point of normalize
    #[test]
    fn canonical_paths_are_fixed_points(parts in canonical_parts_strategy()) {
        let path = parts.join("/");
        let normalized = normalize(&path).unwrap();
        prop_assert_eq!(normalized.as_str(), path.as_str());
    }

    // Appending `x/..` never changes the canonical form
    #[test]
    fn parent_ref_cancels_segment(parts in canonical_parts_strategy(), extra in segment_strategy()) {
        let path = parts.join("/");
        let detour = format!("{path}/{extra}/..");
        prop_assert_eq!(normalize(&detour).unwrap(), normalize(&path).unwrap());
    }

    // The deepest folder level is the dirname
    #[test]
    fn deepest_level_is_dirname(parts in canonical_parts_strategy()) {
        let path = parts.join("/");
        let levels = folder_levels(&path, false);
        match levels.last() {
            Some(deepest) => prop_assert_eq!(deepest, &dirname(&path)),
            None => prop_assert_eq!(dirname(&path), "/"),
        }
    }

    // One level per ancestor
    #[test]
    fn level_count_matches_depth(parts in canonical_parts_strategy()) {
        let path = parts.join("/");
        prop_assert_eq!(folder_levels(&path, false).len() + 1, level_of(&path));
    }

    // Hidden agrees with a direct scan of the segments
    #[test]
    fn hidden_matches_segment_scan(parts in canonical_parts_strategy(), hidden in prop::option::of(0usize..8)) {
        let mut parts = parts;
        if let Some(idx) = hidden {
            let idx = idx % parts.len();
            parts[idx] = format!(".{}", parts[idx]);
        }
        let path = parts.join("/");
        let expected = parts.iter().any(|p| p.starts_with('.') || p.starts_with('_'));
        prop_assert_eq!(is_hidden(&path, true, true).unwrap(), expected);
    }

    // A dot prefix is invisible to the underscore-only rule
    #[test]
    fn underscore_rule_ignores_dots(parts in canonical_parts_strategy()) {
        let dotted: Vec<String> = parts.iter().map(|p| format!(".{p}")).collect();
        let path = dotted.join("/");
        let expected = parts.iter().any(|p| p.starts_with('_'));
        prop_assert_eq!(is_hidden(&path, false, true).unwrap(), expected);
    }
}
