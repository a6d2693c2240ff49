//! Property-based tests for search and rendering
//!
//! Uses proptest to check the filter and renderer invariants over arbitrary
//! guide lists and queries.

use guidedir_core::render::render;
use guidedir_core::{filter, GuideRecord, MemorySurface};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ]{1,24}")
        .expect("valid regex")
        .prop_filter("non-blank", |s| !s.trim().is_empty())
}

fn guides_strategy() -> impl Strategy<Value = Vec<GuideRecord>> {
    prop::collection::vec(name_strategy(), 0..30).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| GuideRecord::new(format!("guide-{i}"), name.trim()))
            .collect()
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z ]{0,4}").expect("valid regex")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Empty query returns the list unchanged
    #[test]
    fn empty_query_is_identity(guides in guides_strategy()) {
        prop_assert_eq!(filter(&guides, ""), guides);
    }

    /// Every match contains the query, and no non-match does
    #[test]
    fn filter_is_exact(guides in guides_strategy(), query in query_strategy()) {
        let needle = query.trim().to_lowercase();
        let matches = filter(&guides, &query);

        for guide in &guides {
            let hit = guide.name.to_lowercase().contains(&needle);
            prop_assert_eq!(hit, matches.contains(guide));
        }
    }

    /// Matches keep their relative order from the full list
    #[test]
    fn filter_preserves_order(guides in guides_strategy(), query in query_strategy()) {
        let matches = filter(&guides, &query);
        let positions: Vec<usize> = matches
            .iter()
            .map(|m| guides.iter().position(|g| g.folder == m.folder).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// Filtering is case-insensitive in the query
    #[test]
    fn query_case_does_not_matter(guides in guides_strategy(), query in query_strategy()) {
        prop_assert_eq!(
            filter(&guides, &query.to_uppercase()),
            filter(&guides, &query.to_lowercase())
        );
    }

    /// Rendering the same list twice leaves the same surface
    #[test]
    fn render_is_idempotent(guides in guides_strategy(), filtered in any::<bool>()) {
        let mut surface = MemorySurface::new();
        render(&mut surface, &guides, filtered, guides.len());
        let once = surface.clone();
        render(&mut surface, &guides, filtered, guides.len());

        prop_assert_eq!(&surface, &once);
        prop_assert_eq!(surface.entries.len(), guides.len());
    }
}
