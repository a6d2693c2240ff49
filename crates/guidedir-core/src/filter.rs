//! Live search over the loaded guides.

use crate::model::GuideRecord;

/// Case-fold and trim a raw search query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Guides whose name contains `query`, ignoring case, in their original order.
///
/// An empty (or all-whitespace) query matches everything.
pub fn filter(all: &[GuideRecord], query: &str) -> Vec<GuideRecord> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return all.to_vec();
    }

    all.iter()
        .filter(|guide| guide.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
