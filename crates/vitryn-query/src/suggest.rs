//! Search suggestions drawn from item metadata.

use std::collections::HashSet;

use vitryn_content::ContentItem;

/// Default cap on the number of suggestions offered.
pub const SUGGESTION_LIMIT: usize = 10;

/// Collect distinct suggestion values from `items`, capped at `limit`.
///
/// Values are drawn from each item's metadata in a fixed field order
/// (category, industry, methodology, keywords, tags, author) and items
/// are visited in source order, so the same collection always produces
/// the same suggestions.
pub fn suggestions(items: &[ContentItem], limit: usize) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut collected = Vec::new();

    for item in items {
        for value in item.suggestion_values() {
            if seen.insert(value) {
                collected.push(value.to_string());
                if collected.len() >= limit {
                    return collected;
                }
            }
        }
    }

    collected
}

// ============================================================================
// Tests
// ============================================================================
