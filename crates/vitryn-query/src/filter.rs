//! Search and category filters.
//!
//! Both filters are no-ops for blank input: an empty search term or the
//! [`ALL_CATEGORIES`] sentinel returns the input sequence unchanged, so
//! callers can thread UI state through without special-casing "nothing
//! selected".

use std::collections::BTreeSet;

use vitryn_content::ContentItem;

/// Category sentinel meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Keep the items whose metadata matches `term`.
///
/// Matching is case-insensitive substring search over the item's
/// searchable fields (title, summary, tags, author, and the
/// case-study/research metadata). A blank term keeps everything.
pub fn filter_by_search<'a>(items: &[&'a ContentItem], term: &str) -> Vec<&'a ContentItem> {
    if term.trim().is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .copied()
        .filter(|item| item.matches_search(term))
        .collect()
}

/// Keep the items belonging to `category`.
///
/// An item belongs when its category, industry, or methodology equals
/// the target, or when the target appears among its tags. A blank
/// category or [`ALL_CATEGORIES`] keeps everything.
pub fn filter_by_category<'a>(items: &[&'a ContentItem], category: &str) -> Vec<&'a ContentItem> {
    if category.trim().is_empty() || category == ALL_CATEGORIES {
        return items.to_vec();
    }
    items
        .iter()
        .copied()
        .filter(|item| item.matches_category(category))
        .collect()
}

/// Collect the category options offered for a set of items.
///
/// Returns [`ALL_CATEGORIES`] first, then every distinct facet value
/// (category, kind-specific metadata, tags) in lexicographic order.
pub fn category_options(items: &[ContentItem]) -> Vec<String> {
    let mut facets = BTreeSet::new();
    for item in items {
        for facet in item.category_facets() {
            facets.insert(facet.to_string());
        }
    }

    let mut options = Vec::with_capacity(facets.len() + 1);
    options.push(ALL_CATEGORIES.to_string());
    options.extend(facets.into_iter().filter(|f| f != ALL_CATEGORIES));
    options
}

// ============================================================================
// Tests
// ============================================================================
