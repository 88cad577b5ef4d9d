//! Stable date ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use vitryn_content::ContentItem;

/// Direction for the date sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Most recent items first (the listing default).
    #[default]
    NewestFirst,
    /// Oldest items first.
    OldestFirst,
}

/// Sort items by publication date without touching the input.
///
/// The sort is stable: items sharing a timestamp keep their relative
/// source order. Undated items sort after dated ones in both
/// directions, so drafts and evergreen pages never crowd out the top of
/// a listing.
pub fn sort_by_date<'a>(items: &[&'a ContentItem], order: SortOrder) -> Vec<&'a ContentItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| compare_dates(a, b, order));
    sorted
}

fn compare_dates(a: &ContentItem, b: &ContentItem, order: SortOrder) -> Ordering {
    match (a.published_at, b.published_at) {
        (Some(a), Some(b)) => match order {
            SortOrder::NewestFirst => b.cmp(&a),
            SortOrder::OldestFirst => a.cmp(&b),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use vitryn_content::{ContentItem, ContentKind};

    fn dated(slug: &str, date: &str) -> ContentItem {
        ContentItem::builder(ContentKind::Blog)
            .slug(slug)
            .title(slug)
            .date(date)
            .build()
    }

    fn undated(slug: &str) -> ContentItem {
        ContentItem::builder(ContentKind::Blog)
            .slug(slug)
            .title(slug)
            .build()
    }

    fn slugs<'a>(items: &[&'a ContentItem]) -> Vec<&'a str> {
        items.iter().map(|i| i.slug.as_str()).collect()
    }

    #[test]
    fn test_newest_first_is_default() {
        assert_eq!(SortOrder::default(), SortOrder::NewestFirst);
    }

    #[test]
    fn test_sort_newest_first() {
        let items = vec![
            dated("old", "2022-01-01"),
            dated("new", "2024-01-01"),
            dated("mid", "2023-01-01"),
        ];
        let refs: Vec<&ContentItem> = items.iter().collect();
        let sorted = sort_by_date(&refs, SortOrder::NewestFirst);
        assert_eq!(slugs(&sorted), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_sort_oldest_first() {
        let items = vec![dated("b", "2024-01-01"), dated("a", "2022-01-01")];
        let refs: Vec<&ContentItem> = items.iter().collect();
        let sorted = sort_by_date(&refs, SortOrder::OldestFirst);
        assert_eq!(slugs(&sorted), vec!["a", "b"]);
    }

    #[test]
    fn test_sort_does_not_touch_input() {
        let items = vec![dated("old", "2022-01-01"), dated("new", "2024-01-01")];
        let refs: Vec<&ContentItem> = items.iter().collect();
        let _ = sort_by_date(&refs, SortOrder::NewestFirst);
        assert_eq!(slugs(&refs), vec!["old", "new"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let items = vec![
            dated("first", "2024-01-01"),
            dated("second", "2024-01-01"),
            dated("third", "2024-01-01"),
        ];
        let refs: Vec<&ContentItem> = items.iter().collect();
        let sorted = sort_by_date(&refs, SortOrder::NewestFirst);
        assert_eq!(slugs(&sorted), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_undated_items_sort_last_both_directions() {
        let items = vec![
            undated("draft"),
            dated("old", "2022-01-01"),
            dated("new", "2024-01-01"),
        ];
        let refs: Vec<&ContentItem> = items.iter().collect();

        let newest = sort_by_date(&refs, SortOrder::NewestFirst);
        assert_eq!(slugs(&newest), vec!["new", "old", "draft"]);

        let oldest = sort_by_date(&refs, SortOrder::OldestFirst);
        assert_eq!(slugs(&oldest), vec!["old", "new", "draft"]);
    }

    #[test]
    fn test_sort_order_serialization() {
        let json = serde_json::to_string(&SortOrder::NewestFirst).unwrap();
        assert_eq!(json, "\"newest_first\"");
        let parsed: SortOrder = serde_json::from_str("\"oldest_first\"").unwrap();
        assert_eq!(parsed, SortOrder::OldestFirst);
    }
}
