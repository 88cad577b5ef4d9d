//! The fixed-order query pipeline.
//!
//! Every listing runs the same four steps in the same order: search
//! filter, category filter, date sort, pagination. Keeping the order
//! fixed means a search result count never depends on which page the
//! reader happens to be on.

use serde::{Deserialize, Serialize};
use vitryn_content::ContentItem;

use crate::filter::{filter_by_category, filter_by_search, ALL_CATEGORIES};
use crate::paginate::{paginate, Paginated};
use crate::sort::{sort_by_date, SortOrder};

/// Parameters for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    /// Free-text search term; blank means no search filter.
    #[serde(default)]
    pub search: String,

    /// Selected category; [`ALL_CATEGORIES`] means no category filter.
    #[serde(default = "default_category")]
    pub category: String,

    /// Requested page, 1-based. Out-of-range values are clamped.
    #[serde(default = "default_page")]
    pub page: usize,

    /// Items per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Date sort direction.
    #[serde(default)]
    pub order: SortOrder,
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    6
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: default_category(),
            page: default_page(),
            page_size: default_page_size(),
            order: SortOrder::default(),
        }
    }
}

/// Run search, category, sort, and pagination over `items`.
///
/// The input is never reordered or mutated; the returned page owns
/// clones of the items it exposes.
pub fn run_query(items: &[ContentItem], params: &QueryParams) -> Paginated {
    let everything: Vec<&ContentItem> = items.iter().collect();
    let searched = filter_by_search(&everything, &params.search);
    let matched = filter_by_category(&searched, &params.category);
    let sorted = sort_by_date(&matched, params.order);

    log::debug!(
        "query: search={:?} category={:?} page={} matched {} of {} items",
        params.search,
        params.category,
        params.page,
        sorted.len(),
        items.len()
    );

    paginate(&sorted, params.page, params.page_size)
}

// ============================================================================
// Tests
// ============================================================================
