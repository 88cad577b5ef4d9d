//! Pagination over filtered, sorted items.

use serde::{Deserialize, Serialize};
use vitryn_content::ContentItem;

/// One page of results plus the bookkeeping a pager needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated {
    /// Items on this page, in listing order.
    pub items: Vec<ContentItem>,

    /// The page actually served (after clamping).
    pub page: usize,

    /// Requested page size.
    pub page_size: usize,

    /// Items across all pages.
    pub total_items: usize,

    /// Page count; at least 1 even for an empty result set.
    pub total_pages: usize,
}

impl Paginated {
    /// An empty first page, used before any content has loaded.
    pub fn empty(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size: page_size.max(1),
            total_items: 0,
            total_pages: 1,
        }
    }

    /// Whether a later page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether an earlier page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether this page carries no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slice one page out of `items`.
///
/// The requested page is clamped into `1..=total_pages`, so asking for
/// page 0 serves the first page and asking past the end serves the last
/// one. A zero `page_size` is treated as 1.
pub fn paginate(items: &[&ContentItem], page: usize, page_size: usize) -> Paginated {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_items);
    let items = items
        .get(start..end)
        .unwrap_or_default()
        .iter()
        .map(|item| (*item).clone())
        .collect();

    Paginated {
        items,
        page,
        page_size,
        total_items,
        total_pages,
    }
}

// ============================================================================
// Tests
// ============================================================================
