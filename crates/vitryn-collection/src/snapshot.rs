//! Observable listing state.

use std::fmt;

use serde::{Deserialize, Serialize};
use vitryn_content::ContentItem;
use vitryn_query::{page_window, PageMark, Paginated, ALL_CATEGORIES};

use crate::config::CollectionConfig;

/// What a listing should render right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Content is loading, or an edit is waiting out its debounce.
    Loading,
    /// The section failed to load; `error` carries the reason.
    Failed,
    /// Loaded fine, but the current filters match nothing.
    Empty,
    /// Results are ready to show.
    Ready,
}

impl Phase {
    /// Whether results are ready to show.
    pub fn is_ready(&self) -> bool {
        matches!(self, Phase::Ready)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Loading => "loading",
            Phase::Failed => "failed",
            Phase::Empty => "empty",
            Phase::Ready => "ready",
        };
        write!(f, "{name}")
    }
}

/// One complete view of a collection, published on every change.
///
/// Snapshots are self-contained: a renderer needs nothing else to draw
/// the listing, the pager, the category bar, and the error or empty
/// states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Search box contents (echoed immediately, before the debounce).
    pub search: String,

    /// Selected category (echoed immediately, before the debounce).
    pub category: String,

    /// Whether a load or a pending edit is in flight.
    pub loading: bool,

    /// Why the last load failed, if it did.
    pub error: Option<String>,

    /// The current results page.
    pub page: Paginated,

    /// Condensed pagination control for the current page.
    pub window: Vec<PageMark>,

    /// Category options derived from the loaded items, "All" first.
    pub categories: Vec<String>,

    /// Search suggestions derived from item metadata.
    pub suggestions: Vec<String>,

    /// The item opened in a detail view, if any.
    pub selected: Option<ContentItem>,
}

impl Snapshot {
    /// The state published before the first load completes.
    pub(crate) fn initial(config: &CollectionConfig) -> Self {
        let page = Paginated::empty(config.page_size);
        let window = page_window(page.page, page.total_pages, config.max_visible_pages);
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            loading: true,
            error: None,
            page,
            window,
            categories: vec![ALL_CATEGORIES.to_string()],
            suggestions: Vec::new(),
            selected: None,
        }
    }

    /// Derive the render phase from the snapshot fields.
    ///
    /// A failed load always wins over emptiness, and a snapshot is never
    /// both loading and failed: load failures clear the loading flag.
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.page.total_items == 0 {
            Phase::Empty
        } else {
            Phase::Ready
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
