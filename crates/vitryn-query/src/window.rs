//! Compact pagination controls.
//!
//! A listing with many pages cannot show a button per page. This module
//! computes the classic condensed pager: the first and last page are
//! always present, a contiguous run of pages surrounds the current one,
//! and ellipsis markers stand in for the elided ranges.
//!
//! ```text
//! current=6, total=20, max_visible=5:
//!   1 … 4 5 6 7 8 … 20
//! ```

use serde::{Deserialize, Serialize};

/// One slot in the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageMark {
    /// A direct link to a page.
    Page(usize),
    /// A gap in the page sequence.
    Ellipsis,
}

/// Compute the pager slots for `current` out of `total_pages`.
///
/// When everything fits within `max_visible`, all pages are listed.
/// Otherwise the result contains page 1, at most two [`PageMark::Ellipsis`]
/// markers, a run of `max_visible` pages centered on `current` (shifted
/// at either end so the run never leaves the valid range), and the last
/// page. `current` is assumed to be already clamped into range.
pub fn page_window(current: usize, total_pages: usize, max_visible: usize) -> Vec<PageMark> {
    let total_pages = total_pages.max(1);
    let max_visible = max_visible.max(1);
    let current = current.clamp(1, total_pages);

    if total_pages <= max_visible {
        return (1..=total_pages).map(PageMark::Page).collect();
    }

    let half = max_visible / 2;
    let start = current.saturating_sub(half).max(1);
    let end = start + max_visible - 1;
    let (start, end) = if end > total_pages {
        (total_pages + 1 - max_visible, total_pages)
    } else {
        (start, end)
    };

    let mut marks = Vec::with_capacity(max_visible + 4);
    if start > 1 {
        marks.push(PageMark::Page(1));
        if start > 2 {
            marks.push(PageMark::Ellipsis);
        }
    }
    marks.extend((start..=end).map(PageMark::Page));
    if end < total_pages {
        if end + 1 < total_pages {
            marks.push(PageMark::Ellipsis);
        }
        marks.push(PageMark::Page(total_pages));
    }
    marks
}

// ============================================================================
// Tests
// ============================================================================
