//! Search, filter, sort, and pagination pipeline for Vitryn content.
//!
//! This crate provides the pure query logic that every content listing
//! shares: a linear-scan search filter, a category filter, a stable
//! date sort, and pagination. The steps compose in a fixed order via
//! [`run_query`]:
//!
//! ```text
//! items ──▶ search filter ──▶ category filter ──▶ date sort ──▶ paginate
//! ```
//!
//! Each step borrows the input and returns a new sequence; call sites
//! never observe their collections being reordered or shrunk. The final
//! [`Paginated`] page owns clones of just the items it exposes.
//!
//! Alongside the pipeline live two presentation helpers: [`page_window`]
//! computes a compact pagination control (`1 … 4 5 6 … 20`) and
//! [`suggestions`] collects deduplicated search suggestions from item
//! metadata.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitryn_query::{run_query, QueryParams};
//!
//! let params = QueryParams {
//!     search: "voice".to_string(),
//!     ..Default::default()
//! };
//! let page = run_query(&items, &params);
//! println!("{} of {} items", page.items.len(), page.total_items);
//! ```

pub mod filter;
pub mod paginate;
pub mod pipeline;
pub mod sort;
pub mod suggest;
pub mod window;

// Re-exports
pub use filter::{category_options, filter_by_category, filter_by_search, ALL_CATEGORIES};
pub use paginate::{paginate, Paginated};
pub use pipeline::{run_query, QueryParams};
pub use sort::{sort_by_date, SortOrder};
pub use suggest::{suggestions, SUGGESTION_LIMIT};
pub use window::{page_window, PageMark};
