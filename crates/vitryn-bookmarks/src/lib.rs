//! Persistent reader bookmarks for Vitryn content.
//!
//! Readers can save case studies and research publications for later.
//! The lists live in a single-file embedded [redb] database, one JSON
//! slug array per list, and survive restarts. Writes are transactional
//! and a damaged list value degrades to empty instead of erroring.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitryn_bookmarks::{BookmarkList, BookmarkStore};
//!
//! let store = BookmarkStore::open("state/bookmarks.redb")?;
//! store.toggle(BookmarkList::Research, "asr-survey")?;
//! assert!(store.contains(BookmarkList::Research, "asr-survey")?);
//! ```

pub mod error;
pub mod store;

// Re-exports
pub use error::{Error, Result};
pub use store::{BookmarkList, BookmarkStore};
