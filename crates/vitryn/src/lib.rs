//! Vitryn content platform — umbrella crate.
//!
//! Re-exports the Vitryn components under short module names. The query,
//! collection, and bookmark layers are feature-gated; `full` enables
//! everything.

#![doc = include_str!("../README.md")]

pub use vitryn_content as content;
pub use vitryn_core as core;

#[cfg(feature = "query")]
pub use vitryn_query as query;

#[cfg(feature = "collection")]
pub use vitryn_collection as collection;

#[cfg(feature = "bookmarks")]
pub use vitryn_bookmarks as bookmarks;
