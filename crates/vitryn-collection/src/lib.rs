//! Content loading and listing state for Vitryn sections.
//!
//! This crate connects content sources to the query pipeline and wraps
//! the result in an observable state machine:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                   vitryn-collection                     │
//! ├─────────────────────────────────────────────────────────┤
//! │  ContentSource trait                                    │
//! │  ├── FsSource (markdown directory, frontmatter)         │
//! │  └── StaticSource (in-memory fixtures)                  │
//! ├─────────────────────────────────────────────────────────┤
//! │  Collection (debounced search/category, paging,         │
//! │              selection; broadcasts Snapshots)           │
//! │  Snapshot / Phase (everything a renderer needs)         │
//! ├─────────────────────────────────────────────────────────┤
//! │  Platform trait (scroll, clipboard; NullPlatform)       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use vitryn_collection::{Collection, CollectionConfig, FsSource};
//! use vitryn_content::ContentKind;
//!
//! let collection = Collection::new(CollectionConfig::default());
//! collection.load(&FsSource::new(ContentKind::Blog, "content/blog")).await;
//!
//! collection.set_search_term("voice").await;
//! let snapshot = collection.snapshot();
//! ```

pub mod collection;
pub mod config;
pub mod fs;
pub mod platform;
pub mod snapshot;
pub mod source;

// Re-exports
pub use collection::Collection;
pub use config::CollectionConfig;
pub use fs::{
    load_blog_posts, load_case_studies, load_documentation, load_help, load_research, FsSource,
};
pub use platform::{NullPlatform, Platform};
pub use snapshot::{Phase, Snapshot};
pub use source::{load_all, ContentSource, StaticSource};
