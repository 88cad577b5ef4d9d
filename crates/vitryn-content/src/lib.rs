//! Content normalization, markdown rendering, and frontmatter extraction.
//!
//! This crate turns heterogeneous source records (blog posts, research
//! papers, case studies, documentation pages, help articles) into the
//! normalized [`ContentItem`] shape the rest of Vitryn operates on, and
//! renders markdown bodies into a styled block tree.
//!
//! # Modules
//!
//! - [`kind`]: the five content sections and their per-section settings
//! - [`item`]: the normalized [`ContentItem`] record
//! - [`normalize`]: raw record intake, validation, and slug assignment
//! - [`markdown`]: frontmatter splitting and markdown-to-block rendering
//!
//! # Design Philosophy
//!
//! **Normalization absorbs malformed input.** Sources are messy: missing
//! titles, unparseable dates, broken frontmatter. Everything downstream
//! (filtering, sorting, pagination) assumes well-formed [`ContentItem`]
//! values, so this crate is the boundary where problems are caught. Bad
//! records are repaired with placeholders and reported as
//! [`ContentIssue`] values rather than dropped, keeping collection counts
//! honest.
//!
//! # Example
//!
//! ```rust
//! use vitryn_content::{normalize, ContentKind, RawRecord};
//!
//! let raw = RawRecord {
//!     title: Some("Voice Interfaces".to_string()),
//!     date: Some("2024-02-01".to_string()),
//!     tags: vec!["Voice".to_string()],
//!     ..RawRecord::default()
//! };
//!
//! let (item, issues) = normalize(ContentKind::Blog, raw, None);
//! assert_eq!(item.slug, "voice-interfaces");
//! assert!(item.published_at.is_some());
//! assert!(issues.is_empty());
//! ```

pub mod item;
pub mod kind;
pub mod markdown;
pub mod normalize;

// Re-export commonly used types
pub use item::ContentItem;
pub use kind::ContentKind;
pub use markdown::{
    render_document, split_frontmatter, Block, Document, Frontmatter, Inline, OutlineEntry,
    RenderOptions,
};
pub use normalize::{
    normalize, normalize_all, normalize_sources, ContentIssue, Normalized, RawRecord,
};
