//! Markdown rendering and frontmatter utilities.
//!
//! Two concerns live here:
//!
//! - [`frontmatter`]: splitting the YAML metadata block off a markdown
//!   document and deserializing it into caller-defined types
//! - [`render`]: turning a markdown body into a tree of [`Block`] values
//!   with styling hints, heading anchors, and rewritten image paths
//!
//! Both degrade instead of failing: broken YAML is logged and skipped,
//! and the renderer produces whatever structure it can recover from a
//! malformed body. Raw HTML embedded in markdown is ignored.

pub mod frontmatter;
pub mod render;

// Re-export key types and functions
pub use frontmatter::{split_frontmatter, Frontmatter};
pub use render::{
    first_paragraph, inline_text, reading_time_minutes, render_blocks, render_document,
    rewrite_asset_url, word_count, Block, Document, Inline, OutlineEntry, RenderOptions,
};
