//! Content section kinds.
//!
//! Vitryn serves five content sections, each backed by its own source
//! collection but displayed through the same pipeline. [`ContentKind`]
//! identifies the section an item belongs to and carries the per-section
//! settings that differ between them: display label, asset base path,
//! and which extra facet participates in category derivation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use vitryn_core::Error;

/// The content sections served by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    /// Blog posts.
    Blog,
    /// Research papers.
    Research,
    /// Customer case studies.
    CaseStudy,
    /// Product documentation pages.
    Documentation,
    /// Help center articles.
    Help,
}

impl ContentKind {
    /// All kinds, in site navigation order.
    pub const ALL: [ContentKind; 5] = [
        ContentKind::Blog,
        ContentKind::Research,
        ContentKind::CaseStudy,
        ContentKind::Documentation,
        ContentKind::Help,
    ];

    /// Stable identifier used in routes and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Blog => "blog",
            ContentKind::Research => "research",
            ContentKind::CaseStudy => "case-study",
            ContentKind::Documentation => "documentation",
            ContentKind::Help => "help",
        }
    }

    /// Human-readable section label.
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Blog => "Blog",
            ContentKind::Research => "Research",
            ContentKind::CaseStudy => "Case Studies",
            ContentKind::Documentation => "Documentation",
            ContentKind::Help => "Help",
        }
    }

    /// Label for a single item of this section, as shown on cards.
    pub fn item_label(&self) -> &'static str {
        match self {
            ContentKind::Blog => "Blog Post",
            ContentKind::Research => "Research Paper",
            ContentKind::CaseStudy => "Case Study",
            ContentKind::Documentation => "Documentation Page",
            ContentKind::Help => "Help Article",
        }
    }

    /// Base path for resolving relative image references in this section.
    ///
    /// Relative image URLs in markdown bodies are rewritten under this
    /// root so each section keeps its assets in its own directory.
    pub fn asset_base(&self) -> &'static str {
        match self {
            ContentKind::Blog => "/assets/blog",
            ContentKind::Research => "/assets/research",
            ContentKind::CaseStudy => "/assets/case-studies",
            ContentKind::Documentation => "/assets/docs",
            ContentKind::Help => "/assets/help",
        }
    }

    /// Base path of the section's detail routes (`/blog/my-post`).
    pub fn route_base(&self) -> &'static str {
        match self {
            ContentKind::Blog => "/blog",
            ContentKind::Research => "/research",
            ContentKind::CaseStudy => "/case-studies",
            ContentKind::Documentation => "/docs",
            ContentKind::Help => "/help",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blog" => Ok(ContentKind::Blog),
            "research" => Ok(ContentKind::Research),
            "case-study" => Ok(ContentKind::CaseStudy),
            "documentation" => Ok(ContentKind::Documentation),
            "help" => Ok(ContentKind::Help),
            other => Err(Error::validation_field(
                "kind",
                format!("unknown content kind: {other}"),
            )),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
