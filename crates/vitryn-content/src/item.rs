//! The normalized content record.
//!
//! [`ContentItem`] is the unit of display across all five sections. Every
//! source record, whatever its shape, is normalized into this struct (see
//! [`crate::normalize`]) before the query pipeline touches it. Fields that
//! only apply to some sections (`industry` for case studies, `methodology`
//! for research) are optional and simply absent elsewhere.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::kind::ContentKind;
use crate::markdown::{self, Document, RenderOptions};

/// A normalized piece of displayable content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    // Identity
    /// Section this item belongs to.
    pub kind: ContentKind,
    /// Stable identifier, unique within its section.
    pub slug: String,

    // Display fields
    /// Display title (required; normalization substitutes a placeholder
    /// when the source record has none).
    pub title: String,
    /// Short description shown on cards and in search results.
    pub summary: Option<String>,
    /// Full markdown body, frontmatter already stripped.
    pub body: String,

    // Ordering
    /// Publication timestamp; `None` when the source date was missing or
    /// unparseable. Undated items sort after dated ones.
    pub published_at: Option<DateTime<Utc>>,

    // Facets
    /// Primary category.
    pub category: Option<String>,
    /// Free-form tags; order is irrelevant, membership is what matters.
    pub tags: Vec<String>,
    /// Single author credit.
    pub author: Option<String>,
    /// Ordered author list for multi-author items.
    pub authors: Vec<String>,

    // Section-specific fields
    /// Industry vertical (case studies).
    pub industry: Option<String>,
    /// Client name (case studies).
    pub client: Option<String>,
    /// Research methodology (research papers).
    pub methodology: Option<String>,
    /// Search keywords (research papers).
    pub keywords: Vec<String>,

    /// Whether the item is featured in its section.
    pub featured: bool,
}

impl ContentItem {
    /// Create a minimal item with empty optional fields.
    pub fn new(kind: ContentKind, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            kind,
            slug: slug.into(),
            title: title.into(),
            summary: None,
            body: String::new(),
            published_at: None,
            category: None,
            tags: Vec::new(),
            author: None,
            authors: Vec::new(),
            industry: None,
            client: None,
            methodology: None,
            keywords: Vec::new(),
            featured: false,
        }
    }

    /// Create an item builder for the given section.
    pub fn builder(kind: ContentKind) -> ContentItemBuilder {
        ContentItemBuilder {
            item: ContentItem::new(kind, "", ""),
        }
    }

    /// Check whether the item matches a search term.
    ///
    /// The match is a case-insensitive substring test against the item's
    /// searchable fields (title, summary, category, tags, author, industry,
    /// client, methodology, keywords) joined into a single haystack. A
    /// blank term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return true;
        }
        self.search_haystack().contains(&term.to_lowercase())
    }

    /// Check whether the item belongs to a category filter value.
    ///
    /// An item matches when the target equals its category, industry, or
    /// methodology, or appears among its tags. The `"All"` sentinel is
    /// handled by the filter layer, not here.
    pub fn matches_category(&self, target: &str) -> bool {
        self.category.as_deref() == Some(target)
            || self.industry.as_deref() == Some(target)
            || self.methodology.as_deref() == Some(target)
            || self.tags.iter().any(|tag| tag == target)
    }

    /// Facet values that contribute to the derived category list.
    ///
    /// Always includes the category and tags; case studies additionally
    /// contribute their industry and research papers their methodology.
    pub fn category_facets(&self) -> Vec<&str> {
        let mut facets = Vec::new();
        if let Some(category) = self.category.as_deref() {
            facets.push(category);
        }
        match self.kind {
            ContentKind::CaseStudy => {
                if let Some(industry) = self.industry.as_deref() {
                    facets.push(industry);
                }
            }
            ContentKind::Research => {
                if let Some(methodology) = self.methodology.as_deref() {
                    facets.push(methodology);
                }
            }
            _ => {}
        }
        facets.extend(self.tags.iter().map(String::as_str));
        facets
    }

    /// Values that feed the search-suggestion list, in a fixed field order
    /// so suggestion derivation stays deterministic.
    pub fn suggestion_values(&self) -> Vec<&str> {
        let mut values = Vec::new();
        values.extend(self.category.as_deref());
        values.extend(self.industry.as_deref());
        values.extend(self.methodology.as_deref());
        values.extend(self.keywords.iter().map(String::as_str));
        values.extend(self.tags.iter().map(String::as_str));
        values.extend(self.author.as_deref());
        values
    }

    /// Estimated reading time for the body, in minutes. Never zero.
    pub fn reading_time(&self) -> u32 {
        markdown::reading_time_minutes(&self.body)
    }

    /// Render the markdown body into a block tree, with relative image
    /// references resolved against this section's asset base.
    pub fn render(&self) -> Document {
        let options = RenderOptions::new().with_asset_base(self.kind.asset_base());
        markdown::render_document(&self.body, &options)
    }

    fn search_haystack(&self) -> String {
        let mut fields: Vec<&str> = vec![&self.title];
        fields.extend(self.summary.as_deref());
        fields.extend(self.category.as_deref());
        fields.extend(self.tags.iter().map(String::as_str));
        fields.extend(self.author.as_deref());
        fields.extend(self.authors.iter().map(String::as_str));
        fields.extend(self.industry.as_deref());
        fields.extend(self.client.as_deref());
        fields.extend(self.methodology.as_deref());
        fields.extend(self.keywords.iter().map(String::as_str));
        fields.join(" ").to_lowercase()
    }
}

/// Builder for [`ContentItem`].
#[derive(Debug)]
pub struct ContentItemBuilder {
    item: ContentItem,
}

impl ContentItemBuilder {
    /// Set the slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.item.slug = slug.into();
        self
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.item.title = title.into();
        self
    }

    /// Set the summary.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.item.summary = Some(summary.into());
        self
    }

    /// Set the markdown body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.item.body = body.into();
        self
    }

    /// Set the publication timestamp.
    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.item.published_at = Some(published_at);
        self
    }

    /// Set the publication timestamp from a date string.
    ///
    /// Accepts the same formats as normalization; an unparseable value
    /// leaves the item undated.
    pub fn date(mut self, date: impl AsRef<str>) -> Self {
        self.item.published_at = crate::normalize::parse_timestamp(date.as_ref());
        self
    }

    /// Set the category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.item.category = Some(category.into());
        self
    }

    /// Add a single tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.item.tags.push(tag.into());
        self
    }

    /// Set all tags at once.
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.item.tags = tags;
        self
    }

    /// Set the author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.item.author = Some(author.into());
        self
    }

    /// Set the ordered author list.
    pub fn authors(mut self, authors: Vec<String>) -> Self {
        self.item.authors = authors;
        self
    }

    /// Set the industry (case studies).
    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.item.industry = Some(industry.into());
        self
    }

    /// Set the client name (case studies).
    pub fn client(mut self, client: impl Into<String>) -> Self {
        self.item.client = Some(client.into());
        self
    }

    /// Set the methodology (research papers).
    pub fn methodology(mut self, methodology: impl Into<String>) -> Self {
        self.item.methodology = Some(methodology.into());
        self
    }

    /// Set the keyword list (research papers).
    pub fn keywords(mut self, keywords: Vec<String>) -> Self {
        self.item.keywords = keywords;
        self
    }

    /// Mark the item as featured.
    pub fn featured(mut self, featured: bool) -> Self {
        self.item.featured = featured;
        self
    }

    /// Build the item. Derives the slug from the title when none was set.
    pub fn build(mut self) -> ContentItem {
        if self.item.slug.is_empty() {
            self.item.slug = vitryn_core::slugify(&self.item.title);
        }
        self.item
    }
}

// ============================================================================
// Tests
// ============================================================================
