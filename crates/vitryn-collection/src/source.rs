//! Content sources.
//!
//! A [`ContentSource`] produces the normalized items for one section of
//! the site. The filesystem source in [`crate::fs`] is the usual
//! implementation; [`StaticSource`] covers embedded fixtures and tests.

use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;
use vitryn_content::{ContentItem, ContentKind};
use vitryn_core::Result;

/// Supplies the items for one content section.
///
/// # Async
///
/// `load` is async because sources typically read from disk or the
/// network. Implementations should return an error only when the whole
/// section is unavailable; individually broken records are expected to
/// degrade during normalization instead.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// The section this source feeds.
    fn kind(&self) -> ContentKind;

    /// Load and normalize every item.
    async fn load(&self) -> Result<Vec<ContentItem>>;

    /// Source name for diagnostics.
    fn name(&self) -> &str {
        "source"
    }
}

/// A source backed by an in-memory item list.
#[derive(Debug, Clone)]
pub struct StaticSource {
    kind: ContentKind,
    items: Vec<ContentItem>,
}

impl StaticSource {
    /// Create a source that serves clones of `items`.
    pub fn new(kind: ContentKind, items: Vec<ContentItem>) -> Self {
        Self { kind, items }
    }
}

#[async_trait]
impl ContentSource for StaticSource {
    fn kind(&self) -> ContentKind {
        self.kind
    }

    async fn load(&self) -> Result<Vec<ContentItem>> {
        Ok(self.items.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Load several sections concurrently.
///
/// Sections fail independently: one unreadable directory yields an
/// error for that section only, and the rest still load.
pub async fn load_all(
    sources: &[Arc<dyn ContentSource>],
) -> Vec<(ContentKind, Result<Vec<ContentItem>>)> {
    let loads = sources.iter().map(|source| {
        let source = Arc::clone(source);
        async move {
            let result = source.load().await;
            if let Err(ref e) = result {
                log::error!("{} source for {} failed: {e}", source.name(), source.kind());
            }
            (source.kind(), result)
        }
    });
    join_all(loads).await
}

// ============================================================================
// Tests
// ============================================================================
