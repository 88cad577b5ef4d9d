//! Filesystem-backed content sources.
//!
//! Each section of the site keeps its markdown documents in one
//! directory. [`FsSource`] reads every `.md` file, parses frontmatter,
//! and normalizes the results. Files are visited in filename order so
//! repeated loads produce identical collections.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use vitryn_content::{normalize_sources, ContentItem, ContentKind};
use vitryn_core::{Error, Result};

use crate::source::ContentSource;

/// A content source reading markdown files from a directory.
#[derive(Debug, Clone)]
pub struct FsSource {
    kind: ContentKind,
    dir: PathBuf,
}

impl FsSource {
    /// Create a source for `kind` rooted at `dir`.
    pub fn new(kind: ContentKind, dir: impl AsRef<Path>) -> Self {
        Self {
            kind,
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Source for the blog section.
    pub fn blog(dir: impl AsRef<Path>) -> Self {
        Self::new(ContentKind::Blog, dir)
    }

    /// Source for the research section.
    pub fn research(dir: impl AsRef<Path>) -> Self {
        Self::new(ContentKind::Research, dir)
    }

    /// Source for the case-study section.
    pub fn case_studies(dir: impl AsRef<Path>) -> Self {
        Self::new(ContentKind::CaseStudy, dir)
    }

    /// Source for the documentation section.
    pub fn documentation(dir: impl AsRef<Path>) -> Self {
        Self::new(ContentKind::Documentation, dir)
    }

    /// Source for the help section.
    pub fn help(dir: impl AsRef<Path>) -> Self {
        Self::new(ContentKind::Help, dir)
    }

    /// Directory this source reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read_sources(&self) -> Result<Vec<(String, String)>> {
        let mut entries = tokio::fs::read_dir(&self.dir).await.map_err(|e| {
            Error::load_with_source(
                format!("cannot read content directory {}", self.dir.display()),
                e,
            )
        })?;

        let mut sources = Vec::new();
        loop {
            let entry = entries.next_entry().await.map_err(|e| {
                Error::load_with_source(
                    format!("cannot list content directory {}", self.dir.display()),
                    e,
                )
            })?;
            let Some(entry) = entry else { break };

            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            match tokio::fs::read_to_string(&path).await {
                Ok(text) => sources.push((name, text)),
                // One unreadable file should not take the section down.
                Err(e) => log::warn!("skipping unreadable {}: {e}", path.display()),
            }
        }

        sources.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(sources)
    }
}

#[async_trait]
impl ContentSource for FsSource {
    fn kind(&self) -> ContentKind {
        self.kind
    }

    async fn load(&self) -> Result<Vec<ContentItem>> {
        let sources = self.read_sources().await?;
        let file_count = sources.len();
        let normalized = normalize_sources(self.kind, sources);
        for issue in &normalized.issues {
            log::warn!("{}: {issue}", self.kind);
        }
        log::info!(
            "loaded {} {} items from {} files in {}",
            normalized.items.len(),
            self.kind,
            file_count,
            self.dir.display()
        );
        Ok(normalized.items)
    }

    fn name(&self) -> &str {
        "fs"
    }
}

/// Load the blog section from `dir`.
pub async fn load_blog_posts(dir: impl AsRef<Path>) -> Result<Vec<ContentItem>> {
    FsSource::new(ContentKind::Blog, dir).load().await
}

/// Load the case-study section from `dir`.
pub async fn load_case_studies(dir: impl AsRef<Path>) -> Result<Vec<ContentItem>> {
    FsSource::new(ContentKind::CaseStudy, dir).load().await
}

/// Load the research section from `dir`.
pub async fn load_research(dir: impl AsRef<Path>) -> Result<Vec<ContentItem>> {
    FsSource::new(ContentKind::Research, dir).load().await
}

/// Load the documentation section from `dir`.
pub async fn load_documentation(dir: impl AsRef<Path>) -> Result<Vec<ContentItem>> {
    FsSource::new(ContentKind::Documentation, dir).load().await
}

/// Load the help section from `dir`.
pub async fn load_help(dir: impl AsRef<Path>) -> Result<Vec<ContentItem>> {
    FsSource::new(ContentKind::Help, dir).load().await
}

// ============================================================================
// Tests
// ============================================================================
