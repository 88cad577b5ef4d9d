//! Raw record intake and normalization.
//!
//! Source collections hand over loosely shaped records: JSON fixtures,
//! frontmatter maps, hand-edited YAML. This module folds them into
//! [`ContentItem`] values with a fixed policy:
//!
//! - the first non-empty of `excerpt` / `description` / `summary`
//!   becomes the summary, falling back to the body's first paragraph
//! - the first non-empty of `date` / `publishedAt` / `createdAt` becomes
//!   the publication timestamp; unparseable dates leave the item undated
//! - a missing title is replaced with [`PLACEHOLDER_TITLE`] instead of
//!   dropping the record, keeping collection counts consistent
//! - slugs are derived from the explicit slug, the record id, the title,
//!   or the source filename, in that order, and made unique within the
//!   batch
//!
//! Anything repaired along the way is reported as a [`ContentIssue`] so
//! callers can log or display it without losing the item.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_yaml::Value;
use vitryn_core::slugify;

use crate::item::ContentItem;
use crate::kind::ContentKind;
use crate::markdown::{first_paragraph, split_frontmatter};

/// Title substituted when a source record has none.
pub const PLACEHOLDER_TITLE: &str = "Untitled";

/// Character budget for summaries derived from body text.
const SUMMARY_MAX_CHARS: usize = 200;

/// A source record before normalization.
///
/// Every field is optional; the camelCase names match what JSON sources
/// use, and the snake_case aliases cover YAML frontmatter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawRecord {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub date: Option<String>,
    #[serde(alias = "published_at")]
    pub published_at: Option<String>,
    #[serde(alias = "created_at")]
    pub created_at: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub author: Option<String>,
    pub authors: Vec<String>,
    pub industry: Option<String>,
    pub client: Option<String>,
    pub methodology: Option<String>,
    pub keywords: Vec<String>,
    pub featured: bool,
}

/// A problem found while normalizing a record.
///
/// Issues never remove an item from the collection; they describe what
/// was repaired or defaulted on its way in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentIssue {
    /// Source data could not be parsed (frontmatter, date).
    Parse { slug: String, message: String },
    /// A required field was missing and a placeholder was substituted.
    Validation {
        slug: String,
        field: String,
        message: String,
    },
}

impl ContentIssue {
    fn parse(slug: impl Into<String>, message: impl Into<String>) -> Self {
        ContentIssue::Parse {
            slug: slug.into(),
            message: message.into(),
        }
    }

    fn validation(
        slug: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ContentIssue::Validation {
            slug: slug.into(),
            field: field.into(),
            message: message.into(),
        }
    }

    /// Slug of the item the issue belongs to.
    pub fn slug(&self) -> &str {
        match self {
            ContentIssue::Parse { slug, .. } | ContentIssue::Validation { slug, .. } => slug,
        }
    }
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentIssue::Parse { slug, message } => write!(f, "[{slug}] parse: {message}"),
            ContentIssue::Validation {
                slug,
                field,
                message,
            } => write!(f, "[{slug}] validation ({field}): {message}"),
        }
    }
}

/// The result of normalizing a batch of records.
#[derive(Debug, Clone, Default)]
pub struct Normalized {
    /// Normalized items, in source order.
    pub items: Vec<ContentItem>,
    /// Everything that was repaired along the way.
    pub issues: Vec<ContentIssue>,
}

impl Normalized {
    /// Whether any record needed repair.
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// Parse a source date string into a UTC timestamp.
///
/// Accepts RFC 3339 (`2024-01-01T09:30:00Z`), bare dates (`2024-01-01`,
/// read as midnight UTC), and naive datetimes (`2024-01-01T09:30:00`).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime.and_utc());
    }
    None
}

/// Normalize a single record into a [`ContentItem`].
///
/// `source_name` is the originating filename, if any; it only matters as
/// the slug fallback when the record carries neither a slug nor a title.
pub fn normalize(
    kind: ContentKind,
    raw: RawRecord,
    source_name: Option<&str>,
) -> (ContentItem, Vec<ContentIssue>) {
    let mut issues = Vec::new();

    let title = clean(raw.title);
    let slug = clean(raw.slug)
        .map(|slug| slugify(&slug))
        .filter(|slug| !slug.is_empty())
        .or_else(|| {
            clean(raw.id)
                .map(|id| slugify(&id))
                .filter(|slug| !slug.is_empty())
        })
        .or_else(|| {
            title
                .as_deref()
                .map(slugify)
                .filter(|slug| !slug.is_empty())
        })
        .or_else(|| {
            source_name
                .map(slugify)
                .filter(|slug| !slug.is_empty())
        })
        .unwrap_or_else(|| "untitled".to_string());

    let title = match title {
        Some(title) => title,
        None => {
            issues.push(ContentIssue::validation(
                &slug,
                "title",
                "missing title; placeholder substituted",
            ));
            PLACEHOLDER_TITLE.to_string()
        }
    };

    // A structured record may still carry a full document in `content`;
    // strip any leading frontmatter so the stored body is pure markdown.
    let body = raw
        .content
        .map(|content| split_frontmatter(&content).body().to_string())
        .unwrap_or_default();

    let summary = first_non_empty([raw.excerpt, raw.description, raw.summary])
        .or_else(|| first_paragraph(&body, SUMMARY_MAX_CHARS));

    let date_raw = first_non_empty([raw.date, raw.published_at, raw.created_at]);
    let published_at = match date_raw {
        Some(ref value) => {
            let parsed = parse_timestamp(value);
            if parsed.is_none() {
                issues.push(ContentIssue::parse(
                    &slug,
                    format!("unparseable date: {value:?}"),
                ));
            }
            parsed
        }
        None => None,
    };

    let item = ContentItem {
        kind,
        slug,
        title,
        summary,
        body,
        published_at,
        category: clean(raw.category),
        tags: clean_list(raw.tags),
        author: clean(raw.author),
        authors: clean_list(raw.authors),
        industry: clean(raw.industry),
        client: clean(raw.client),
        methodology: clean(raw.methodology),
        keywords: clean_list(raw.keywords),
        featured: raw.featured,
    };

    (item, issues)
}

/// Normalize a batch of structured records, making slugs unique.
pub fn normalize_all(
    kind: ContentKind,
    records: impl IntoIterator<Item = RawRecord>,
) -> Normalized {
    let mut items = Vec::new();
    let mut issues = Vec::new();
    for raw in records {
        let (item, mut item_issues) = normalize(kind, raw, None);
        issues.append(&mut item_issues);
        items.push(item);
    }
    dedup_slugs(&mut items);
    Normalized { items, issues }
}

/// Normalize a batch of markdown documents, given as `(filename, text)`
/// pairs. Frontmatter supplies the metadata and the remainder becomes
/// the body.
pub fn normalize_sources(
    kind: ContentKind,
    sources: impl IntoIterator<Item = (String, String)>,
) -> Normalized {
    let mut items = Vec::new();
    let mut issues = Vec::new();

    for (name, text) in sources {
        let frontmatter = split_frontmatter(&text);
        let mut pending: Vec<String> = Vec::new();
        if frontmatter.is_malformed() {
            pending.push("frontmatter is not valid YAML".to_string());
        }

        let raw = match frontmatter.value() {
            None | Some(Value::Null) => RawRecord::default(),
            Some(_) => match frontmatter.deserialize::<RawRecord>() {
                Ok(record) => record.unwrap_or_default(),
                Err(e) => {
                    pending.push(e.to_string());
                    RawRecord::default()
                }
            },
        };

        let raw = RawRecord {
            content: Some(frontmatter.body().to_string()),
            ..raw
        };
        let (item, mut item_issues) = normalize(kind, raw, Some(&name));
        for message in pending {
            issues.push(ContentIssue::parse(&item.slug, message));
        }
        issues.append(&mut item_issues);
        items.push(item);
    }

    dedup_slugs(&mut items);
    Normalized { items, issues }
}

/// Make slugs unique within a batch by suffixing duplicates with `-2`,
/// `-3`, and so on, in input order.
fn dedup_slugs(items: &mut [ContentItem]) {
    let mut seen: HashMap<String, usize> = HashMap::new();
    for item in items.iter_mut() {
        if let Some(count) = seen.get(&item.slug).copied() {
            let base = item.slug.clone();
            let mut next = count + 1;
            let mut candidate = format!("{base}-{next}");
            while seen.contains_key(&candidate) {
                next += 1;
                candidate = format!("{base}-{next}");
            }
            log::debug!("slug collision: {} renamed to {}", item.slug, candidate);
            seen.insert(base, next);
            seen.insert(candidate.clone(), 1);
            item.slug = candidate;
        } else {
            seen.insert(item.slug.clone(), 1);
        }
    }
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn first_non_empty(candidates: [Option<String>; 3]) -> Option<String> {
    candidates.into_iter().flatten().find_map(|s| {
        let trimmed = s.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

// ============================================================================
// Tests
// ============================================================================
