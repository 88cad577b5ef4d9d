//! YAML frontmatter splitting.
//!
//! Source documents open with a fenced metadata block:
//!
//! ```markdown
//! ---
//! title: Scaling Voice Agents
//! category: Deployments
//! tags:
//!   - Voice
//! ---
//!
//! Body starts here.
//! ```
//!
//! [`split_frontmatter`] separates that block from the body and parses it
//! as YAML. Broken YAML never aborts ingestion: the body is still
//! returned and [`Frontmatter::is_malformed`] reports what happened so
//! normalization can record the parse failure against the item.

use serde::de::DeserializeOwned;
use serde_yaml::Value;
use vitryn_core::{Error, Result};

/// The outcome of splitting a document into metadata and body.
#[derive(Debug, Clone)]
pub struct Frontmatter<'a> {
    /// Parsed metadata, present only when the YAML was valid.
    value: Option<Value>,
    /// Body text following the closing fence (or the whole input when no
    /// fences were found).
    body: &'a str,
    /// Whether both fences were present, valid YAML or not.
    had_delimiters: bool,
}

impl<'a> Frontmatter<'a> {
    fn parsed(value: Value, body: &'a str) -> Self {
        Self {
            value: Some(value),
            body,
            had_delimiters: true,
        }
    }

    fn absent(body: &'a str) -> Self {
        Self {
            value: None,
            body,
            had_delimiters: false,
        }
    }

    fn malformed(body: &'a str) -> Self {
        Self {
            value: None,
            body,
            had_delimiters: true,
        }
    }

    /// Whether valid metadata was found and parsed.
    pub fn has_metadata(&self) -> bool {
        self.value.is_some()
    }

    /// Whether both fences were present, even if the YAML between them
    /// failed to parse.
    pub fn had_delimiters(&self) -> bool {
        self.had_delimiters
    }

    /// Whether fences were present but the YAML was invalid.
    pub fn is_malformed(&self) -> bool {
        self.had_delimiters && self.value.is_none()
    }

    /// The raw metadata value, if any.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// The body text after the metadata block.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Deserialize the metadata into a concrete type.
    ///
    /// Returns `Ok(None)` when no metadata was present and an error when
    /// the metadata exists but does not fit `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match &self.value {
            Some(value) => {
                let parsed: T = serde_yaml::from_value(value.clone())
                    .map_err(|e| Error::parse(format!("frontmatter does not match schema: {e}")))?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    /// Fetch a top-level string field from the metadata.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.value.as_ref()?.get(key)?.as_str()
    }
}

/// Split a document into YAML frontmatter and markdown body.
///
/// The metadata block must start on the first line with `---` and end at
/// the next line beginning with `---`. Three outcomes are possible:
///
/// - no opening fence, or an opening fence with no closing one: the whole
///   input is the body and no metadata is reported
/// - fences present with valid YAML between them: metadata is parsed and
///   the body starts after the closing fence
/// - fences present but invalid YAML: a warning is logged, the body is
///   still returned, and [`Frontmatter::is_malformed`] is true
///
/// # Example
///
/// ```rust
/// use vitryn_content::markdown::split_frontmatter;
///
/// let doc = "---\ntitle: Launch Notes\n---\n\n# Week One";
/// let result = split_frontmatter(doc);
/// assert_eq!(result.get_str("title"), Some("Launch Notes"));
/// assert_eq!(result.body().trim(), "# Week One");
///
/// let plain = split_frontmatter("# No Metadata");
/// assert!(!plain.has_metadata());
/// assert_eq!(plain.body(), "# No Metadata");
/// ```
pub fn split_frontmatter(content: &str) -> Frontmatter<'_> {
    let Some(after_fence) = content.strip_prefix("---") else {
        return Frontmatter::absent(content);
    };

    // The opening fence must be a full line.
    let Some(line_end) = after_fence.find('\n') else {
        return Frontmatter::absent(content);
    };
    let after_open = &after_fence[line_end + 1..];

    // An immediate second fence means an empty metadata block.
    let (yaml, after_close) = if let Some(rest) = after_open.strip_prefix("---") {
        ("", rest)
    } else if let Some(close) = after_open.find("\n---") {
        (&after_open[..close], &after_open[close + 4..])
    } else {
        log::warn!("frontmatter fence opened but never closed; treating input as plain markdown");
        return Frontmatter::absent(content);
    };

    let body = after_close.strip_prefix('\n').unwrap_or(after_close);

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(value) => Frontmatter::parsed(value, body),
        Err(e) => {
            log::warn!("frontmatter is not valid YAML: {e}");
            Frontmatter::malformed(body)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
