//! Slug derivation utilities.
//!
//! Provides functions for deriving stable URL slugs from titles and
//! filenames. Used by content normalization, heading anchors, and
//! anywhere stable IDs are needed.

use std::path::Path;

/// Derive a URL slug from a title or filename.
///
/// Performs the following transformations:
/// 1. Trims whitespace and converts to lowercase
/// 2. Strips one trailing `.md` suffix if present
/// 3. Replaces every maximal run of characters outside `[a-z0-9]`
///    with a single `-`
/// 4. Drops leading/trailing separators
///
/// The function is pure and idempotent: `slugify(slugify(x)) == slugify(x)`
/// for every input, because the output alphabet is limited to `[a-z0-9-]`.
///
/// # Examples
///
/// ```
/// use vitryn_core::slug::slugify;
///
/// assert_eq!(slugify("Voice Interfaces"), "voice-interfaces");
/// assert_eq!(slugify("My Great Post!! v2.md"), "my-great-post-v2");
/// assert_eq!(slugify("  Mixed   Case  "), "mixed-case");
/// assert_eq!(slugify("!!!"), "");
/// ```
pub fn slugify(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let stem = lowered.strip_suffix(".md").unwrap_or(&lowered);

    let mut slug = String::with_capacity(stem.len());
    let mut pending_separator = false;
    for ch in stem.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else {
            pending_separator = true;
        }
    }
    slug
}

/// Derive a slug from a file path's final component.
///
/// Applies [`slugify`] to the file name (the `.md` suffix is handled by
/// the slug rule itself). Returns `None` if the path has no file name or
/// the name slugs down to nothing.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use vitryn_core::slug::slug_from_path;
///
/// assert_eq!(
///     slug_from_path(Path::new("/content/blog/Getting_Started.md")),
///     Some("getting-started".to_string())
/// );
/// assert_eq!(slug_from_path(Path::new("/")), None);
/// ```
pub fn slug_from_path(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(slugify)
        .filter(|slug| !slug.is_empty())
}
