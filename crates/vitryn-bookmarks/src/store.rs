//! Durable reader bookmarks backed by an embedded [redb] database.
//!
//! Bookmarks are kept as two independent slug lists, one for case
//! studies and one for research publications. Each list is stored as a
//! single JSON array under a fixed key, so the on-disk layout stays
//! readable and a damaged value can be dropped without touching the
//! other list.

use std::fs;
use std::path::{Path, PathBuf};

use redb::{Database, ReadableDatabase, TableDefinition};
use serde::{Deserialize, Serialize};

use vitryn_content::ContentItem;
use vitryn_content::ContentKind;

use crate::error::Result;

/// Single table mapping a list key to its JSON-encoded slug array.
const BOOKMARKS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("bookmarks");

/// The two bookmarkable sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookmarkList {
    /// Saved case studies.
    CaseStudies,
    /// Saved research publications.
    Research,
}

impl BookmarkList {
    /// All lists, in display order.
    pub const ALL: [BookmarkList; 2] = [BookmarkList::CaseStudies, BookmarkList::Research];

    /// Storage key the list is filed under.
    pub fn storage_key(&self) -> &'static str {
        match self {
            BookmarkList::CaseStudies => "bookmarkedCaseStudies",
            BookmarkList::Research => "bookmarkedResearch",
        }
    }

    /// Content kind whose items this list holds.
    pub fn kind(&self) -> ContentKind {
        match self {
            BookmarkList::CaseStudies => ContentKind::CaseStudy,
            BookmarkList::Research => ContentKind::Research,
        }
    }

    /// The list for a content kind, if that kind is bookmarkable.
    pub fn for_kind(kind: ContentKind) -> Option<BookmarkList> {
        match kind {
            ContentKind::CaseStudy => Some(BookmarkList::CaseStudies),
            ContentKind::Research => Some(BookmarkList::Research),
            _ => None,
        }
    }
}

/// Persistent bookmark database.
///
/// Opening the same path across process restarts yields the same saved
/// lists. All operations run a full transaction, so a crash mid-toggle
/// leaves the previous list intact.
pub struct BookmarkStore {
    db: Database,
    path: PathBuf,
}

impl BookmarkStore {
    /// Opens (or creates) the bookmark database at `path`.
    ///
    /// Missing parent directories are created, and the bookmarks table
    /// is created up front so first reads on a fresh database succeed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let db = Database::create(&path)?;
        let txn = db.begin_write()?;
        {
            let _ = txn.open_table(BOOKMARKS_TABLE)?;
        }
        txn.commit()?;
        log::debug!("bookmark store open at {}", path.display());
        Ok(Self { db, path })
    }

    /// Path of the underlying database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved slugs for `list`, oldest bookmark first.
    ///
    /// A stored value that is not a valid JSON string array is treated
    /// as an empty list rather than an error, so one damaged entry
    /// cannot take bookmarking down.
    pub fn slugs(&self, list: BookmarkList) -> Result<Vec<String>> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(BOOKMARKS_TABLE)?;
        let Some(guard) = table.get(list.storage_key())? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<String>>(guard.value()) {
            Ok(slugs) => Ok(slugs),
            Err(e) => {
                log::warn!(
                    "discarding unreadable bookmark list {}: {e}",
                    list.storage_key()
                );
                Ok(Vec::new())
            }
        }
    }

    /// Whether `slug` is currently bookmarked in `list`.
    pub fn contains(&self, list: BookmarkList, slug: &str) -> Result<bool> {
        Ok(self.slugs(list)?.iter().any(|s| s == slug))
    }

    /// Adds `slug` to `list` if absent, removes it if present.
    ///
    /// Returns the new membership state: `true` means the slug is now
    /// bookmarked.
    pub fn toggle(&self, list: BookmarkList, slug: &str) -> Result<bool> {
        let mut slugs = self.slugs(list)?;
        let bookmarked = match slugs.iter().position(|s| s == slug) {
            Some(index) => {
                slugs.remove(index);
                false
            }
            None => {
                slugs.push(slug.to_string());
                true
            }
        };
        self.write_list(list, &slugs)?;
        log::debug!(
            "{} {slug} in {}",
            if bookmarked { "bookmarked" } else { "unbookmarked" },
            list.storage_key()
        );
        Ok(bookmarked)
    }

    /// Removes every bookmark in `list`.
    pub fn clear(&self, list: BookmarkList) -> Result<()> {
        self.write_list(list, &[])
    }

    /// Resolves the saved slugs of `list` against `items`.
    ///
    /// Items come back in bookmark order (oldest saved first). Slugs
    /// that no longer match any item are skipped, and stay stored in
    /// case the content returns later.
    pub fn bookmarked_items(
        &self,
        list: BookmarkList,
        items: &[ContentItem],
    ) -> Result<Vec<ContentItem>> {
        let slugs = self.slugs(list)?;
        Ok(slugs
            .iter()
            .filter_map(|slug| items.iter().find(|item| &item.slug == slug))
            .cloned()
            .collect())
    }

    fn write_list(&self, list: BookmarkList, slugs: &[String]) -> Result<()> {
        let encoded = serde_json::to_string(slugs)?;
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(BOOKMARKS_TABLE)?;
            table.insert(list.storage_key(), encoded.as_str())?;
        }
        txn.commit()?;
        Ok(())
    }
}

impl std::fmt::Debug for BookmarkStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookmarkStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn case_study(slug: &str, title: &str) -> ContentItem {
        ContentItem::builder(ContentKind::CaseStudy)
            .slug(slug)
            .title(title)
            .build()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let dir = tempfile::tempdir().unwrap();
        let store = BookmarkStore::open(dir.path().join("bookmarks.redb")).unwrap();

        assert!(!store.contains(BookmarkList::CaseStudies, "alpha").unwrap());
        assert!(store.toggle(BookmarkList::CaseStudies, "alpha").unwrap());
        assert!(store.contains(BookmarkList::CaseStudies, "alpha").unwrap());

        assert!(!store.toggle(BookmarkList::CaseStudies, "alpha").unwrap());
        assert!(!store.contains(BookmarkList::CaseStudies, "alpha").unwrap());
        assert!(store.slugs(BookmarkList::CaseStudies).unwrap().is_empty());
    }

    #[test]
    fn test_lists_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let store = BookmarkStore::open(dir.path().join("bookmarks.redb")).unwrap();

        store.toggle(BookmarkList::CaseStudies, "shared-slug").unwrap();
        assert!(store.contains(BookmarkList::CaseStudies, "shared-slug").unwrap());
        assert!(!store.contains(BookmarkList::Research, "shared-slug").unwrap());

        store.toggle(BookmarkList::Research, "shared-slug").unwrap();
        store.toggle(BookmarkList::CaseStudies, "shared-slug").unwrap();
        assert!(!store.contains(BookmarkList::CaseStudies, "shared-slug").unwrap());
        assert!(store.contains(BookmarkList::Research, "shared-slug").unwrap());
    }

    #[test]
    fn test_slugs_keep_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = BookmarkStore::open(dir.path().join("bookmarks.redb")).unwrap();

        store.toggle(BookmarkList::Research, "first").unwrap();
        store.toggle(BookmarkList::Research, "second").unwrap();
        store.toggle(BookmarkList::Research, "third").unwrap();
        store.toggle(BookmarkList::Research, "second").unwrap();
        store.toggle(BookmarkList::Research, "second").unwrap();

        assert_eq!(
            store.slugs(BookmarkList::Research).unwrap(),
            vec!["first", "third", "second"]
        );
    }

    #[test]
    fn test_bookmarks_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.redb");

        {
            let store = BookmarkStore::open(&path).unwrap();
            store.toggle(BookmarkList::CaseStudies, "fintech-pilot").unwrap();
            store.toggle(BookmarkList::Research, "asr-survey").unwrap();
        }

        let store = BookmarkStore::open(&path).unwrap();
        assert_eq!(
            store.slugs(BookmarkList::CaseStudies).unwrap(),
            vec!["fintech-pilot"]
        );
        assert_eq!(store.slugs(BookmarkList::Research).unwrap(), vec!["asr-survey"]);
    }

    #[test]
    fn test_parent_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state").join("bookmarks.redb");

        let store = BookmarkStore::open(&path).unwrap();
        store.toggle(BookmarkList::Research, "deep").unwrap();
        assert!(path.exists());
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn test_corrupt_value_degrades_to_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookmarks.redb");

        {
            let store = BookmarkStore::open(&path).unwrap();
            store.toggle(BookmarkList::CaseStudies, "kept").unwrap();
        }
        {
            // Damage one list behind the store's back.
            let db = Database::create(&path).unwrap();
            let txn = db.begin_write().unwrap();
            {
                let mut table = txn.open_table(BOOKMARKS_TABLE).unwrap();
                table
                    .insert(BookmarkList::Research.storage_key(), "not json at all")
                    .unwrap();
            }
            txn.commit().unwrap();
        }

        let store = BookmarkStore::open(&path).unwrap();
        assert!(store.slugs(BookmarkList::Research).unwrap().is_empty());
        // The other list is untouched.
        assert_eq!(store.slugs(BookmarkList::CaseStudies).unwrap(), vec!["kept"]);
        // Toggling writes a fresh valid list over the damaged value.
        assert!(store.toggle(BookmarkList::Research, "fresh").unwrap());
        assert_eq!(store.slugs(BookmarkList::Research).unwrap(), vec!["fresh"]);
    }

    #[test]
    fn test_clear_empties_one_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = BookmarkStore::open(dir.path().join("bookmarks.redb")).unwrap();

        store.toggle(BookmarkList::CaseStudies, "a").unwrap();
        store.toggle(BookmarkList::CaseStudies, "b").unwrap();
        store.toggle(BookmarkList::Research, "c").unwrap();

        store.clear(BookmarkList::CaseStudies).unwrap();
        assert!(store.slugs(BookmarkList::CaseStudies).unwrap().is_empty());
        assert_eq!(store.slugs(BookmarkList::Research).unwrap(), vec!["c"]);
    }

    #[test]
    fn test_bookmarked_items_join_in_saved_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = BookmarkStore::open(dir.path().join("bookmarks.redb")).unwrap();

        let items = vec![
            case_study("alpha", "Alpha Rollout"),
            case_study("beta", "Beta Rollout"),
            case_study("gamma", "Gamma Rollout"),
        ];

        store.toggle(BookmarkList::CaseStudies, "gamma").unwrap();
        store.toggle(BookmarkList::CaseStudies, "retired-study").unwrap();
        store.toggle(BookmarkList::CaseStudies, "alpha").unwrap();

        let saved = store
            .bookmarked_items(BookmarkList::CaseStudies, &items)
            .unwrap();
        let titles: Vec<&str> = saved.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Gamma Rollout", "Alpha Rollout"]);

        // The unresolved slug stays stored.
        assert!(store
            .contains(BookmarkList::CaseStudies, "retired-study")
            .unwrap());
    }

    #[test]
    fn test_list_kind_round_trip() {
        for list in BookmarkList::ALL {
            assert_eq!(BookmarkList::for_kind(list.kind()), Some(list));
        }
        assert_eq!(BookmarkList::for_kind(ContentKind::Blog), None);
        assert_eq!(
            BookmarkList::CaseStudies.storage_key(),
            "bookmarkedCaseStudies"
        );
        assert_eq!(BookmarkList::Research.storage_key(), "bookmarkedResearch");
    }
}
