//! Debounced listing state for one content section.
//!
//! [`Collection`] owns the loaded items of a section plus the listing
//! state a reader manipulates: search term, category, page, selection.
//! Every change recomputes a complete [`Snapshot`] and broadcasts it on
//! a watch channel, so renderers only ever draw the latest state.
//!
//! # Debouncing
//!
//! Search and category edits do not take effect immediately. Each edit
//! bumps an epoch counter and schedules a commit task that sleeps for
//! the configured debounce window; a task that wakes up to find a newer
//! epoch simply drops its edit. The last edit always wins, results from
//! an abandoned edit are never published, and the loading flag stays on
//! until the winning edit commits.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use vitryn_content::ContentItem;
use vitryn_query::{
    category_options, page_window, run_query, suggestions, QueryParams, SortOrder, ALL_CATEGORIES,
};

use crate::config::CollectionConfig;
use crate::platform::{NullPlatform, Platform};
use crate::snapshot::Snapshot;
use crate::source::ContentSource;

/// Mutable listing state guarded by the collection's lock.
///
/// Search and category each keep two values: the input echoed back to
/// the UI right away, and the applied value the pipeline filters by
/// once the debounce elapses.
struct ListingState {
    items: Vec<ContentItem>,
    search_input: String,
    search_applied: String,
    category_input: String,
    category_applied: String,
    page: usize,
    order: SortOrder,
    selected: Option<ContentItem>,
    loading: bool,
    error: Option<String>,
}

struct CollectionInner {
    config: CollectionConfig,
    platform: Arc<dyn Platform>,
    state: Mutex<ListingState>,
    epoch: AtomicU64,
    tx: watch::Sender<Snapshot>,
}

impl CollectionInner {
    fn compose(&self, state: &ListingState) -> Snapshot {
        let params = QueryParams {
            search: state.search_applied.clone(),
            category: state.category_applied.clone(),
            page: state.page,
            page_size: self.config.page_size,
            order: state.order,
        };
        let page = run_query(&state.items, &params);
        let window = page_window(page.page, page.total_pages, self.config.max_visible_pages);

        Snapshot {
            search: state.search_input.clone(),
            category: state.category_input.clone(),
            loading: state.loading,
            error: state.error.clone(),
            window,
            categories: category_options(&state.items),
            suggestions: suggestions(&state.items, self.config.suggestion_limit),
            selected: state.selected.clone(),
            page,
        }
    }

    fn publish(&self, state: &ListingState) {
        self.tx.send_replace(self.compose(state));
    }
}

/// Listing state machine for one content section.
///
/// Cheap to clone (Arc internals); clones share the same state and
/// watch channel. All mutating methods publish a fresh [`Snapshot`]
/// before returning, except the debounced edits, which publish once
/// immediately (echo plus loading flag) and again when they commit.
#[derive(Clone)]
pub struct Collection {
    inner: Arc<CollectionInner>,
}

impl Collection {
    /// Create a collection with no platform hooks.
    pub fn new(config: CollectionConfig) -> Self {
        Self::with_platform(config, Arc::new(NullPlatform))
    }

    /// Create a collection that delegates shell effects to `platform`.
    pub fn with_platform(config: CollectionConfig, platform: Arc<dyn Platform>) -> Self {
        let (tx, _rx) = watch::channel(Snapshot::initial(&config));
        let state = ListingState {
            items: Vec::new(),
            search_input: String::new(),
            search_applied: String::new(),
            category_input: ALL_CATEGORIES.to_string(),
            category_applied: ALL_CATEGORIES.to_string(),
            page: 1,
            order: config.order,
            selected: None,
            loading: true,
            error: None,
        };
        Self {
            inner: Arc::new(CollectionInner {
                config,
                platform,
                state: Mutex::new(state),
                epoch: AtomicU64::new(0),
                tx,
            }),
        }
    }

    /// Subscribe to snapshot updates.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.inner.tx.subscribe()
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.inner.tx.borrow().clone()
    }

    /// Collection configuration.
    pub fn config(&self) -> &CollectionConfig {
        &self.inner.config
    }

    /// Load (or reload) the section from `source`.
    ///
    /// A failed load never leaves the listing stuck: the collection
    /// publishes an empty result set with the loading flag cleared and
    /// the error message set, and a later `load` call can recover.
    pub async fn load(&self, source: &dyn ContentSource) {
        {
            let mut state = self.inner.state.lock().await;
            state.loading = true;
            state.error = None;
            self.inner.publish(&state);
        }

        match source.load().await {
            Ok(items) => {
                log::info!("{} section loaded {} items", source.kind(), items.len());
                let mut state = self.inner.state.lock().await;
                state.items = items;
                state.loading = false;
                state.error = None;
                self.inner.publish(&state);
            }
            Err(e) => {
                log::error!("{} section failed to load: {e}", source.kind());
                let mut state = self.inner.state.lock().await;
                state.items.clear();
                state.selected = None;
                state.loading = false;
                state.error = Some(e.to_string());
                self.inner.publish(&state);
            }
        }
    }

    /// Update the search term.
    ///
    /// Echoes the term and resets to page 1 immediately; the filter
    /// itself applies after the debounce window, and a newer edit
    /// cancels this one.
    pub async fn set_search_term(&self, term: impl Into<String>) {
        let term = term.into();
        {
            let mut state = self.inner.state.lock().await;
            state.search_input = term;
            state.page = 1;
            state.loading = true;
            self.inner.publish(&state);
        }
        self.schedule_commit();
    }

    /// Update the selected category.
    ///
    /// Debounced exactly like [`Collection::set_search_term`], and the
    /// two share one debounce: whichever edit happened last is the one
    /// that commits.
    pub async fn set_category(&self, category: impl Into<String>) {
        let category = category.into();
        {
            let mut state = self.inner.state.lock().await;
            state.category_input = category;
            state.page = 1;
            state.loading = true;
            self.inner.publish(&state);
        }
        self.schedule_commit();
    }

    /// Jump to a page, clamped into the valid range. Takes effect
    /// immediately and asks the platform to scroll back to the top.
    pub async fn set_page(&self, page: usize) {
        let mut state = self.inner.state.lock().await;
        state.page = page;
        let snapshot = self.inner.compose(&state);
        state.page = snapshot.page.page;
        self.inner.tx.send_replace(snapshot);
        self.inner.platform.scroll_to_top();
    }

    /// Switch the listing order. Takes effect immediately and returns
    /// to page 1.
    pub async fn set_order(&self, order: SortOrder) {
        let mut state = self.inner.state.lock().await;
        state.order = order;
        state.page = 1;
        self.inner.publish(&state);
    }

    /// Open the item with `slug` in the detail view.
    ///
    /// Returns `false` (and changes nothing) when no loaded item has
    /// that slug.
    pub async fn select_item(&self, slug: &str) -> bool {
        let mut state = self.inner.state.lock().await;
        let Some(item) = state.items.iter().find(|i| i.slug == slug).cloned() else {
            log::debug!("select_item: no item with slug {slug:?}");
            return false;
        };
        state.selected = Some(item);
        self.inner.publish(&state);
        true
    }

    /// Close the detail view.
    pub async fn clear_selection(&self) {
        let mut state = self.inner.state.lock().await;
        state.selected = None;
        self.inner.publish(&state);
    }

    /// Put a share link for the item with `slug` on the clipboard.
    ///
    /// The link is `site_base` + the section route + the slug. Returns
    /// `false` when no loaded item has that slug.
    pub async fn copy_share_link(&self, slug: &str) -> bool {
        let state = self.inner.state.lock().await;
        let Some(item) = state.items.iter().find(|i| i.slug == slug) else {
            return false;
        };
        let link = format!(
            "{}{}/{}",
            self.inner.config.site_base.trim_end_matches('/'),
            item.kind.route_base(),
            item.slug
        );
        self.inner.platform.copy_text(&link);
        true
    }

    fn schedule_commit(&self) {
        let epoch = self.inner.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let inner = Arc::clone(&self.inner);
        let delay = Duration::from_millis(inner.config.debounce_ms);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if inner.epoch.load(Ordering::SeqCst) != epoch {
                log::debug!("edit superseded before commit");
                return;
            }
            let mut state = inner.state.lock().await;
            // Re-check under the lock so a commit racing a newer edit
            // still loses.
            if inner.epoch.load(Ordering::SeqCst) != epoch {
                return;
            }
            state.search_applied = state.search_input.clone();
            state.category_applied = state.category_input.clone();
            state.loading = false;
            inner.publish(&state);
        });
    }
}

impl fmt::Debug for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("config", &self.inner.config)
            .field("phase", &self.snapshot().phase())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
