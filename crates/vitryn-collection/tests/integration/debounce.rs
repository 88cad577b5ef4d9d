//! Debounce semantics: delayed commits, cancellation, last write wins.
//!
//! These tests run with a paused clock, so the debounce windows elapse
//! deterministically and instantly.

use std::time::Duration;

use tokio::time::sleep;
use vitryn_collection::{Collection, CollectionConfig, Phase};

use crate::common::{blog_source, voice_corpus};

#[tokio::test(start_paused = true)]
async fn test_edit_echoes_immediately_but_commits_after_debounce() {
    let collection = Collection::new(CollectionConfig::default());
    collection.load(&blog_source(voice_corpus())).await;

    collection.set_search_term("voice").await;

    // Before the debounce window elapses: the term is echoed, the
    // loading flag is up, and the results are still the stale full set.
    let snapshot = collection.snapshot();
    assert_eq!(snapshot.search, "voice");
    assert!(snapshot.loading);
    assert_eq!(snapshot.phase(), Phase::Loading);
    assert_eq!(snapshot.page.total_items, 4);

    sleep(Duration::from_millis(300)).await;

    let snapshot = collection.snapshot();
    assert!(!snapshot.loading);
    assert_eq!(snapshot.phase(), Phase::Ready);
    assert_eq!(snapshot.page.total_items, 2);
    assert_eq!(snapshot.page.items[0].slug, "voice-ui");
}

#[tokio::test(start_paused = true)]
async fn test_rapid_edits_commit_only_the_last_term() {
    let collection = Collection::new(CollectionConfig::default());
    collection.load(&blog_source(voice_corpus())).await;

    collection.set_search_term("v").await;
    sleep(Duration::from_millis(100)).await;
    collection.set_search_term("vo").await;
    sleep(Duration::from_millis(100)).await;
    collection.set_search_term("voice latency").await;

    // 250ms after the first edit its timer has fired, but the edit was
    // superseded; nothing may have been committed on its behalf.
    sleep(Duration::from_millis(100)).await;
    let snapshot = collection.snapshot();
    assert!(snapshot.loading);
    assert_eq!(snapshot.search, "voice latency");
    assert_eq!(snapshot.page.total_items, 4);

    // Let the final edit's window elapse.
    sleep(Duration::from_millis(200)).await;
    let snapshot = collection.snapshot();
    assert!(!snapshot.loading);
    assert_eq!(snapshot.page.total_items, 1);
    assert_eq!(snapshot.page.items[0].slug, "latency");
}

#[tokio::test(start_paused = true)]
async fn test_search_and_category_share_one_debounce() {
    let collection = Collection::new(CollectionConfig::default());
    collection.load(&blog_source(voice_corpus())).await;

    collection.set_search_term("voice").await;
    sleep(Duration::from_millis(50)).await;
    collection.set_category("Guides").await;

    sleep(Duration::from_millis(300)).await;

    // The later category edit committed, and it carried the pending
    // search term with it.
    let snapshot = collection.snapshot();
    assert!(!snapshot.loading);
    assert_eq!(snapshot.search, "voice");
    assert_eq!(snapshot.category, "Guides");
    assert_eq!(snapshot.page.total_items, 1);
    assert_eq!(snapshot.page.items[0].slug, "latency");
}

#[tokio::test(start_paused = true)]
async fn test_edits_reset_to_first_page_immediately() {
    let config = CollectionConfig {
        page_size: 2,
        ..Default::default()
    };
    let collection = Collection::new(config);
    collection.load(&blog_source(voice_corpus())).await;

    collection.set_page(2).await;
    assert_eq!(collection.snapshot().page.page, 2);

    collection.set_search_term("anything").await;
    assert_eq!(collection.snapshot().page.page, 1);

    collection.set_page(2).await;
    collection.set_category("Guides").await;
    assert_eq!(collection.snapshot().page.page, 1);
}

#[tokio::test(start_paused = true)]
async fn test_clearing_the_search_restores_the_full_listing() {
    let collection = Collection::new(CollectionConfig::default());
    collection.load(&blog_source(voice_corpus())).await;

    collection.set_search_term("voice").await;
    sleep(Duration::from_millis(300)).await;
    assert_eq!(collection.snapshot().page.total_items, 2);

    collection.set_search_term("").await;
    sleep(Duration::from_millis(300)).await;
    let snapshot = collection.snapshot();
    assert_eq!(snapshot.page.total_items, 4);
    assert_eq!(snapshot.phase(), Phase::Ready);
}

#[tokio::test(start_paused = true)]
async fn test_debounce_window_is_configurable() {
    let config = CollectionConfig {
        debounce_ms: 500,
        ..Default::default()
    };
    let collection = Collection::new(config);
    collection.load(&blog_source(voice_corpus())).await;

    collection.set_search_term("voice").await;
    sleep(Duration::from_millis(300)).await;
    assert!(collection.snapshot().loading);

    sleep(Duration::from_millis(250)).await;
    assert!(!collection.snapshot().loading);
}
