//! End-to-end listing flows: pagination, platform effects, filesystem
//! loading.

use vitryn_collection::{Collection, CollectionConfig, FsSource, Phase};
use vitryn_content::ContentKind;
use vitryn_query::PageMark;

use crate::common::{blog_source, thirteen_posts, voice_corpus, RecordingPlatform};

#[tokio::test]
async fn test_thirteen_items_paginate_into_three_pages() {
    let collection = Collection::new(CollectionConfig::default());
    collection.load(&blog_source(thirteen_posts())).await;

    let snapshot = collection.snapshot();
    assert_eq!(snapshot.page.total_items, 13);
    assert_eq!(snapshot.page.total_pages, 3);
    assert_eq!(snapshot.page.items.len(), 6);
    assert!(snapshot.page.has_next());
    assert!(!snapshot.page.has_prev());
    assert_eq!(
        snapshot.window,
        vec![PageMark::Page(1), PageMark::Page(2), PageMark::Page(3)]
    );

    collection.set_page(3).await;
    let snapshot = collection.snapshot();
    assert_eq!(snapshot.page.items.len(), 1);
    assert_eq!(snapshot.page.items[0].slug, "post-12");
    assert!(!snapshot.page.has_next());

    // Requests past the end serve the last page.
    collection.set_page(7).await;
    assert_eq!(collection.snapshot().page.page, 3);
}

#[tokio::test]
async fn test_page_change_scrolls_to_top() {
    let platform = RecordingPlatform::new();
    let collection = Collection::with_platform(CollectionConfig::default(), platform.clone());
    collection.load(&blog_source(thirteen_posts())).await;

    collection.set_page(2).await;
    collection.set_page(3).await;

    assert_eq!(platform.events(), vec!["scroll", "scroll"]);
}

#[tokio::test]
async fn test_share_link_uses_site_base_and_section_route() {
    let platform = RecordingPlatform::new();
    let config = CollectionConfig {
        site_base: "https://nightsky.example/".to_string(),
        ..Default::default()
    };
    let collection = Collection::with_platform(config, platform.clone());
    collection.load(&blog_source(voice_corpus())).await;

    assert!(collection.copy_share_link("voice-ui").await);
    assert!(!collection.copy_share_link("missing").await);

    assert_eq!(
        platform.events(),
        vec!["copy:https://nightsky.example/blog/voice-ui"]
    );
}

#[tokio::test]
async fn test_filesystem_section_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("alpha.md"),
        "---\ntitle: Alpha Guide\ncategory: Guides\ndate: 2024-02-01\n---\n\nHow to begin.",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("beta.md"),
        "---\ntitle: Beta Notes\ndate: 2024-03-01\n---\n\nLater thoughts.",
    )
    .unwrap();

    let collection = Collection::new(CollectionConfig::default());
    collection
        .load(&FsSource::new(ContentKind::Documentation, dir.path()))
        .await;

    let snapshot = collection.snapshot();
    assert_eq!(snapshot.phase(), Phase::Ready);
    assert_eq!(snapshot.page.total_items, 2);
    assert_eq!(snapshot.page.items[0].slug, "beta-notes");
    assert_eq!(snapshot.categories, vec!["All", "Guides"]);

    collection.set_page(1).await;
    assert!(collection.select_item("alpha-guide").await);
    let selected = collection.snapshot().selected.unwrap();
    assert_eq!(selected.title, "Alpha Guide");
    assert_eq!(selected.kind, ContentKind::Documentation);
    assert!(selected.body.contains("How to begin."));
}

#[tokio::test]
async fn test_missing_directory_reports_failed_phase() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent");

    let collection = Collection::new(CollectionConfig::default());
    collection
        .load(&FsSource::new(ContentKind::Help, &missing))
        .await;

    let snapshot = collection.snapshot();
    assert_eq!(snapshot.phase(), Phase::Failed);
    assert!(snapshot.error.is_some());
    assert_eq!(snapshot.page.total_items, 0);
    // Categories degrade to just the sentinel; the pager stays valid.
    assert_eq!(snapshot.categories, vec!["All"]);
    assert_eq!(snapshot.window, vec![PageMark::Page(1)]);
}

#[tokio::test]
async fn test_snapshot_subscription_observes_changes() {
    let collection = Collection::new(CollectionConfig::default());
    let mut rx = collection.subscribe();
    assert!(rx.borrow().loading);

    collection.load(&blog_source(voice_corpus())).await;
    rx.changed().await.unwrap();
    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.phase(), Phase::Ready);
    assert_eq!(snapshot.page.total_items, 4);
}
