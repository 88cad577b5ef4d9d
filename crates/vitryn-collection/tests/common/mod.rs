//! Shared fixtures for collection integration tests.

use std::sync::{Arc, Mutex};

use vitryn_collection::{Platform, StaticSource};
use vitryn_content::{ContentItem, ContentKind};

/// Platform stub that records every effect it is asked to perform.
#[derive(Default)]
pub struct RecordingPlatform {
    events: Mutex<Vec<String>>,
}

impl RecordingPlatform {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl Platform for RecordingPlatform {
    fn scroll_to_top(&self) {
        self.events.lock().unwrap().push("scroll".to_string());
    }

    fn copy_text(&self, text: &str) {
        self.events.lock().unwrap().push(format!("copy:{text}"));
    }
}

/// A dated blog post with the given slug and title.
pub fn post(slug: &str, title: &str, date: &str) -> ContentItem {
    ContentItem::builder(ContentKind::Blog)
        .slug(slug)
        .title(title)
        .date(date)
        .build()
}

/// A small mixed corpus: two "voice" items, one categorized, one plain.
pub fn voice_corpus() -> Vec<ContentItem> {
    vec![
        post("voice-ui", "Voice Interfaces in Production", "2024-03-01"),
        ContentItem::builder(ContentKind::Blog)
            .slug("latency")
            .title("Measuring Voice Latency")
            .category("Guides")
            .date("2024-02-01")
            .build(),
        post("review", "Quarterly Review", "2024-01-15"),
        post("roadmap", "Roadmap Update", "2024-01-01"),
    ]
}

/// Thirteen dated posts, newest first, for pagination coverage.
pub fn thirteen_posts() -> Vec<ContentItem> {
    (0..13)
        .map(|i| {
            post(
                &format!("post-{i:02}"),
                &format!("Post {i:02}"),
                &format!("2024-01-{:02}", 28 - i),
            )
        })
        .collect()
}

/// Static blog source over `items`.
pub fn blog_source(items: Vec<ContentItem>) -> StaticSource {
    StaticSource::new(ContentKind::Blog, items)
}
