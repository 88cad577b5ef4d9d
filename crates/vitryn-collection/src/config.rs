//! Collection configuration.

use serde::{Deserialize, Serialize};
use vitryn_query::SortOrder;

/// Tuning knobs for a content collection.
///
/// Section containers share these defaults; a site can override any of
/// them (for example a denser help index with a larger page size).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Items per listing page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Delay before an edited search term or category takes effect.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Width of the condensed pagination control.
    #[serde(default = "default_max_visible_pages")]
    pub max_visible_pages: usize,

    /// Cap on the number of search suggestions offered.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Default listing order.
    #[serde(default)]
    pub order: SortOrder,

    /// Base URL prepended to share links; blank yields site-relative
    /// links.
    #[serde(default)]
    pub site_base: String,
}

fn default_page_size() -> usize {
    6
}

fn default_debounce_ms() -> u64 {
    250
}

fn default_max_visible_pages() -> usize {
    5
}

fn default_suggestion_limit() -> usize {
    10
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
            max_visible_pages: default_max_visible_pages(),
            suggestion_limit: default_suggestion_limit(),
            order: SortOrder::default(),
            site_base: String::new(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = CollectionConfig::default();
        assert_eq!(config.page_size, 6);
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.max_visible_pages, 5);
        assert_eq!(config.suggestion_limit, 10);
        assert_eq!(config.order, SortOrder::NewestFirst);
        assert!(config.site_base.is_empty());
    }

    #[test]
    fn test_config_deserialization_with_defaults() {
        let json = r#"{"page_size": 12}"#;
        let config: CollectionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.page_size, 12);
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.suggestion_limit, 10);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = CollectionConfig {
            site_base: "https://nightsky.example".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: CollectionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
