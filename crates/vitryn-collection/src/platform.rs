//! Host-environment hooks.
//!
//! A collection drives listing state, but a few effects belong to the
//! surrounding shell: scrolling back to the top after a page change,
//! putting a share link on the clipboard. [`Platform`] abstracts those
//! so the same collection logic runs under a web front end, a desktop
//! shell, or a test harness.

/// Side effects delegated to the embedding environment.
///
/// Every method has a no-op default, so hosts implement only what they
/// support.
pub trait Platform: Send + Sync {
    /// Scroll the listing viewport back to the top.
    fn scroll_to_top(&self) {}

    /// Place `text` on the host clipboard.
    fn copy_text(&self, _text: &str) {}
}

/// A platform that ignores every effect. Used by default and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPlatform;

impl Platform for NullPlatform {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_platform_is_usable_as_trait_object() {
        let platform: Box<dyn Platform> = Box::new(NullPlatform);
        platform.scroll_to_top();
        platform.copy_text("anything");
    }
}
