//! Page URL change detection for single-page apps.

use crate::watcher::message::PageMessage;

/// Reports the page URL once on load and again whenever it changes.
#[derive(Debug, Clone, Default)]
pub struct UrlObserver {
    last: Option<String>,
}

impl UrlObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, url: &str) -> Option<PageMessage> {
        if self.last.as_deref() == Some(url) {
            return None;
        }
        self.last = Some(url.to_string());
        Some(PageMessage::CheckUrl { url: url.to_string() })
    }
}
