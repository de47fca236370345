//! Per-tab navigation state machine.
//!
//! # States
//! - Idle: no navigation under inspection
//! - Checking: a navigated URL is being resolved
//! - Redirected: a redirect directive was issued for this tab
//!
//! # State Transitions
//! ```text
//! Idle → Checking: navigation event received
//! Checking → Redirected: URL resolved to a shortcut destination
//! Checking → Idle: no match, navigation proceeds unmodified
//! Redirected → Redirected: duplicate event for the redirected URL (no-op)
//! Redirected → Idle: the tab reports the destination URL
//! ```

use crate::matching::normalize::canonical_url;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TabState {
    #[default]
    Idle,
    Checking {
        url: String,
    },
    Redirected {
        from: String,
        to: String,
    },
}

impl TabState {
    /// True when `url` is the navigation this tab was already redirected away from.
    pub fn is_duplicate(&self, url: &str) -> bool {
        matches!(self, TabState::Redirected { from, .. } if same_url(from, url))
    }

    /// True when `url` is the destination this tab was redirected to.
    pub fn is_arrival(&self, url: &str) -> bool {
        matches!(self, TabState::Redirected { to, .. } if same_url(to, url))
    }
}

fn same_url(a: &str, b: &str) -> bool {
    canonical_url(a) == canonical_url(b)
}
