//! Navigation interception.
//!
//! # Responsibilities
//! - Inspect every navigation-related event for a tab
//! - Redirect when the URL resolves to a shortcut
//! - Absorb duplicate events for a navigation already redirected
//!
//! # Design Decisions
//! - One state slot per tab; Idle tabs are not stored
//! - Directives are fire-and-forget through `TabNavigator`
//! - All listeners share one check, so ordering between them does not matter

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::guard::navigator::{TabId, TabNavigator};
use crate::guard::state::TabState;
use crate::matching::{MatchEngine, MatchResult};

/// Event that carried the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationSource {
    BeforeNavigate,
    Committed,
    TabUpdated,
    PageReport,
}

impl fmt::Display for NavigationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NavigationSource::BeforeNavigate => "before_navigate",
            NavigationSource::Committed => "committed",
            NavigationSource::TabUpdated => "tab_updated",
            NavigationSource::PageReport => "page_report",
        };
        f.write_str(name)
    }
}

/// What the guard did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// A redirect directive was issued.
    Redirected { destination: String },
    /// Navigation proceeds unmodified.
    Proceed,
    /// Event repeats a navigation that was already redirected.
    Suppressed,
}

/// Redirects tabs whose navigation encodes a shortcut.
#[derive(Debug)]
pub struct NavigationGuard {
    engine: Arc<MatchEngine>,
    tabs: HashMap<TabId, TabState>,
}

impl NavigationGuard {
    pub fn new(engine: Arc<MatchEngine>) -> Self {
        Self {
            engine,
            tabs: HashMap::new(),
        }
    }

    pub fn on_before_navigate(&mut self, tab: TabId, url: &str, nav: &mut dyn TabNavigator) -> GuardOutcome {
        self.check(NavigationSource::BeforeNavigate, tab, url, nav)
    }

    pub fn on_navigation_committed(&mut self, tab: TabId, url: &str, nav: &mut dyn TabNavigator) -> GuardOutcome {
        self.check(NavigationSource::Committed, tab, url, nav)
    }

    pub fn on_tab_url_updated(&mut self, tab: TabId, url: &str, nav: &mut dyn TabNavigator) -> GuardOutcome {
        self.check(NavigationSource::TabUpdated, tab, url, nav)
    }

    /// URL reported by the page itself (single-page app route changes).
    pub fn on_page_url_reported(&mut self, tab: TabId, url: &str, nav: &mut dyn TabNavigator) -> GuardOutcome {
        self.check(NavigationSource::PageReport, tab, url, nav)
    }

    pub fn on_tab_closed(&mut self, tab: TabId) {
        self.tabs.remove(&tab);
    }

    pub fn state(&self, tab: TabId) -> TabState {
        self.tabs.get(&tab).cloned().unwrap_or_default()
    }

    /// Number of tabs with a non-idle state.
    pub fn tracked_tabs(&self) -> usize {
        self.tabs.len()
    }

    fn check(&mut self, source: NavigationSource, tab: TabId, url: &str, nav: &mut dyn TabNavigator) -> GuardOutcome {
        if url.trim().is_empty() {
            return GuardOutcome::Proceed;
        }

        let current = self.state(tab);
        if current.is_duplicate(url) {
            tracing::trace!(tab_id = %tab, source = %source, url = %url, "Duplicate event for redirected navigation");
            return GuardOutcome::Suppressed;
        }
        if current.is_arrival(url) {
            tracing::debug!(tab_id = %tab, source = %source, url = %url, "Tab reached shortcut destination");
            self.tabs.remove(&tab);
            return GuardOutcome::Proceed;
        }

        self.tabs.insert(tab, TabState::Checking { url: url.to_string() });

        match self.engine.resolve_navigated_url(url) {
            MatchResult::Matched(resolution) => {
                tracing::info!(
                    tab_id = %tab,
                    source = %source,
                    keyword = %resolution.keyword,
                    destination = %resolution.destination,
                    rule = %resolution.rule,
                    "Redirecting tab"
                );
                nav.update_tab(Some(tab), &resolution.destination);
                self.tabs.insert(
                    tab,
                    TabState::Redirected {
                        from: url.to_string(),
                        to: resolution.destination.clone(),
                    },
                );
                GuardOutcome::Redirected {
                    destination: resolution.destination,
                }
            }
            MatchResult::NoMatch => {
                self.tabs.remove(&tab);
                GuardOutcome::Proceed
            }
        }
    }
}
