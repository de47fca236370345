//! Tab identity and the redirect directive seam.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Browser tab identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TabId(pub i64);

impl From<i64> for TabId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues "set this tab's location" directives to the host.
///
/// Fire-and-forget: no result, no retry. `None` targets the active tab.
pub trait TabNavigator {
    fn update_tab(&mut self, tab: Option<TabId>, url: &str);
}

/// Navigator that records directives, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingNavigator {
    pub updates: Vec<(Option<TabId>, String)>,
}

impl TabNavigator for RecordingNavigator {
    fn update_tab(&mut self, tab: Option<TabId>, url: &str) {
        self.updates.push((tab, url.to_string()));
    }
}
