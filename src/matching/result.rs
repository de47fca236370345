//! Match outcomes.

use std::fmt;

use crate::registry::ShortcutEntry;

/// Which precedence step produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchRule {
    /// Typed text equals a bare keyword.
    ExactKeyword,
    /// Typed text equals a keyword once the marker is re-added.
    MarkedKeyword,
    /// Typed text starts with a bare keyword.
    Prefix,
    /// Nothing matched; the default entry was used.
    Default,
    /// A search engine query carried the shortcut.
    SearchQuery,
    /// The URL was the bare marker.
    BareMarker,
    /// The whole decoded URL equals a keyword.
    ExactUrl,
    /// The keyword appeared as a synthetic host or trailing path segment.
    Structural,
}

impl MatchRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchRule::ExactKeyword => "exact_keyword",
            MatchRule::MarkedKeyword => "marked_keyword",
            MatchRule::Prefix => "prefix",
            MatchRule::Default => "default",
            MatchRule::SearchQuery => "search_query",
            MatchRule::BareMarker => "bare_marker",
            MatchRule::ExactUrl => "exact_url",
            MatchRule::Structural => "structural",
        }
    }
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Keyword as configured, marker included.
    pub keyword: String,
    pub destination: String,
    pub rule: MatchRule,
}

impl Resolution {
    pub fn new(entry: &ShortcutEntry, rule: MatchRule) -> Self {
        Self {
            keyword: entry.keyword().to_string(),
            destination: entry.destination().to_string(),
            rule,
        }
    }
}

/// Result of every resolution function. "No match" is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Matched(Resolution),
    NoMatch,
}

impl MatchResult {
    pub fn matched(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }

    pub fn destination(&self) -> Option<&str> {
        match self {
            MatchResult::Matched(r) => Some(&r.destination),
            MatchResult::NoMatch => None,
        }
    }

    pub fn rule(&self) -> Option<MatchRule> {
        match self {
            MatchResult::Matched(r) => Some(r.rule),
            MatchResult::NoMatch => None,
        }
    }

    pub(crate) fn from_entry(entry: Option<&ShortcutEntry>, rule: MatchRule) -> Self {
        entry.map_or(MatchResult::NoMatch, |e| MatchResult::Matched(Resolution::new(e, rule)))
    }
}
