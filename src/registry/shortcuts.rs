//! Shortcut lookup table.
//!
//! # Responsibilities
//! - Store validated entries in load order
//! - O(1) lookup by keyword, with or without the marker
//! - Resolve the default entry used as fallback target
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc without locks)
//! - Keyword collisions keep the first occurrence
//! - Keys are lower-cased; navigated URLs are compared lower-cased too

use std::collections::{HashMap, HashSet};

use crate::config::schema::{ShortcutConfig, DEFAULT_MARKER, FALLBACK_KEYWORD};
use crate::matching::normalize::canonical_url;
use crate::registry::entry::ShortcutEntry;

/// Keyword → destination mapping, built once at startup.
#[derive(Debug, Clone)]
pub struct ShortcutRegistry {
    marker: char,
    entries: Vec<ShortcutEntry>,
    /// `@news` → index into `entries`.
    by_marked: HashMap<String, usize>,
    /// `news` → index into `entries`.
    by_bare: HashMap<String, usize>,
    destinations: HashSet<String>,
    default_keyword: String,
    default_index: Option<usize>,
}

impl ShortcutRegistry {
    /// Build the registry from entries in load order.
    ///
    /// The default keyword is the first entry's keyword, or [`FALLBACK_KEYWORD`]
    /// when there are no entries.
    pub fn build(entries: impl IntoIterator<Item = ShortcutEntry>, marker: char) -> Self {
        let mut kept = Vec::new();
        let mut by_marked = HashMap::new();
        let mut by_bare = HashMap::new();
        let mut destinations = HashSet::new();

        for entry in entries {
            if by_bare.contains_key(entry.bare_keyword()) {
                tracing::warn!(
                    keyword = %entry.keyword(),
                    destination = %entry.destination(),
                    "Duplicate shortcut ignored, keeping first definition"
                );
                continue;
            }
            let index = kept.len();
            by_marked.insert(format!("{marker}{}", entry.bare_keyword()), index);
            by_bare.insert(entry.bare_keyword().to_string(), index);
            destinations.insert(entry.canonical_destination().to_string());
            kept.push(entry);
        }

        let default_keyword = kept
            .first()
            .map(|e| e.bare_keyword().to_string())
            .unwrap_or_else(|| FALLBACK_KEYWORD.to_string());
        let default_index = by_bare.get(&default_keyword).copied();

        Self {
            marker,
            entries: kept,
            by_marked,
            by_bare,
            destinations,
            default_keyword,
            default_index,
        }
    }

    /// A registry with no shortcuts, used when configuration fails to load.
    pub fn empty() -> Self {
        Self::build(Vec::new(), DEFAULT_MARKER)
    }

    /// Build from a validated configuration.
    ///
    /// Definitions that fail entry validation are logged and skipped.
    pub fn from_config(config: &ShortcutConfig) -> Self {
        let marker = config.matching.marker;
        let entries = config
            .shortcuts
            .iter()
            .filter_map(|def| match ShortcutEntry::new(&def.shortcut, &def.url, marker) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping invalid shortcut");
                    None
                }
            })
            .collect::<Vec<_>>();

        let registry = Self::build(entries, marker);
        tracing::info!(
            shortcuts = registry.len(),
            default_keyword = %registry.default_keyword(),
            "Shortcut registry built"
        );
        registry
    }

    /// Exact, case-insensitive lookup.
    ///
    /// With `with_marker` the token is expected to carry the marker (`@news`),
    /// otherwise it is matched against the bare keyword (`news`).
    pub fn lookup_exact(&self, token: &str, with_marker: bool) -> Option<&ShortcutEntry> {
        let key = token.trim().to_lowercase();
        let map = if with_marker { &self.by_marked } else { &self.by_bare };
        map.get(&key).map(|&i| &self.entries[i])
    }

    /// All entries in load order.
    pub fn all(&self) -> &[ShortcutEntry] {
        &self.entries
    }

    pub fn default_entry(&self) -> Option<&ShortcutEntry> {
        self.default_index.map(|i| &self.entries[i])
    }

    pub fn default_destination(&self) -> Option<&str> {
        self.default_entry().map(ShortcutEntry::destination)
    }

    /// Bare keyword of the default entry (may not resolve when empty).
    pub fn default_keyword(&self) -> &str {
        &self.default_keyword
    }

    /// Whether `url` is, after normalization, one of the configured destinations.
    pub fn is_destination(&self, url: &str) -> bool {
        self.destinations.contains(&canonical_url(url))
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::empty()
    }
}
