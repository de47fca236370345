//! Autocomplete suggestions for the keyword input.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::registry::{ShortcutEntry, ShortcutRegistry};

/// One row of the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Suggestion {
    /// Text inserted when the row is picked: the keyword as configured,
    /// without its marker.
    pub content: String,
    pub description: String,
}

impl Suggestion {
    fn from_entry(entry: &ShortcutEntry, marker: char) -> Self {
        let keyword = entry.keyword();
        Self {
            content: keyword.strip_prefix(marker).unwrap_or(keyword).to_string(),
            description: format!("Go to: {} ({})", entry.destination(), entry.keyword()),
        }
    }
}

/// Filters the registry by partial keyword input.
#[derive(Debug, Clone)]
pub struct SuggestionProvider {
    registry: Arc<ShortcutRegistry>,
    max_results: Option<usize>,
}

impl SuggestionProvider {
    pub fn new(registry: Arc<ShortcutRegistry>, max_results: Option<usize>) -> Self {
        Self {
            registry,
            max_results,
        }
    }

    /// Entries whose bare keyword contains `partial` (case-insensitive), in load order.
    /// Empty input lists every entry.
    pub fn provide_suggestions(&self, partial: &str) -> Vec<Suggestion> {
        let marker = self.registry.marker();
        let partial = partial.trim();
        let needle = partial.strip_prefix(marker).unwrap_or(partial).to_lowercase();
        let limit = self.max_results.unwrap_or(usize::MAX);

        self.registry
            .all()
            .iter()
            .filter(|e| needle.is_empty() || e.bare_keyword().contains(needle.as_str()))
            .take(limit)
            .map(|e| Suggestion::from_entry(e, marker))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(max_results: Option<usize>) -> SuggestionProvider {
        let registry = ShortcutRegistry::build(
            vec![
                ShortcutEntry::new("@news", "https://news.example", '@').unwrap(),
                ShortcutEntry::new("@docs", "https://docs.example", '@').unwrap(),
                ShortcutEntry::new("@newsroom", "https://room.example", '@').unwrap(),
            ],
            '@',
        );
        SuggestionProvider::new(Arc::new(registry), max_results)
    }

    fn contents(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.content.as_str()).collect()
    }

    #[test]
    fn test_empty_input_lists_all_in_order() {
        let suggestions = provider(None).provide_suggestions("");
        assert_eq!(contents(&suggestions), vec!["news", "docs", "newsroom"]);
        assert_eq!(suggestions[0].description, "Go to: https://news.example (@news)");
    }

    #[test]
    fn test_substring_filter() {
        let provider = provider(None);
        assert_eq!(contents(&provider.provide_suggestions("ws")), vec!["news", "newsroom"]);
        assert_eq!(contents(&provider.provide_suggestions("OC")), vec!["docs"]);
        assert_eq!(contents(&provider.provide_suggestions("@room")), vec!["newsroom"]);
        assert!(provider.provide_suggestions("zzz").is_empty());
    }

    #[test]
    fn test_content_keeps_configured_case() {
        let registry = ShortcutRegistry::build(
            vec![ShortcutEntry::new("@GitHub", "https://github.com", '@').unwrap()],
            '@',
        );
        let provider = SuggestionProvider::new(Arc::new(registry), None);
        let suggestions = provider.provide_suggestions("hub");
        assert_eq!(contents(&suggestions), vec!["GitHub"]);
        assert_eq!(suggestions[0].description, "Go to: https://github.com (@GitHub)");
    }

    #[test]
    fn test_limit() {
        assert_eq!(contents(&provider(Some(2)).provide_suggestions("")), vec!["news", "docs"]);
    }
}
