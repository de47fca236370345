//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the shortcut
//! engine. All types derive Serde traits so the same schema can be read from
//! the extension's `shortcuts.json` or from a TOML file.

use serde::{Deserialize, Serialize};

/// Marker character used when the configuration does not name one.
pub const DEFAULT_MARKER: char = '@';

/// Default keyword reported when the shortcut list is empty. Nothing is
/// registered under it, so it never resolves.
pub const FALLBACK_KEYWORD: &str = "vvc";

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ShortcutConfig {
    /// Shortcut definitions in load order. The first one is the default.
    pub shortcuts: Vec<ShortcutDefinition>,

    /// Matching behaviour (marker, fallback keyword, search engines).
    pub matching: MatchingConfig,

    /// Autocomplete settings.
    pub suggestions: SuggestionConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// A single `{shortcut, url}` pair as persisted by the extension.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ShortcutDefinition {
    /// Keyword including its marker, e.g. `@news`.
    pub shortcut: String,

    /// Absolute destination URL.
    pub url: String,
}

impl ShortcutDefinition {
    pub fn new(shortcut: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            shortcut: shortcut.into(),
            url: url.into(),
        }
    }
}

/// Matching configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Prefix character that distinguishes a shortcut from ordinary text.
    pub marker: char,

    /// Search engine result endpoints whose query may carry a shortcut.
    pub search_engines: Vec<SearchEngineConfig>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
            search_engines: default_search_engines(),
        }
    }
}

/// A search engine results endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchEngineConfig {
    /// Name used in logs.
    pub name: String,

    /// Host pattern: `*` (any host), `name.*` (any TLD) or a domain.
    pub host: String,

    /// Path of the results page, e.g. `/search`.
    #[serde(default = "default_search_path")]
    pub path: String,

    /// Query parameter carrying the user's text.
    #[serde(default = "default_query_param")]
    pub query_param: String,
}

impl SearchEngineConfig {
    pub fn new(name: &str, host: &str, path: &str, query_param: &str) -> Self {
        Self {
            name: name.to_string(),
            host: host.to_string(),
            path: path.to_string(),
            query_param: query_param.to_string(),
        }
    }
}

fn default_search_path() -> String {
    "/search".to_string()
}

fn default_query_param() -> String {
    "q".to_string()
}

/// Built-in search engine table.
pub fn default_search_engines() -> Vec<SearchEngineConfig> {
    vec![
        SearchEngineConfig::new("google", "google.*", "/search", "q"),
        SearchEngineConfig::new("bing", "bing.com", "/search", "q"),
        SearchEngineConfig::new("duckduckgo", "duckduckgo.com", "/", "q"),
        SearchEngineConfig::new("yahoo", "search.yahoo.com", "/search", "p"),
        SearchEngineConfig::new("ecosia", "ecosia.org", "/search", "q"),
        SearchEngineConfig::new("brave", "search.brave.com", "/search", "q"),
        SearchEngineConfig::new("yandex", "yandex.*", "/search", "text"),
        SearchEngineConfig::new("baidu", "baidu.com", "/s", "wd"),
        // Catch-all for self-hosted or unknown engines using the common shape.
        SearchEngineConfig::new("generic", "*", "/search", "q"),
    ]
}

/// Autocomplete configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Maximum number of suggestions returned (unbounded when absent).
    pub max_results: Option<usize>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON lines instead of the human-readable format.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}
