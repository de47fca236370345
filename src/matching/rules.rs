//! Navigated-URL matching rules.
//!
//! # Responsibilities
//! - Recognize a shortcut inside a search engine query
//! - Recognize the bare marker
//! - Recognize a keyword as the whole URL, a synthetic host or a path suffix
//!
//! # Design Decisions
//! - Each rule inspects the same pre-parsed, pre-decoded URL
//! - Rules are evaluated in a fixed order by the engine; first match wins
//! - No regex, every rule is a linear scan at worst

use std::fmt;

use url::Url;

use crate::matching::normalize::{decode_lower, strip_scheme};
use crate::matching::result::MatchRule;
use crate::matching::search::SearchEngine;
use crate::registry::{ShortcutEntry, ShortcutRegistry};

/// A URL under inspection, parsed and decoded once.
#[derive(Debug, Clone)]
pub struct NavigatedUrl {
    pub parsed: Url,
    /// Percent-decoded, lower-cased form of the raw URL.
    pub decoded: String,
}

impl NavigatedUrl {
    pub fn parse(raw: &str) -> Result<Self, url::ParseError> {
        let raw = raw.trim();
        let parsed = Url::parse(raw)?;
        Ok(Self {
            parsed,
            decoded: decode_lower(raw),
        })
    }
}

/// A single step of navigated-URL resolution.
pub trait NavigationRule: Send + Sync + fmt::Debug {
    /// Rule reported when this step matches.
    fn rule(&self) -> MatchRule;

    /// Returns the entry this URL resolves to, if the rule applies.
    fn find<'r>(&self, url: &NavigatedUrl, registry: &'r ShortcutRegistry) -> Option<&'r ShortcutEntry>;

    /// Whether this rule owns the URL, so that later rules must not run when
    /// `find` came back empty.
    fn is_terminal(&self, _url: &NavigatedUrl) -> bool {
        false
    }
}

/// Shortcut typed into the address bar and turned into a web search.
#[derive(Debug)]
pub struct SearchQueryRule {
    engines: Vec<SearchEngine>,
}

impl SearchQueryRule {
    pub fn new(engines: Vec<SearchEngine>) -> Self {
        Self { engines }
    }

    fn engine_for(&self, url: &NavigatedUrl) -> Option<&SearchEngine> {
        self.engines.iter().find(|e| e.matches(&url.parsed))
    }
}

impl NavigationRule for SearchQueryRule {
    fn rule(&self) -> MatchRule {
        MatchRule::SearchQuery
    }

    fn find<'r>(&self, url: &NavigatedUrl, registry: &'r ShortcutRegistry) -> Option<&'r ShortcutEntry> {
        let engine = self.engine_for(url)?;
        let query = engine.query(&url.parsed)?;
        let query = query.trim();
        let marker = registry.marker();

        tracing::trace!(engine = %engine.name(), query = %query, "Search query inspected");

        let keyword = query.strip_prefix(marker)?;
        if keyword.is_empty() {
            return registry.default_entry();
        }
        // Engines rewrite what was typed, so only an exact keyword is trusted.
        registry.lookup_exact(keyword, false)
    }

    /// A search results page carrying a query is never reinterpreted by path.
    fn is_terminal(&self, url: &NavigatedUrl) -> bool {
        self.engine_for(url)
            .is_some_and(|engine| engine.query(&url.parsed).is_some())
    }
}

/// The URL is nothing but the marker, e.g. `chrome://%40/`.
#[derive(Debug, Default)]
pub struct BareMarkerRule;

impl NavigationRule for BareMarkerRule {
    fn rule(&self) -> MatchRule {
        MatchRule::BareMarker
    }

    fn find<'r>(&self, url: &NavigatedUrl, registry: &'r ShortcutRegistry) -> Option<&'r ShortcutEntry> {
        let mut buf = [0u8; 4];
        let marker: &str = registry.marker().encode_utf8(&mut buf);
        if strip_scheme(url.decoded.trim()) == marker {
            registry.default_entry()
        } else {
            None
        }
    }
}

/// The decoded URL is itself a keyword.
#[derive(Debug, Default)]
pub struct ExactUrlRule;

impl NavigationRule for ExactUrlRule {
    fn rule(&self) -> MatchRule {
        MatchRule::ExactUrl
    }

    fn find<'r>(&self, url: &NavigatedUrl, registry: &'r ShortcutRegistry) -> Option<&'r ShortcutEntry> {
        registry
            .lookup_exact(&url.decoded, true)
            .or_else(|| registry.lookup_exact(&url.decoded, false))
    }
}

/// The browser already turned the shortcut into a hostname (`https://@news/`)
/// or a trailing path segment (`.../news`).
///
/// The hostname form only counts for the site root: no path beyond `/`, no
/// query and no fragment. Pages inside a site named after a keyword are left
/// alone.
#[derive(Debug, Default)]
pub struct StructuralRule;

impl NavigationRule for StructuralRule {
    fn rule(&self) -> MatchRule {
        MatchRule::Structural
    }

    fn find<'r>(&self, url: &NavigatedUrl, registry: &'r ShortcutRegistry) -> Option<&'r ShortcutEntry> {
        let at_root = matches!(url.parsed.path(), "" | "/")
            && url.parsed.query().is_none()
            && url.parsed.fragment().is_none();
        let host = url
            .parsed
            .host_str()
            .filter(|_| at_root)
            .map(str::to_lowercase);
        let marker = registry.marker();
        let tail = url.decoded.strip_suffix('/').unwrap_or(&url.decoded);

        registry.all().iter().find(|entry| {
            let keyword = entry.bare_keyword();
            host.as_deref() == Some(keyword)
                || tail.ends_with(&format!("/{keyword}"))
                || tail.ends_with(&format!("/{marker}{keyword}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::default_search_engines;
    use crate::matching::search::compile;

    fn registry() -> ShortcutRegistry {
        ShortcutRegistry::build(
            vec![
                ShortcutEntry::new("@news", "https://news.example", '@').unwrap(),
                ShortcutEntry::new("@docs", "https://docs.example", '@').unwrap(),
            ],
            '@',
        )
    }

    fn keyword_for(rule: &dyn NavigationRule, raw: &str) -> Option<String> {
        let registry = registry();
        let url = NavigatedUrl::parse(raw).unwrap();
        rule.find(&url, &registry).map(|e| e.keyword().to_string())
    }

    #[test]
    fn test_search_query_rule() {
        let rule = SearchQueryRule::new(compile(&default_search_engines()));
        assert_eq!(keyword_for(&rule, "https://www.google.com/search?q=%40docs").as_deref(), Some("@docs"));
        assert_eq!(keyword_for(&rule, "https://www.bing.com/search?q=+%40NEWS+").as_deref(), Some("@news"));
        // Bare marker searches resolve to the default entry.
        assert_eq!(keyword_for(&rule, "https://duckduckgo.com/?q=%40").as_deref(), Some("@news"));
        // Exact only: no prefix matching, no plain words.
        assert_eq!(keyword_for(&rule, "https://www.google.com/search?q=%40newsletter"), None);
        assert_eq!(keyword_for(&rule, "https://www.google.com/search?q=news"), None);
        assert_eq!(keyword_for(&rule, "https://www.google.com/maps?q=%40news"), None);
    }

    #[test]
    fn test_search_page_is_terminal() {
        let rule = SearchQueryRule::new(compile(&default_search_engines()));
        let terminal = |raw: &str| rule.is_terminal(&NavigatedUrl::parse(raw).unwrap());
        assert!(terminal("https://www.google.com/search?q=rust%2Fdocs"));
        assert!(terminal("https://intranet.example/search?q=x"));
        assert!(!terminal("https://www.google.com/search"));
        assert!(!terminal("https://www.google.com/maps?q=%40news"));
        assert!(!StructuralRule.is_terminal(&NavigatedUrl::parse("https://x.example/").unwrap()));
    }

    #[test]
    fn test_bare_marker_rule() {
        assert_eq!(keyword_for(&BareMarkerRule, "chrome://%40/").as_deref(), Some("@news"));
        assert_eq!(keyword_for(&BareMarkerRule, "chrome://%40").as_deref(), Some("@news"));
        assert_eq!(keyword_for(&BareMarkerRule, "https://news.example/"), None);
    }

    #[test]
    fn test_exact_url_rule() {
        assert_eq!(keyword_for(&ExactUrlRule, "https://news.example/"), None);

        let registry = ShortcutRegistry::build(
            vec![ShortcutEntry::new("@go:home", "https://home.example", '@').unwrap()],
            '@',
        );
        let url = NavigatedUrl::parse("go:home").unwrap();
        assert_eq!(ExactUrlRule.find(&url, &registry).map(|e| e.keyword()), Some("@go:home"));
    }

    #[test]
    fn test_structural_rule() {
        assert_eq!(keyword_for(&StructuralRule, "https://@news/").as_deref(), Some("@news"));
        assert_eq!(keyword_for(&StructuralRule, "http://docs/").as_deref(), Some("@docs"));
        assert_eq!(keyword_for(&StructuralRule, "https://intranet.example/go/docs").as_deref(), Some("@docs"));
        assert_eq!(keyword_for(&StructuralRule, "https://intranet.example/go/%40NEWS/").as_deref(), Some("@news"));
        assert_eq!(keyword_for(&StructuralRule, "https://intranet.example/go/newsroom"), None);
    }

    #[test]
    fn test_structural_host_form_only_at_site_root() {
        assert_eq!(keyword_for(&StructuralRule, "http://news").as_deref(), Some("@news"));
        assert_eq!(keyword_for(&StructuralRule, "http://docs/Getting_Started"), None);
        assert_eq!(keyword_for(&StructuralRule, "https://@news/some/article?id=3"), None);
        assert_eq!(keyword_for(&StructuralRule, "http://news/?page=2"), None);
        assert_eq!(keyword_for(&StructuralRule, "http://news/#top"), None);
    }
}
