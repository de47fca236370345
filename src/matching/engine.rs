//! Shortcut resolution.
//!
//! # Typed text (first match wins)
//! ```text
//! exact bare keyword → exact keyword with marker → first keyword prefix
//!     (load order) → default entry → NoMatch
//! ```
//!
//! # Navigated URL (first match wins)
//! ```text
//! already a destination → NoMatch
//! unparseable           → NoMatch
//! search engine query   → exact keyword / bare marker, else NoMatch
//! bare marker           → default entry
//! exact decoded URL     → keyword
//! synthetic host (site root only) / path suffix → keyword
//! ```

use std::sync::Arc;

use crate::config::schema::MatchingConfig;
use crate::matching::result::{MatchResult, MatchRule};
use crate::matching::rules::{
    BareMarkerRule, ExactUrlRule, NavigatedUrl, NavigationRule, SearchQueryRule, StructuralRule,
};
use crate::matching::search::{compile, SearchEngine};
use crate::registry::ShortcutRegistry;

/// Pure resolution over a shared, immutable registry.
#[derive(Debug)]
pub struct MatchEngine {
    registry: Arc<ShortcutRegistry>,
    rules: Vec<Box<dyn NavigationRule>>,
}

impl MatchEngine {
    /// Create an engine with the given search engine table.
    pub fn new(registry: Arc<ShortcutRegistry>, search_engines: Vec<SearchEngine>) -> Self {
        let rules: Vec<Box<dyn NavigationRule>> = vec![
            Box::new(SearchQueryRule::new(search_engines)),
            Box::new(BareMarkerRule),
            Box::new(ExactUrlRule),
            Box::new(StructuralRule),
        ];
        Self { registry, rules }
    }

    pub fn from_config(registry: Arc<ShortcutRegistry>, config: &MatchingConfig) -> Self {
        Self::new(registry, compile(&config.search_engines))
    }

    pub fn registry(&self) -> &ShortcutRegistry {
        &self.registry
    }

    /// Resolve a token typed into a keyword-triggered input.
    ///
    /// The caller normally strips the marker; a leading marker is tolerated.
    pub fn resolve_typed_text(&self, text: &str) -> MatchResult {
        let registry = &*self.registry;
        let marker = registry.marker();
        let text = text.trim();
        let text = text.strip_prefix(marker).unwrap_or(text).to_lowercase();

        let result = if let Some(entry) = registry.lookup_exact(&text, false) {
            MatchResult::from_entry(Some(entry), MatchRule::ExactKeyword)
        } else if let Some(entry) = registry.lookup_exact(&format!("{marker}{text}"), true) {
            MatchResult::from_entry(Some(entry), MatchRule::MarkedKeyword)
        } else if let Some(entry) = registry
            .all()
            .iter()
            .find(|e| text.starts_with(e.bare_keyword()))
        {
            MatchResult::from_entry(Some(entry), MatchRule::Prefix)
        } else {
            MatchResult::from_entry(registry.default_entry(), MatchRule::Default)
        };

        match &result {
            MatchResult::Matched(r) => tracing::debug!(
                text = %text,
                keyword = %r.keyword,
                destination = %r.destination,
                rule = %r.rule,
                "Typed text resolved"
            ),
            MatchResult::NoMatch => tracing::debug!(text = %text, "Typed text did not resolve"),
        }
        result
    }

    /// Resolve a fully formed URL the browser is about to load.
    ///
    /// Never fails: malformed URLs are logged and treated as no match.
    pub fn resolve_navigated_url(&self, url: &str) -> MatchResult {
        let registry = &*self.registry;
        if url.trim().is_empty() {
            return MatchResult::NoMatch;
        }

        // Landing on a destination must not redirect again.
        if registry.is_destination(url) {
            tracing::trace!(url = %url, "URL is a shortcut destination");
            return MatchResult::NoMatch;
        }

        let navigated = match NavigatedUrl::parse(url) {
            Ok(n) => n,
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Ignoring unparseable URL");
                return MatchResult::NoMatch;
            }
        };

        for rule in &self.rules {
            if let Some(entry) = rule.find(&navigated, registry) {
                let result = MatchResult::from_entry(Some(entry), rule.rule());
                tracing::debug!(
                    url = %url,
                    keyword = %entry.keyword(),
                    destination = %entry.destination(),
                    rule = %rule.rule(),
                    "Navigated URL resolved"
                );
                return result;
            }
            if rule.is_terminal(&navigated) {
                tracing::trace!(url = %url, rule = %rule.rule(), "Resolution stopped without a match");
                return MatchResult::NoMatch;
            }
        }

        MatchResult::NoMatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::default_search_engines;
    use crate::registry::ShortcutEntry;

    fn engine_with(entries: &[(&str, &str)]) -> MatchEngine {
        let entries = entries
            .iter()
            .map(|(k, u)| ShortcutEntry::new(k, u, '@').unwrap())
            .collect::<Vec<_>>();
        let registry = Arc::new(ShortcutRegistry::build(entries, '@'));
        MatchEngine::new(registry, compile(&default_search_engines()))
    }

    fn sample() -> MatchEngine {
        engine_with(&[("@news", "https://news.example"), ("@docs", "https://docs.example")])
    }

    #[test]
    fn test_typed_text_scenario() {
        let engine = sample();
        let news = engine.resolve_typed_text("news");
        assert_eq!(news.destination(), Some("https://news.example"));
        assert_eq!(news.rule(), Some(MatchRule::ExactKeyword));

        let letter = engine.resolve_typed_text("newsletter");
        assert_eq!(letter.destination(), Some("https://news.example"));
        assert_eq!(letter.rule(), Some(MatchRule::Prefix));

        let unknown = engine.resolve_typed_text("xyz");
        assert_eq!(unknown.destination(), Some("https://news.example"));
        assert_eq!(unknown.rule(), Some(MatchRule::Default));

        assert_eq!(engine.resolve_typed_text("@docs").destination(), Some("https://docs.example"));
        assert_eq!(engine.resolve_typed_text(" DOCS ").destination(), Some("https://docs.example"));
    }

    #[test]
    fn test_every_keyword_resolves_exactly_and_by_prefix() {
        let engine = engine_with(&[
            ("@a", "https://a.example"),
            ("@mail", "https://mail.example"),
            ("@maps", "https://maps.example"),
        ]);
        for entry in engine.registry().all() {
            let exact = engine.resolve_typed_text(entry.bare_keyword());
            assert_eq!(exact.destination(), Some(entry.destination()));
        }
        assert_eq!(engine.resolve_typed_text("mail2").destination(), Some("https://mail.example"));
        assert_eq!(engine.resolve_typed_text("mapsx").destination(), Some("https://maps.example"));
    }

    #[test]
    fn test_exact_beats_earlier_prefix() {
        let engine = engine_with(&[("@go", "https://go.example"), ("@gold", "https://gold.example")]);
        assert_eq!(engine.resolve_typed_text("gold").destination(), Some("https://gold.example"));
        // Prefix scan follows load order.
        assert_eq!(engine.resolve_typed_text("golden").destination(), Some("https://go.example"));
    }

    #[test]
    fn test_empty_registry_never_matches() {
        let engine = engine_with(&[]);
        assert_eq!(engine.resolve_typed_text("vvc"), MatchResult::NoMatch);
        assert_eq!(engine.resolve_typed_text("anything"), MatchResult::NoMatch);
        assert_eq!(
            engine.resolve_navigated_url("https://www.google.com/search?q=%40"),
            MatchResult::NoMatch
        );
    }

    #[test]
    fn test_navigated_url_scenario() {
        let engine = sample();
        let docs = engine.resolve_navigated_url("https://www.google.com/search?q=%40docs");
        assert_eq!(docs.destination(), Some("https://docs.example"));
        assert_eq!(docs.rule(), Some(MatchRule::SearchQuery));

        let host = engine.resolve_navigated_url("https://@news/");
        assert_eq!(host.destination(), Some("https://news.example"));
        assert_eq!(host.rule(), Some(MatchRule::Structural));
    }

    #[test]
    fn test_navigated_url_case_and_encoding_insensitive() {
        let engine = sample();
        let encoded = engine.resolve_navigated_url("https://EXAMPLE.com/search?q=%40news");
        let plain = engine.resolve_navigated_url("https://example.com/search?q=@news");
        assert!(encoded.matched());
        assert_eq!(encoded, plain);
    }

    #[test]
    fn test_navigated_url_is_idempotent() {
        let engine = engine_with(&[
            ("@news", "https://news.example"),
            ("@team", "https://intranet.example/team"),
        ]);
        for entry in engine.registry().all() {
            assert_eq!(engine.resolve_navigated_url(entry.destination()), MatchResult::NoMatch);
            assert_eq!(
                engine.resolve_navigated_url(&format!("{}/", entry.destination())),
                MatchResult::NoMatch
            );
        }
    }

    #[test]
    fn test_malformed_and_unrelated_urls() {
        let engine = sample();
        assert_eq!(engine.resolve_navigated_url(""), MatchResult::NoMatch);
        assert_eq!(engine.resolve_navigated_url("not a url"), MatchResult::NoMatch);
        assert_eq!(engine.resolve_navigated_url("http://[::1"), MatchResult::NoMatch);
        assert_eq!(engine.resolve_navigated_url("https://www.rust-lang.org/learn"), MatchResult::NoMatch);
        assert_eq!(
            engine.resolve_navigated_url("https://www.google.com/search?q=rust"),
            MatchResult::NoMatch
        );
    }

    #[test]
    fn test_pages_inside_keyword_site_do_not_redirect() {
        let engine = engine_with(&[("@news", "https://news.example"), ("@wiki", "http://wiki/")]);
        assert_eq!(engine.resolve_navigated_url("http://wiki/Main_Page"), MatchResult::NoMatch);
        assert_eq!(engine.resolve_navigated_url("http://wiki/?search=x"), MatchResult::NoMatch);
        assert_eq!(
            engine.resolve_navigated_url("https://@news/some/article?id=3"),
            MatchResult::NoMatch
        );
        assert_eq!(
            engine.resolve_navigated_url("https://@wiki/").destination(),
            Some("http://wiki/")
        );
    }

    #[test]
    fn test_search_page_never_falls_through_to_path_rules() {
        let engine = sample();
        assert_eq!(
            engine.resolve_navigated_url("https://www.google.com/search?q=rust%2Fdocs"),
            MatchResult::NoMatch
        );
        assert_eq!(
            engine.resolve_navigated_url("https://duckduckgo.com/?q=go%2Fnews"),
            MatchResult::NoMatch
        );
        // Without a query the page is not a search, so path rules still apply.
        assert_eq!(
            engine.resolve_navigated_url("https://www.google.com/go/docs").destination(),
            Some("https://docs.example")
        );
    }
}
