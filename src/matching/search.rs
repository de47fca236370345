//! Search engine results endpoints.
//!
//! # Design Decisions
//! - Host matching is case-insensitive; the URL parser already lower-cases hosts
//! - `name.*` covers country domains (`www.google.co.uk`)
//! - Path matching ignores a trailing slash

use url::Url;

use crate::config::schema::SearchEngineConfig;

/// How a search engine's host is recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostPattern {
    /// Any host.
    Any,
    /// A label followed by any TLD, e.g. `google.*`.
    AnyTld(String),
    /// A domain or any of its subdomains.
    Domain(String),
}

impl HostPattern {
    pub fn parse(pattern: &str) -> Self {
        let pattern = pattern.trim().to_lowercase();
        if pattern == "*" {
            HostPattern::Any
        } else if let Some(label) = pattern.strip_suffix(".*") {
            HostPattern::AnyTld(label.to_string())
        } else {
            HostPattern::Domain(pattern)
        }
    }

    pub fn matches(&self, host: &str) -> bool {
        match self {
            HostPattern::Any => true,
            HostPattern::AnyTld(label) => {
                let labels: Vec<&str> = host.split('.').collect();
                // The label must be followed by at least one more label.
                labels
                    .iter()
                    .take(labels.len().saturating_sub(1))
                    .any(|l| *l == label.as_str())
            }
            HostPattern::Domain(domain) => {
                host == domain
                    || host
                        .strip_suffix(domain.as_str())
                        .is_some_and(|rest| rest.ends_with('.'))
            }
        }
    }
}

/// A compiled search engine endpoint.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    name: String,
    host: HostPattern,
    path: String,
    query_param: String,
}

impl SearchEngine {
    pub fn new(config: &SearchEngineConfig) -> Self {
        Self {
            name: config.name.clone(),
            host: HostPattern::parse(&config.host),
            path: config.path.clone(),
            query_param: config.query_param.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True if `url` points at this engine's results page.
    pub fn matches(&self, url: &Url) -> bool {
        let Some(host) = url.host_str() else {
            return false;
        };
        let host = host.to_lowercase();
        self.host.matches(&host)
            && url.path().trim_end_matches('/') == self.path.trim_end_matches('/')
    }

    /// Decoded value of the query parameter, if present.
    pub fn query(&self, url: &Url) -> Option<String> {
        url.query_pairs()
            .find(|(key, _)| key == self.query_param.as_str())
            .map(|(_, value)| value.into_owned())
    }
}

/// Compile the configured engine table, preserving order.
pub fn compile(configs: &[SearchEngineConfig]) -> Vec<SearchEngine> {
    configs.iter().map(SearchEngine::new).collect()
}
