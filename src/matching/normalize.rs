//! Normalized forms used when comparing user input and URLs.
//!
//! Navigated URLs reach us in whatever shape the browser produced, so every
//! comparison happens on a percent-decoded, lower-cased copy.

/// Percent-decode and lower-case. Invalid UTF-8 sequences are replaced.
pub fn decode_lower(input: &str) -> String {
    let decoded = urlencoding::decode_binary(input.as_bytes());
    String::from_utf8_lossy(&decoded).to_lowercase()
}

/// Identity form of a URL: decoded, lower-cased, trimmed, no trailing slash.
pub fn canonical_url(input: &str) -> String {
    let mut canonical = decode_lower(input.trim());
    while canonical.ends_with('/') {
        canonical.pop();
    }
    canonical
}

/// Drop a leading `scheme://` and any trailing slashes.
pub fn strip_scheme(decoded: &str) -> &str {
    let rest = match decoded.find("://") {
        Some(i) => &decoded[i + 3..],
        None => decoded,
    };
    rest.trim_end_matches('/')
}
