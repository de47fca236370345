//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Every shortcut carries the marker, a non-empty keyword and an absolute URL
//! - Marker and search engine entries are usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Duplicate keywords are not an error: the registry keeps the first one
//! - Validation is pure function: ShortcutConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::ShortcutConfig;
use crate::registry::{EntryError, ShortcutEntry};

/// A semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("shortcut #{index}: {source}")]
    Shortcut { index: usize, source: EntryError },

    #[error("marker {0:?} must be a visible, non-alphanumeric character")]
    InvalidMarker(char),

    #[error("search engine {name:?}: {reason}")]
    SearchEngine { name: String, reason: &'static str },
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ShortcutConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let marker = config.matching.marker;

    if marker.is_alphanumeric() || marker.is_whitespace() || marker.is_control() {
        errors.push(ValidationError::InvalidMarker(marker));
    }

    for (index, def) in config.shortcuts.iter().enumerate() {
        if let Err(source) = ShortcutEntry::new(&def.shortcut, &def.url, marker) {
            errors.push(ValidationError::Shortcut { index, source });
        }
    }

    for engine in &config.matching.search_engines {
        let reason = if engine.host.trim().is_empty() {
            Some("host pattern is empty")
        } else if !engine.path.starts_with('/') {
            Some("path must start with '/'")
        } else if engine.query_param.is_empty() {
            Some("query parameter is empty")
        } else {
            None
        };
        if let Some(reason) = reason {
            errors.push(ValidationError::SearchEngine {
                name: engine.name.clone(),
                reason,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
