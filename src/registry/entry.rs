//! A single keyword → destination mapping.

use thiserror::Error;
use url::Url;

use crate::matching::normalize::canonical_url;

/// Reasons a shortcut definition cannot become an entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("{keyword:?} does not start with the marker {marker:?}")]
    MissingMarker { keyword: String, marker: char },

    #[error("{keyword:?} has no characters after the marker")]
    EmptyKeyword { keyword: String },

    #[error("{keyword:?} contains whitespace")]
    Whitespace { keyword: String },

    #[error("{keyword:?} has an invalid destination {url:?}: {source}")]
    InvalidDestination {
        keyword: String,
        url: String,
        source: url::ParseError,
    },
}

/// A validated shortcut.
///
/// The keyword keeps its marker as configured (`@news`); lookups use the
/// lower-cased marker-less form (`news`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutEntry {
    keyword: String,
    bare: String,
    destination: String,
    canonical_destination: String,
}

impl ShortcutEntry {
    /// Validate and build an entry from a `{shortcut, url}` pair.
    pub fn new(keyword: &str, destination: &str, marker: char) -> Result<Self, EntryError> {
        let keyword = keyword.trim();
        let bare = keyword
            .strip_prefix(marker)
            .ok_or_else(|| EntryError::MissingMarker {
                keyword: keyword.to_string(),
                marker,
            })?;

        if bare.is_empty() {
            return Err(EntryError::EmptyKeyword {
                keyword: keyword.to_string(),
            });
        }
        if bare.chars().any(char::is_whitespace) {
            return Err(EntryError::Whitespace {
                keyword: keyword.to_string(),
            });
        }

        let destination = destination.trim();
        Url::parse(destination).map_err(|source| EntryError::InvalidDestination {
            keyword: keyword.to_string(),
            url: destination.to_string(),
            source,
        })?;

        Ok(Self {
            keyword: keyword.to_string(),
            bare: bare.to_lowercase(),
            destination: destination.to_string(),
            canonical_destination: canonical_url(destination),
        })
    }

    /// Keyword as configured, marker included.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Lower-cased keyword without the marker.
    pub fn bare_keyword(&self) -> &str {
        &self.bare
    }

    /// Destination exactly as configured.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub(crate) fn canonical_destination(&self) -> &str {
        &self.canonical_destination
    }
}
