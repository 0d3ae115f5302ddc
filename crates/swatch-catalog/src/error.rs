//! Error types for catalog operations.

use std::path::PathBuf;
use swatch_source::SourceError;
use thiserror::Error;

/// Catalog operation error.
///
/// Malformed catalog content never shows up here: unreadable colors and
/// provenance degrade to defaults during reconciliation. These are the
/// conditions a caller has to see.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The entry directory already exists; nothing was overwritten.
    #[error("catalog entry {name:?} already exists at {}", .path.display())]
    DuplicateEntry {
        /// Requested entry name
        name: String,
        /// Existing directory
        path: PathBuf,
    },

    /// A storage operation failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path being read, written or removed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A record could not be serialized.
    #[error("cannot serialize {}: {source}", .path.display())]
    Json {
        /// Destination path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// The configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),

    /// A source document could not be processed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// A search pattern could not be compiled.
    #[error("invalid search pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl CatalogError {
    /// Creates a [`CatalogError::Io`] error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for [`CatalogError::DuplicateEntry`].
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateEntry { .. })
    }
}

impl From<serde_yaml::Error> for CatalogError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Config(e.to_string())
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
