//! Error types for source document handling.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors raised while discovering, reading or rewriting source documents.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading or writing a document failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Document path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The document is not well-formed XML.
    #[error("malformed XML{} at byte {position}: {message}", location(.path))]
    Xml {
        /// Document path, when known
        path: Option<PathBuf>,
        /// Byte offset reported by the parser
        position: u64,
        /// Parser message
        message: String,
    },

    /// A discovery pattern could not be compiled.
    #[error("invalid search pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl SourceError {
    /// Creates an [`SourceError::Io`] error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Attaches a document path to an XML error.
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            Self::Xml {
                position, message, ..
            } => Self::Xml {
                path: Some(path.to_path_buf()),
                position,
                message,
            },
            other => other,
        }
    }

    /// Document the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Xml { path, .. } => path.as_deref(),
            Self::Pattern(_) => None,
        }
    }
}

impl From<glob::GlobError> for SourceError {
    fn from(e: glob::GlobError) -> Self {
        let path = e.path().to_path_buf();
        Self::io(path, e.into_error())
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}
