//! A source document on disk and its normalization result.

use std::fs;
use std::path::{Path, PathBuf};

use swatch_color::{CatalogLookup, ColorSpaceConverter};
use swatch_core::CanonicalColor;
use tracing::info;

use crate::error::{SourceError, SourceResult};
use crate::storyboard::{StoryboardScan, normalize_storyboard};

/// A loaded and normalized source document.
///
/// Loading never touches the file; [`SourceDocument::save`] writes the
/// rewritten text back, and only when something changed.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    path: PathBuf,
    scan: StoryboardScan,
}

impl SourceDocument {
    /// Reads and normalizes a document.
    pub fn load<L: CatalogLookup>(
        path: impl AsRef<Path>,
        converter: &ColorSpaceConverter<L>,
    ) -> SourceResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| SourceError::io(path, e))?;
        let scan = normalize_storyboard(&text, converter).map_err(|e| e.with_path(path))?;
        Ok(Self {
            path: path.to_path_buf(),
            scan,
        })
    }

    /// Document path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Canonical colors found, in document order.
    pub fn colors(&self) -> &[CanonicalColor] {
        &self.scan.colors
    }

    /// Number of rewritten color elements.
    pub fn converted(&self) -> usize {
        self.scan.converted
    }

    /// Returns `true` when saving would change the file.
    pub fn is_modified(&self) -> bool {
        self.scan.is_modified()
    }

    /// Writes the rewritten document back. Returns whether a write happened.
    pub fn save(&self) -> SourceResult<bool> {
        let Some(text) = &self.scan.rewritten else {
            return Ok(false);
        };
        fs::write(&self.path, text).map_err(|e| SourceError::io(&self.path, e))?;
        info!(
            path = %self.path.display(),
            converted = self.scan.converted,
            "source document rewritten"
        );
        Ok(true)
    }
}
