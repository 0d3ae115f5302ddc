//! Creation of catalog roots and entries.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use swatch_core::CanonicalColor;
use tracing::{debug, warn};

use crate::contents::{ColorContents, RootContents, write_contents};
use crate::error::{CatalogError, CatalogResult};
use crate::layout::CatalogLayout;
use crate::provenance::Provenance;

/// Writes machine-generated entries.
#[derive(Debug, Clone, Default)]
pub struct CatalogWriter {
    layout: CatalogLayout,
}

impl CatalogWriter {
    /// Creates a writer for a layout.
    pub fn new(layout: CatalogLayout) -> Self {
        Self { layout }
    }

    /// Layout in use.
    pub fn layout(&self) -> &CatalogLayout {
        &self.layout
    }

    /// Creates a catalog root with its root content record.
    ///
    /// An existing directory is kept; its root record is only written when
    /// missing.
    pub fn create_root(&self, root: &Path) -> CatalogResult<()> {
        fs::create_dir_all(root).map_err(|e| CatalogError::io(root, e))?;
        let contents = root.join(&self.layout.contents_file);
        if !contents.exists() {
            write_contents(&contents, &RootContents::default())?;
        }
        debug!(root = %root.display(), "catalog root ready");
        Ok(())
    }

    /// Writes a new entry `name` holding `color`.
    ///
    /// Fails with [`CatalogError::DuplicateEntry`] when the entry directory
    /// already exists; nothing is overwritten. The content record carries
    /// full-precision decimal components and the sidecar marks the entry
    /// machine generated.
    pub fn write(&self, root: &Path, color: CanonicalColor, name: &str) -> CatalogResult<PathBuf> {
        let entry = self.layout.entry_dir(root, name);
        match fs::create_dir(&entry) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(CatalogError::DuplicateEntry {
                    name: name.to_owned(),
                    path: entry,
                });
            }
            Err(e) => return Err(CatalogError::io(&entry, e)),
        }

        let written = write_contents(&self.layout.contents_path(&entry), &ColorContents::srgb(color))
            .and_then(|()| Provenance::generated(name).write(&self.layout.sidecar_path(&entry)));
        if let Err(e) = written {
            // A half-written entry would read back as a user entry.
            if let Err(cleanup) = fs::remove_dir_all(&entry) {
                warn!(path = %entry.display(), error = %cleanup, "cannot remove partial entry");
            }
            return Err(e);
        }
        debug!(name, %color, "entry written");
        Ok(entry)
    }
}
