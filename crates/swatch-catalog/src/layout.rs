//! On-disk layout of an asset catalog.
//!
//! ```text
//! Colors.xcassets/                 catalog root
//!   Contents.json                  root record (info only)
//!   Sky.colorset/                  one entry per color
//!     Contents.json                content record
//!     provenance.json              provenance sidecar (optional)
//!   Group/
//!     Color808080.colorset/        entries may be nested in groups
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use swatch_source::{Discovery, SourceFilter};
use tracing::trace;

use crate::error::CatalogResult;

/// Names and suffixes of catalog files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogLayout {
    /// Entry directory suffix, without the dot.
    pub entry_suffix: String,
    /// Catalog root directory suffix, without the dot.
    pub root_suffix: String,
    /// Content record file name.
    pub contents_file: String,
    /// Provenance sidecar file name.
    pub sidecar_file: String,
    /// Root created under the source root when none is found.
    pub default_root: String,
}

impl Default for CatalogLayout {
    fn default() -> Self {
        Self {
            entry_suffix: "colorset".to_owned(),
            root_suffix: "xcassets".to_owned(),
            contents_file: "Contents.json".to_owned(),
            sidecar_file: "provenance.json".to_owned(),
            default_root: "Colors.xcassets".to_owned(),
        }
    }
}

impl CatalogLayout {
    /// Directory of the entry `name` directly under `root`.
    ///
    /// ```rust
    /// use std::path::Path;
    /// use swatch_catalog::CatalogLayout;
    ///
    /// let layout = CatalogLayout::default();
    /// assert_eq!(
    ///     layout.entry_dir(Path::new("A.xcassets"), "Sky"),
    ///     Path::new("A.xcassets/Sky.colorset"),
    /// );
    /// ```
    pub fn entry_dir(&self, root: &Path, name: &str) -> PathBuf {
        root.join(format!("{name}.{}", self.entry_suffix))
    }

    /// Entry name of an entry directory: the folder name without the suffix.
    pub fn entry_name(&self, entry: &Path) -> Option<String> {
        let file_name = entry.file_name()?.to_str()?;
        let suffix = format!(".{}", self.entry_suffix);
        file_name.strip_suffix(&suffix).map(str::to_owned)
    }

    /// Content record of an entry.
    pub fn contents_path(&self, entry: &Path) -> PathBuf {
        entry.join(&self.contents_file)
    }

    /// Provenance sidecar of an entry.
    pub fn sidecar_path(&self, entry: &Path) -> PathBuf {
        entry.join(&self.sidecar_file)
    }

    /// Every entry directory below `root`, sorted, plus the subtrees that
    /// could not be read. A missing root has no entries.
    pub fn list_entries(&self, root: &Path) -> CatalogResult<Discovery> {
        if !root.is_dir() {
            return Ok(Discovery::default());
        }
        let pattern = format!(
            "{}/**/*.{}",
            glob::Pattern::escape(&root.to_string_lossy()),
            self.entry_suffix
        );
        trace!(%pattern, "listing catalog entries");
        Ok(Discovery::collect(glob::glob(&pattern)?, Path::is_dir))
    }

    /// First catalog root below `source_root` that `filter` does not exclude.
    pub fn find_root(&self, source_root: &Path, filter: &SourceFilter) -> CatalogResult<Option<PathBuf>> {
        let pattern = format!(
            "{}/**/*.{}",
            glob::Pattern::escape(&source_root.to_string_lossy()),
            self.root_suffix
        );
        let mut roots: Vec<PathBuf> = glob::glob(&pattern)?
            .filter_map(Result::ok)
            .filter(|p| p.is_dir() && !filter.excludes(source_root, p))
            .collect();
        roots.sort();
        Ok(roots.into_iter().next())
    }

    /// Catalog root used when none exists yet.
    pub fn default_root_for(&self, source_root: &Path) -> PathBuf {
        source_root.join(&self.default_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_entry_name() {
        let layout = CatalogLayout::default();
        assert_eq!(
            layout.entry_name(Path::new("/x/A.xcassets/Sky Blue.colorset")).as_deref(),
            Some("Sky Blue")
        );
        assert_eq!(layout.entry_name(Path::new("/x/A.xcassets/Sky.imageset")), None);
    }

    #[test]
    fn test_list_entries_nested_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("Assets.xcassets");
        fs::create_dir_all(root.join("Group/B.colorset")).unwrap();
        fs::create_dir_all(root.join("A.colorset")).unwrap();
        fs::create_dir_all(root.join("Icon.imageset")).unwrap();
        fs::write(root.join("stray.colorset"), "").unwrap();

        let layout = CatalogLayout::default();
        let found = layout.list_entries(&root).unwrap();
        assert!(found.is_complete());
        assert_eq!(found.paths, vec![root.join("A.colorset"), root.join("Group/B.colorset")]);
        assert!(layout.list_entries(&dir.path().join("missing")).unwrap().paths.is_empty());
    }

    #[test]
    fn test_find_root_skips_excluded() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("Pods/Lib/Lib.xcassets")).unwrap();
        fs::create_dir_all(dir.path().join("App/Assets.xcassets")).unwrap();

        let layout = CatalogLayout::default();
        let found = layout.find_root(dir.path(), &SourceFilter::default()).unwrap();
        assert_eq!(found, Some(dir.path().join("App/Assets.xcassets")));
    }

    #[test]
    fn test_find_root_none() {
        let dir = tempfile::tempdir().unwrap();
        let layout = CatalogLayout::default();
        assert_eq!(layout.find_root(dir.path(), &SourceFilter::default()).unwrap(), None);
        assert_eq!(
            layout.default_root_for(dir.path()),
            dir.path().join("Colors.xcassets")
        );
    }
}
