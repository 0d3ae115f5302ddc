//! Source document discovery.

use std::path::{Path, PathBuf};

use tracing::{trace, warn};

use crate::error::{SourceError, SourceResult};

/// Paths found by a directory walk, plus the paths it could not read.
///
/// A walk with errors is partial: callers must not treat `paths` as the
/// whole tree.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Accepted paths, sorted and deduplicated.
    pub paths: Vec<PathBuf>,
    /// Directories or entries the walk could not read.
    pub errors: Vec<SourceError>,
}

impl Discovery {
    /// Drains a walk, keeping the paths `keep` accepts.
    pub fn collect<I, E>(walk: I, keep: impl Fn(&Path) -> bool) -> Self
    where
        I: IntoIterator<Item = Result<PathBuf, E>>,
        E: Into<SourceError>,
    {
        let mut found = Self::default();
        found.extend(walk, keep);
        found.paths.sort();
        found.paths.dedup();
        found
    }

    fn extend<I, E>(&mut self, walk: I, keep: impl Fn(&Path) -> bool)
    where
        I: IntoIterator<Item = Result<PathBuf, E>>,
        E: Into<SourceError>,
    {
        for entry in walk {
            match entry {
                Ok(path) if keep(&path) => self.paths.push(path),
                Ok(_) => {}
                Err(e) => {
                    let e = e.into();
                    warn!(error = %e, "unreadable path during walk");
                    self.errors.push(e);
                }
            }
        }
    }

    /// Returns `true` when the walk saw every path.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// The paths, or the first walk error.
    pub fn into_complete(self) -> SourceResult<Vec<PathBuf>> {
        match self.errors.into_iter().next() {
            Some(e) => Err(e),
            None => Ok(self.paths),
        }
    }
}

/// Which files under a source root are documents to normalize.
///
/// A path is accepted when it ends with one of the extensions and its
/// root-relative form contains none of the exclusion substrings.
///
/// ```rust
/// use std::path::Path;
/// use swatch_source::SourceFilter;
///
/// let filter = SourceFilter::default();
/// let root = Path::new("/work/App");
/// assert!(filter.accepts(root, Path::new("/work/App/UI/Main.storyboard")));
/// assert!(!filter.accepts(root, Path::new("/work/App/Pods/Lib/Lib.storyboard")));
/// assert!(!filter.accepts(root, Path::new("/work/App/UI/Main.xib")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFilter {
    extensions: Vec<String>,
    exclude: Vec<String>,
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self::new(
            ["storyboard"],
            ["Pods/", "Carthage/", "Packages/", ".build/"],
        )
    }
}

impl SourceFilter {
    /// Creates a filter from extensions (without the dot) and exclusions.
    pub fn new<E, X>(
        extensions: impl IntoIterator<Item = E>,
        exclude: impl IntoIterator<Item = X>,
    ) -> Self
    where
        E: Into<String>,
        X: Into<String>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| {
                    let e: String = e.into();
                    e.trim_start_matches('.').to_owned()
                })
                .collect(),
            exclude: exclude.into_iter().map(Into::into).collect(),
        }
    }

    /// Configured extensions.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Returns `true` if `path` below `root` is a source document.
    pub fn accepts(&self, root: &Path, path: &Path) -> bool {
        let matches_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext));
        matches_extension && !self.excludes(root, path)
    }

    /// Returns `true` if the root-relative form of `path` hits an exclusion.
    ///
    /// Also used to skip catalog roots vendored by dependency managers.
    pub fn excludes(&self, root: &Path, path: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        let relative = relative.to_string_lossy().replace('\\', "/");
        self.exclude.iter().any(|x| relative.contains(x.as_str()))
    }

    /// Finds every accepted document below `root`, sorted.
    ///
    /// Unreadable directories end up in [`Discovery::errors`].
    pub fn discover(&self, root: &Path) -> SourceResult<Discovery> {
        let escaped = glob::Pattern::escape(&root.to_string_lossy());
        let mut found = Discovery::default();
        for ext in &self.extensions {
            let pattern = format!("{escaped}/**/*.{ext}");
            trace!(%pattern, "searching source documents");
            found.extend(glob::glob(&pattern)?, |path| path.is_file() && self.accepts(root, path));
        }
        found.paths.sort();
        found.paths.dedup();
        Ok(found)
    }
}
