//! Named color lookup for the `catalog` color space.
//!
//! A catalog-tagged record only carries a list name and a color name; the
//! value lives in a platform color list that is not available on disk. The
//! converter asks a [`CatalogLookup`] and degrades to
//! [`CanonicalColor::ZERO`] when nothing resolves.

use std::collections::HashMap;
use swatch_core::CanonicalColor;

/// Resolves `(catalog, name)` pairs to canonical colors.
pub trait CatalogLookup: Send + Sync {
    /// Returns the color registered under `catalog`/`name`, if any.
    fn resolve(&self, catalog: &str, name: &str) -> Option<CanonicalColor>;
}

/// Lookup that knows no colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCatalog;

impl CatalogLookup for NoCatalog {
    fn resolve(&self, _catalog: &str, _name: &str) -> Option<CanonicalColor> {
        None
    }
}

/// In-memory table of named colors, usually filled from configuration.
///
/// ```rust
/// use swatch_color::{CatalogLookup, NamedColorTable};
/// use swatch_core::CanonicalColor;
///
/// let mut table = NamedColorTable::new();
/// table.insert("System", "labelColor", CanonicalColor::new(0.0, 0.0, 0.0, 0.85));
/// assert!(table.resolve("System", "labelColor").is_some());
/// assert!(table.resolve("System", "linkColor").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NamedColorTable {
    entries: HashMap<(String, String), CanonicalColor>,
}

impl NamedColorTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a color, returning the one it replaced.
    pub fn insert(
        &mut self,
        catalog: impl Into<String>,
        name: impl Into<String>,
        color: CanonicalColor,
    ) -> Option<CanonicalColor> {
        self.entries.insert((catalog.into(), name.into()), color)
    }

    /// Number of registered colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no colors are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CatalogLookup for NamedColorTable {
    fn resolve(&self, catalog: &str, name: &str) -> Option<CanonicalColor> {
        self.entries
            .get(&(catalog.to_owned(), name.to_owned()))
            .copied()
    }
}

impl<L: CatalogLookup + ?Sized> CatalogLookup for &L {
    fn resolve(&self, catalog: &str, name: &str) -> Option<CanonicalColor> {
        (**self).resolve(catalog, name)
    }
}

impl<K1, K2> FromIterator<(K1, K2, CanonicalColor)> for NamedColorTable
where
    K1: Into<String>,
    K2: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K1, K2, CanonicalColor)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (catalog, name, color) in iter {
            table.insert(catalog, name, color);
        }
        table
    }
}
