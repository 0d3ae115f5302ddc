//! Catalog entry model and lifecycle classification.
//!
//! # Lifecycle
//!
//! Every entry is classified from scratch on each pass, from its folder name
//! and provenance sidecar alone:
//!
//! ```text
//! no sidecar                        -> customAdded
//! sidecar name != folder name       -> customRenamed
//! sidecar custom == false           -> original        (deleted, regenerated)
//! otherwise                         -> customUnmodified
//! ```
//!
//! Persisting provenance for `customAdded` and `customRenamed` entries
//! (`name = folder name`, `custom = true`) moves them to `customUnmodified`
//! on the next pass, which is a fixed point.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use swatch_core::CanonicalColor;

use crate::provenance::Provenance;

/// Lifecycle of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetLifecycleType {
    /// Machine generated in an earlier run and not altered since.
    Original,
    /// Found without provenance: first sighting of a user entry.
    CustomAdded,
    /// Provenance name differs from the folder name.
    CustomRenamed,
    /// User owned, provenance up to date.
    CustomUnmodified,
}

impl AssetLifecycleType {
    /// Classifies an entry. The first matching rule wins.
    ///
    /// ```rust
    /// use swatch_catalog::{AssetLifecycleType, Provenance};
    ///
    /// let generated = Provenance::generated("Foo");
    /// assert_eq!(AssetLifecycleType::classify("Foo", Some(&generated)), AssetLifecycleType::Original);
    /// assert_eq!(AssetLifecycleType::classify("Bar", Some(&generated)), AssetLifecycleType::CustomRenamed);
    /// assert_eq!(AssetLifecycleType::classify("Bar", None), AssetLifecycleType::CustomAdded);
    /// ```
    pub fn classify(folder_name: &str, provenance: Option<&Provenance>) -> Self {
        match provenance {
            None => Self::CustomAdded,
            Some(p) if p.name != folder_name => Self::CustomRenamed,
            Some(p) if !p.custom => Self::Original,
            Some(_) => Self::CustomUnmodified,
        }
    }

    /// Identifier as written in reports.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::CustomAdded => "customAdded",
            Self::CustomRenamed => "customRenamed",
            Self::CustomUnmodified => "customUnmodified",
        }
    }

    /// Entries the reconciler deletes and regenerates.
    #[inline]
    pub const fn is_machine_generated(&self) -> bool {
        matches!(self, Self::Original)
    }

    /// Entries whose provenance is rewritten as user owned.
    #[inline]
    pub const fn needs_provenance(&self) -> bool {
        matches!(self, Self::CustomAdded | Self::CustomRenamed)
    }
}

impl fmt::Display for AssetLifecycleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry as found on disk during a pass.
///
/// Never persisted; only its provenance is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    /// Name from the provenance sidecar, or the folder name when there is none.
    pub original_name: Option<String>,
    /// Name derived from the entry folder.
    pub current_name: Option<String>,
    /// Entry directory.
    pub location: PathBuf,
    /// Lifecycle assigned in this pass.
    pub lifecycle: AssetLifecycleType,
    /// Decoded color, zero when the content record is absent or malformed.
    pub color: CanonicalColor,
}

impl AssetRecord {
    /// Builds a record from what was read for one entry.
    pub fn new(
        location: PathBuf,
        folder_name: Option<String>,
        provenance: Option<&Provenance>,
        color: CanonicalColor,
    ) -> Self {
        let name = folder_name.as_deref().unwrap_or_default();
        let lifecycle = AssetLifecycleType::classify(name, provenance);
        let original_name = match provenance {
            Some(p) => Some(p.name.clone()),
            None => folder_name.clone(),
        };
        Self {
            original_name,
            current_name: folder_name,
            location,
            lifecycle,
            color,
        }
    }

    /// Returns `true` if the reconciler keeps this entry.
    #[inline]
    pub fn is_preserved(&self) -> bool {
        !self.lifecycle.is_machine_generated()
    }

    /// Provenance marking this entry user owned under its current name.
    pub fn user_provenance(&self) -> Provenance {
        Provenance::user(self.current_name.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_beats_custom_flag() {
        let p = Provenance::user("Foo");
        assert_eq!(
            AssetLifecycleType::classify("Bar", Some(&p)),
            AssetLifecycleType::CustomRenamed
        );
        assert_eq!(
            AssetLifecycleType::classify("Foo", Some(&p)),
            AssetLifecycleType::CustomUnmodified
        );
    }

    #[test]
    fn test_malformed_provenance_defaults() {
        // {"", false} never matches a real folder name.
        let p = Provenance::default();
        assert_eq!(
            AssetLifecycleType::classify("Foo", Some(&p)),
            AssetLifecycleType::CustomRenamed
        );
    }

    #[test]
    fn test_record_names() {
        let added = AssetRecord::new(
            PathBuf::from("A.xcassets/Sky.colorset"),
            Some("Sky".into()),
            None,
            CanonicalColor::ZERO,
        );
        assert_eq!(added.original_name.as_deref(), Some("Sky"));
        assert_eq!(added.lifecycle, AssetLifecycleType::CustomAdded);
        assert_eq!(added.user_provenance(), Provenance::user("Sky"));

        let renamed = AssetRecord::new(
            PathBuf::from("A.xcassets/Sky.colorset"),
            Some("Sky".into()),
            Some(&Provenance::generated("Color87CEEB")),
            CanonicalColor::ZERO,
        );
        assert_eq!(renamed.original_name.as_deref(), Some("Color87CEEB"));
        assert_eq!(renamed.current_name.as_deref(), Some("Sky"));
        assert!(renamed.is_preserved());
    }

    #[test]
    fn test_serialized_lifecycle_names() {
        let json = serde_json::to_string(&AssetLifecycleType::CustomUnmodified).unwrap();
        assert_eq!(json, "\"customUnmodified\"");
        assert_eq!(AssetLifecycleType::CustomAdded.to_string(), "customAdded");
    }
}
