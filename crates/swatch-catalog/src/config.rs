//! Run configuration (`swatch.yaml`).
//!
//! Every field has a default, so an empty file and no file at all are both
//! valid configurations.
//!
//! ```yaml
//! catalog:
//!   entry_suffix: colorset
//!   root_suffix: xcassets
//!   contents_file: Contents.json
//!   sidecar_file: provenance.json
//!   default_root: Colors.xcassets
//! source:
//!   extensions: [storyboard]
//!   exclude: ["Pods/", "Carthage/", "Packages/", ".build/"]
//! named_colors:
//!   - { catalog: System, name: labelColor, red: 0, green: 0, blue: 0, alpha: 0.85 }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use swatch_color::NamedColorTable;
use swatch_core::CanonicalColor;
use swatch_source::SourceFilter;
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::layout::CatalogLayout;

/// File name looked up at the source root when no config is given.
pub const DEFAULT_CONFIG_FILE: &str = "swatch.yaml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwatchConfig {
    /// Catalog layout.
    pub catalog: CatalogLayout,
    /// Source document discovery.
    pub source: SourceSettings,
    /// Values for `catalog`-tagged colors.
    pub named_colors: Vec<NamedColorSpec>,
}

/// Source document discovery settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// Document extensions, without the dot.
    pub extensions: Vec<String>,
    /// Path substrings that exclude a document or catalog root.
    pub exclude: Vec<String>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            extensions: vec!["storyboard".to_owned()],
            exclude: ["Pods/", "Carthage/", "Packages/", ".build/"]
                .map(str::to_owned)
                .to_vec(),
        }
    }
}

/// One named color of a platform color list, as sRGB.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedColorSpec {
    /// Color list name.
    pub catalog: String,
    /// Color name within the list.
    pub name: String,
    /// Red
    pub red: f64,
    /// Green
    pub green: f64,
    /// Blue
    pub blue: f64,
    /// Alpha
    #[serde(default = "opaque")]
    pub alpha: f64,
}

fn opaque() -> f64 {
    1.0
}

impl SwatchConfig {
    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Config(format!("{}: {e}", path.display())))?;
        Self::from_yaml_str(&content)
    }

    /// Loads configuration from YAML string.
    ///
    /// ```rust
    /// use swatch_catalog::SwatchConfig;
    ///
    /// let config = SwatchConfig::from_yaml_str("catalog:\n  sidecar_file: meta.json\n").unwrap();
    /// assert_eq!(config.catalog.sidecar_file, "meta.json");
    /// assert_eq!(config.catalog.entry_suffix, "colorset");
    /// ```
    pub fn from_yaml_str(yaml: &str) -> CatalogResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Resolves the configuration of a run.
    ///
    /// An explicit path must load; otherwise `swatch.yaml` at the source root
    /// is used when present, and the defaults when not.
    pub fn load_for(source_root: &Path, explicit: Option<&Path>) -> CatalogResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let candidate: PathBuf = source_root.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "using project configuration");
            Self::from_file(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Lookup table for `catalog`-tagged colors.
    pub fn named_color_table(&self) -> NamedColorTable {
        self.named_colors
            .iter()
            .map(|spec| {
                (
                    spec.catalog.clone(),
                    spec.name.clone(),
                    CanonicalColor::new(spec.red, spec.green, spec.blue, spec.alpha),
                )
            })
            .collect()
    }

    /// Source document filter.
    pub fn source_filter(&self) -> SourceFilter {
        SourceFilter::new(
            self.source.extensions.iter().cloned(),
            self.source.exclude.iter().cloned(),
        )
    }
}
