//! Primary content record of a catalog entry (`Contents.json`).
//!
//! ```json
//! {
//!   "info": { "version": 1, "author": "xcode" },
//!   "colors": [
//!     {
//!       "idiom": "universal",
//!       "color": {
//!         "color-space": "srgb",
//!         "components": { "red": "0.5", "alpha": "1.0", "blue": "0.5", "green": "0.5" }
//!       }
//!     }
//!   ]
//! }
//! ```
//!
//! Reading is lenient: only the first `colors` entry is used, and component
//! values may be strings or JSON numbers (numbers keep their JSON spelling,
//! so `1` reads as the integer byte form and `1.0` as a fraction).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use swatch_color::{CatalogLookup, ColorSpaceConverter, format_component};
use swatch_core::{CanonicalColor, ColorSpaceTag, RawColorComponents};
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};

/// `info` block shared by catalog roots and entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentsInfo {
    /// Format version
    pub version: u32,
    /// Producing tool
    pub author: String,
}

impl Default for ContentsInfo {
    fn default() -> Self {
        Self {
            version: 1,
            author: "xcode".to_owned(),
        }
    }
}

/// Content record of a catalog root directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RootContents {
    /// Format info
    pub info: ContentsInfo,
}

/// Content record written for a generated color entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorContents {
    info: ContentsInfo,
    colors: [ColorVariant; 1],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct ColorVariant {
    idiom: &'static str,
    color: ColorValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct ColorValue {
    #[serde(rename = "color-space")]
    color_space: &'static str,
    components: SrgbComponents,
}

/// Field order matches what the platform tooling writes.
#[derive(Debug, Clone, PartialEq, Serialize)]
struct SrgbComponents {
    red: String,
    alpha: String,
    blue: String,
    green: String,
}

impl ColorContents {
    /// Universal sRGB record with full-precision decimal components.
    ///
    /// ```rust
    /// use swatch_catalog::contents::ColorContents;
    /// use swatch_core::CanonicalColor;
    ///
    /// let json = ColorContents::srgb(CanonicalColor::new(1.0, 0.5, 0.0, 1.0)).to_json().unwrap();
    /// assert!(json.contains(r#""components":{"red":"1.0","alpha":"1.0","blue":"0.0","green":"0.5"}"#));
    /// ```
    pub fn srgb(color: CanonicalColor) -> Self {
        Self {
            info: ContentsInfo::default(),
            colors: [ColorVariant {
                idiom: "universal",
                color: ColorValue {
                    color_space: "srgb",
                    components: SrgbComponents {
                        red: format_component(color.red()),
                        alpha: format_component(color.alpha()),
                        blue: format_component(color.blue()),
                        green: format_component(color.green()),
                    },
                },
            }],
        }
    }

    /// Serializes the record.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Writes any content record to `path`.
pub fn write_contents<T: Serialize>(path: &Path, contents: &T) -> CatalogResult<()> {
    let json = serde_json::to_vec(contents).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|e| CatalogError::io(path, e))
}

/// Color record as read back from an entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredColor {
    /// Declared color space, `None` when absent or unknown.
    pub tag: Option<ColorSpaceTag>,
    /// Raw components.
    pub components: RawColorComponents,
}

impl StoredColor {
    /// Extracts the first color of a parsed content record.
    pub fn from_json(json: &Value) -> Self {
        let Some(color) = json
            .get("colors")
            .and_then(Value::as_array)
            .and_then(|colors| colors.first())
            .and_then(|first| first.get("color"))
        else {
            return Self::default();
        };
        let tag = color
            .get("color-space")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok());
        let components = color
            .get("components")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .filter_map(|(key, value)| component_text(value).map(|text| (key.clone(), text)))
                    .collect::<BTreeMap<_, _>>()
            })
            .unwrap_or_default();
        Self {
            tag,
            components: components.into(),
        }
    }

    /// Reads an entry content record; absent or malformed files read as empty.
    pub fn read(path: &Path) -> Self {
        let parsed = fs::read(path)
            .map_err(|e| e.to_string())
            .and_then(|bytes| serde_json::from_slice::<Value>(&bytes).map_err(|e| e.to_string()));
        match parsed {
            Ok(json) => Self::from_json(&json),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "unreadable content record");
                Self::default()
            }
        }
    }

    /// Decodes to a canonical color; no or an unknown color space gives zero.
    pub fn decode<L: CatalogLookup>(&self, converter: &ColorSpaceConverter<L>) -> CanonicalColor {
        match self.tag {
            Some(tag) => converter.convert(tag, &self.components),
            None => CanonicalColor::ZERO,
        }
    }
}

fn component_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_root_contents() {
        let json = serde_json::to_string(&RootContents::default()).unwrap();
        assert_eq!(json, r#"{"info":{"version":1,"author":"xcode"}}"#);
    }

    #[test]
    fn test_generated_record_layout() {
        let json = ColorContents::srgb(CanonicalColor::new(0.25, 0.5, 0.75, 1.0))
            .to_json()
            .unwrap();
        assert_eq!(
            json,
            r#"{"info":{"version":1,"author":"xcode"},"colors":[{"idiom":"universal","color":{"color-space":"srgb","components":{"red":"0.25","alpha":"1.0","blue":"0.75","green":"0.5"}}}]}"#
        );
    }

    #[test]
    fn test_written_record_decodes_to_same_color() {
        let color = CanonicalColor::new(0.1234567890123, 1.0, 0.0, 0.3333333333333333);
        let json: Value = serde_json::from_str(&ColorContents::srgb(color).to_json().unwrap()).unwrap();
        let stored = StoredColor::from_json(&json);
        assert_eq!(stored.tag, Some(ColorSpaceTag::Srgb));
        assert_eq!(stored.decode(&ColorSpaceConverter::new()), color);
    }

    #[test]
    fn test_first_color_wins() {
        let json = json!({
            "colors": [
                {"idiom": "universal", "color": {"color-space": "display-p3",
                    "components": {"red": "1.000", "green": "0.000", "blue": "0.000", "alpha": "1.000"}}},
                {"idiom": "universal", "appearances": [], "color": {"color-space": "srgb",
                    "components": {"red": "0.000", "green": "0.000", "blue": "0.000", "alpha": "1.000"}}}
            ]
        });
        assert_eq!(StoredColor::from_json(&json).tag, Some(ColorSpaceTag::DisplayP3));
    }

    #[test]
    fn test_numeric_components() {
        let json = json!({"colors": [{"color": {"color-space": "srgb",
            "components": {"red": 0.5, "green": 128, "blue": "0x80", "alpha": 1.0}}}]});
        let stored = StoredColor::from_json(&json);
        assert_eq!(stored.components.get("red"), Some("0.5"));
        assert_eq!(stored.components.get("green"), Some("128"));
        assert_eq!(stored.components.get("alpha"), Some("1.0"));
    }

    #[test]
    fn test_gray_catalog_spelling() {
        let json = json!({"colors": [{"color": {"color-space": "gray-gamma-22",
            "components": {"white": "1.000", "alpha": "1.000"}}}]});
        let stored = StoredColor::from_json(&json);
        assert_eq!(stored.tag, Some(ColorSpaceTag::GrayGamma22));
        assert_eq!(stored.decode(&ColorSpaceConverter::new()), CanonicalColor::WHITE);
    }

    #[test]
    fn test_malformed_records_decode_to_zero() {
        let converter = ColorSpaceConverter::new();
        for json in [json!({}), json!({"colors": []}), json!({"colors": [{"color": {"color-space": "lab"}}]})] {
            assert_eq!(StoredColor::from_json(&json).decode(&converter), CanonicalColor::ZERO);
        }
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(StoredColor::read(&dir.path().join("Contents.json")), StoredColor::default());
    }
}
