//! Provenance sidecar: `{"name": string, "custom": bool}`.
//!
//! The sidecar is what tells machine-generated entries from user entries
//! across runs. Each key is optional on read and falls back to its own
//! default when missing or of the wrong type. A sidecar that is present but
//! unreadable, or not a JSON object, reads as `{"name": "", "custom": false}`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};

/// Provenance of one catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Provenance {
    /// Entry name when the sidecar was written.
    pub name: String,
    /// `true` for user-owned entries.
    pub custom: bool,
}

impl Provenance {
    /// Sidecar of a machine-generated entry.
    pub fn generated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            custom: false,
        }
    }

    /// Sidecar of a user-owned entry.
    pub fn user(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            custom: true,
        }
    }

    /// Parses sidecar JSON key by key, degrading to defaults on bad input.
    ///
    /// ```rust
    /// use swatch_catalog::Provenance;
    ///
    /// assert_eq!(Provenance::parse(r#"{"name":"Foo"}"#), Provenance::generated("Foo"));
    /// assert_eq!(Provenance::parse(r#"{"name":"Foo","custom":"yes"}"#), Provenance::generated("Foo"));
    /// assert_eq!(Provenance::parse("not json"), Provenance::default());
    /// ```
    pub fn parse(text: &str) -> Self {
        let object = match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(object)) => object,
            Ok(other) => {
                debug!(kind = ?other, "provenance is not an object, using defaults");
                return Self::default();
            }
            Err(e) => {
                debug!(error = %e, "malformed provenance, using defaults");
                return Self::default();
            }
        };
        Self {
            name: object.get("name").and_then(Value::as_str).unwrap_or_default().to_string(),
            custom: object.get("custom").and_then(Value::as_bool).unwrap_or_default(),
        }
    }

    /// Reads the sidecar at `path`; `None` when there is no sidecar.
    pub fn read(path: &Path) -> Option<Self> {
        match fs::read(path) {
            Ok(bytes) => Some(Self::parse(&String::from_utf8_lossy(&bytes))),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "unreadable provenance, using defaults");
                Some(Self::default())
            }
        }
    }

    /// Writes the sidecar to `path`, replacing any previous one.
    pub fn write(&self, path: &Path) -> CatalogResult<()> {
        let json = serde_json::to_vec(self).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|e| CatalogError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_default() {
        assert_eq!(Provenance::parse("{}"), Provenance::default());
        assert_eq!(
            Provenance::parse(r#"{"custom":true}"#),
            Provenance::user("")
        );
    }

    #[test]
    fn test_wrong_types_degrade() {
        assert_eq!(Provenance::parse(r#"{"name":3,"custom":"yes"}"#), Provenance::default());
        assert_eq!(Provenance::parse(r#"{"name":3,"custom":true}"#), Provenance::user(""));
        assert_eq!(Provenance::parse("[]"), Provenance::default());
        assert_eq!(Provenance::parse(""), Provenance::default());
    }

    #[test]
    fn test_wrong_typed_custom_keeps_name() {
        assert_eq!(
            Provenance::parse(r#"{"name":"Foo","custom":"yes"}"#),
            Provenance::generated("Foo")
        );
        assert_eq!(
            Provenance::parse(r#"{"name":"Foo","custom":1}"#),
            Provenance::generated("Foo")
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert_eq!(
            Provenance::parse(r#"{"name":"Sky","custom":true,"extra":1}"#),
            Provenance::user("Sky")
        );
    }

    #[test]
    fn test_read_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("provenance.json");
        assert_eq!(Provenance::read(&path), None);

        Provenance::generated("Color112233").write(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"name":"Color112233","custom":false}"#);
        assert_eq!(Provenance::read(&path), Some(Provenance::generated("Color112233")));

        fs::write(&path, "{broken").unwrap();
        assert_eq!(Provenance::read(&path), Some(Provenance::default()));
    }
}
