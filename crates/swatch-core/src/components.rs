//! Raw textual color components.
//!
//! Color records on disk store every component as a string (`"0.5"`,
//! `"0x80"`, `"128"`). [`RawColorComponents`] keeps them verbatim; the
//! interpretation belongs to the converter.

use serde::Serialize;
use std::collections::BTreeMap;

/// Component name to textual value mapping.
///
/// Ordered by key so that rewritten records serialize deterministically.
///
/// # Example
///
/// ```rust
/// use swatch_core::RawColorComponents;
///
/// let c = RawColorComponents::from_pairs([("white", "0.5"), ("alpha", "1")]);
/// assert_eq!(c.get("white"), Some("0.5"));
/// assert_eq!(c.get("red"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawColorComponents(BTreeMap<String, String>);

impl RawColorComponents {
    /// Creates an empty component map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a component map from `(key, value)` pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        pairs.into_iter().collect()
    }

    /// Returns the textual value of a component.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Sets a component, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes a component, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Returns `true` if the component is present.
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no components.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawColorComponents {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, String>> for RawColorComponents {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl From<RawColorComponents> for BTreeMap<String, String> {
    fn from(c: RawColorComponents) -> Self {
        c.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove() {
        let mut c = RawColorComponents::new();
        assert!(c.is_empty());
        c.insert("white", "1");
        assert_eq!(c.insert("white", "0.5"), Some("1".to_string()));
        assert!(c.contains("white"));
        assert_eq!(c.remove("white"), Some("0.5".to_string()));
        assert!(c.is_empty());
    }

    #[test]
    fn test_iteration_is_key_ordered() {
        let c = RawColorComponents::from_pairs([("red", "1"), ("alpha", "1"), ("blue", "0")]);
        let keys: Vec<_> = c.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["alpha", "blue", "red"]);
    }
}
