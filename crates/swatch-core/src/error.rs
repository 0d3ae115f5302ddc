//! Error types for swatch-core parsing.
//!
//! The conversion engine never propagates these: it recovers from malformed
//! input by degrading to a zero component. The errors exist for the strict
//! helpers (CLI argument parsing, diagnostics) that want to report *why*
//! an input was rejected.
//!
//! # Usage
//!
//! ```rust
//! use swatch_core::{ColorSpaceTag, Error};
//!
//! let err = "hsl".parse::<ColorSpaceTag>().unwrap_err();
//! assert!(matches!(err, Error::UnknownColorSpace(_)));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Malformed input detected by a strict parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The color space identifier is not one of the supported tags.
    #[error("unknown color space: {0}")]
    UnknownColorSpace(String),

    /// A component value could not be parsed as a number.
    #[error("malformed component {key}={value:?}")]
    MalformedComponent {
        /// Component name (`red`, `white`, ...)
        key: String,
        /// Raw textual value
        value: String,
    },

    /// A required component key is absent.
    #[error("missing component: {0}")]
    MissingComponent(String),
}

impl Error {
    /// Creates an [`Error::MalformedComponent`] error.
    #[inline]
    pub fn malformed(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MalformedComponent {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns `true` for errors caused by a component value.
    #[inline]
    pub fn is_component_error(&self) -> bool {
        matches!(self, Self::MalformedComponent { .. } | Self::MissingComponent(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message() {
        let err = Error::malformed("red", "abc");
        let msg = err.to_string();
        assert!(msg.contains("red"));
        assert!(msg.contains("abc"));
        assert!(err.is_component_error());
    }

    #[test]
    fn test_unknown_space_is_not_component_error() {
        let err = Error::UnknownColorSpace("hsl".into());
        assert!(!err.is_component_error());
        assert_eq!(err.to_string(), "unknown color space: hsl");
    }
}
