//! # swatch-color
//!
//! Color space conversion engine.
//!
//! Every color record found on disk is a color space tag plus a map of
//! textual components. This crate turns such a record into a
//! [`CanonicalColor`]: gamma-encoded sRGB with each channel in [0, 1].
//!
//! # Supported Color Spaces
//!
//! | Family | Tags | Components |
//! |--------|------|------------|
//! | RGB | `srgb`, `display-p3`, `adobe-rgb-1998`, `calibrated-rgb`, `device-rgb` | red, green, blue, alpha |
//! | Extended RGB | `extended-srgb`, `extended-linear-srgb` | red, green, blue, alpha |
//! | Gray | `gray-gamma-2.2`, `generic-gray-gamma-2.2`, `calibrated-white`, `device-white`, `extended-gray` | white, alpha |
//! | CMYK | `generic-cmyk`, `device-cmyk` | cyan, magenta, yellow, black, alpha |
//! | Named | `catalog` | catalog, name |
//! | Legacy | six system colors | none |
//!
//! # Usage
//!
//! ```rust
//! use swatch_color::{convert, normalize_components};
//! use swatch_core::{ColorSpaceTag, RawColorComponents};
//!
//! // Catalog content record, lexical RGB encoding
//! let record = RawColorComponents::from_pairs([
//!     ("red", "0.5"), ("green", "0.5"), ("blue", "0.5"), ("alpha", "1.000"),
//! ]);
//! assert_eq!(convert(ColorSpaceTag::Srgb, &record).red(), 0.5);
//!
//! // Source document, rewritten in place
//! let mut element = RawColorComponents::from_pairs([("white", "0"), ("alpha", "1")]);
//! normalize_components(ColorSpaceTag::CalibratedWhite, &mut element);
//! assert_eq!(element.get("red"), Some("0.0"));
//! assert!(!element.contains("white"));
//! ```
//!
//! # Failure model
//!
//! Conversion is total: absent or malformed components read as `0.0`
//! (logged at `debug`), and the output is always sanitized. Use
//! [`check_components`] to report problems instead of recovering.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod converter;
pub mod lexical;
pub mod system;

pub use catalog::{CatalogLookup, NamedColorTable, NoCatalog};
pub use converter::{
    ColorSpaceConverter, SPACE_SPECIFIC_COMPONENTS, check_components, convert,
    normalize_components,
};
pub use lexical::{ComponentEncoding, format_component};

pub use swatch_core::{CanonicalColor, ColorSpaceTag, RawColorComponents};
