//! # swatch-core
//!
//! Core types shared by every swatch crate.
//!
//! - [`CanonicalColor`] - normalized sRGB RGBA quadruple, every channel in [0, 1]
//! - [`ColorSpaceTag`] - the input color spaces a color record can be tagged with
//! - [`LegacySystemColor`] - the six fixed legacy system colors
//! - [`RawColorComponents`] - textual component map as found on disk
//! - [`Error`] - strict parsing errors
//!
//! ## Crate Structure
//!
//! ```text
//! swatch-core (this crate)
//!    ^
//!    |
//!    +-- swatch-math (matrices)
//!    +-- swatch-transfer (transfer curves)
//!    +-- swatch-primaries (RGB primaries)
//!    +-- swatch-color (conversion engine)
//!    +-- swatch-source / swatch-catalog (documents and storage)
//! ```
//!
//! Canonical colors are immutable. Equality, ordering and hashing are defined
//! over the exact bit patterns of the four channels, which is what catalog
//! deduplication relies on.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod colorspace;
pub mod components;
pub mod error;

pub use color::CanonicalColor;
pub use colorspace::{ColorSpaceTag, LegacySystemColor};
pub use components::RawColorComponents;
pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// ```
/// use swatch_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::CanonicalColor;
    pub use crate::colorspace::{ColorSpaceTag, LegacySystemColor};
    pub use crate::components::RawColorComponents;
    pub use crate::error::{Error, Result};
}
