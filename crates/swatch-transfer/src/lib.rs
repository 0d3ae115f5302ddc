//! # swatch-transfer
//!
//! Transfer functions for the color spaces swatch reads.
//!
//! - **EOTF**: encoded -> linear light
//! - **OETF**: linear light -> encoded
//!
//! # Supported Transfer Functions
//!
//! | Function | Used By | Range |
//! |----------|---------|-------|
//! | [`srgb`] | sRGB, Display P3, extended sRGB | [0, 1], mirrored when extended |
//! | [`gamma`] | gray gamma 2.2, Adobe RGB (1998) | [0, 1], mirrored when extended |
//!
//! # Usage
//!
//! ```rust
//! use swatch_transfer::{srgb, gamma};
//!
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//!
//! let gray = gamma::eotf_22(0.5);
//! assert!(gray < 0.5);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamma;
pub mod srgb;

pub use gamma::{gamma_eotf, gamma_oetf, ADOBE_RGB_GAMMA};
pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
