//! Canonical sRGB color.
//!
//! [`CanonicalColor`] is the single representation every input color space is
//! normalized into: a gamma-encoded sRGB RGBA quadruple with each channel in
//! the closed interval [0, 1].
//!
//! # Invariant
//!
//! The constructor sanitizes its input, so no value outside [0, 1] can exist:
//!
//! ```text
//! NaN, +inf, -inf  -> 0.0
//! x < 0            -> 0.0
//! x > 1            -> 1.0
//! -0.0             -> 0.0
//! ```
//!
//! # Identity
//!
//! Two colors are the same color only when all four channels are bit-identical.
//! There is no perceptual tolerance: `0.5` and `0.5000000001` are distinct
//! catalog entries.
//!
//! ```rust
//! use swatch_core::CanonicalColor;
//!
//! let a = CanonicalColor::new(0.5, 0.5, 0.5, 1.0);
//! let b = CanonicalColor::new(0.5, 0.5, 0.5, 1.0);
//! assert_eq!(a, b);
//! assert_eq!(a.to_hex(), "808080");
//! ```

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Normalized sRGB RGBA color.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CanonicalColor {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

impl CanonicalColor {
    /// Fully transparent black, the degraded result for absent or malformed input.
    pub const ZERO: Self = Self {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 0.0,
    };

    /// Opaque white.
    pub const WHITE: Self = Self {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
        alpha: 1.0,
    };

    /// Creates a color, clamping every channel into [0, 1].
    #[inline]
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: sanitize(red),
            green: sanitize(green),
            blue: sanitize(blue),
            alpha: sanitize(alpha),
        }
    }

    /// Creates a color from an `[r, g, b]` triplet and alpha.
    #[inline]
    pub fn from_rgb(rgb: [f64; 3], alpha: f64) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], alpha)
    }

    /// Creates an opaque or translucent gray.
    #[inline]
    pub fn gray(value: f64, alpha: f64) -> Self {
        Self::new(value, value, value, alpha)
    }

    /// Red channel.
    #[inline]
    pub fn red(&self) -> f64 {
        self.red
    }

    /// Green channel.
    #[inline]
    pub fn green(&self) -> f64 {
        self.green
    }

    /// Blue channel.
    #[inline]
    pub fn blue(&self) -> f64 {
        self.blue
    }

    /// Alpha channel.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Channels as `[r, g, b, a]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Returns `true` for [`CanonicalColor::ZERO`].
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// 8-bit hex string of the color channels, `RRGGBB` (alpha excluded).
    pub fn to_hex(&self) -> String {
        format!(
            "{:02X}{:02X}{:02X}",
            to_byte(self.red),
            to_byte(self.green),
            to_byte(self.blue)
        )
    }

    fn bits(&self) -> [u64; 4] {
        [
            self.red.to_bits(),
            self.green.to_bits(),
            self.blue.to_bits(),
            self.alpha.to_bits(),
        ]
    }
}

impl Default for CanonicalColor {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for CanonicalColor {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for CanonicalColor {}

impl Hash for CanonicalColor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl PartialOrd for CanonicalColor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CanonicalColor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.red
            .total_cmp(&other.red)
            .then(self.green.total_cmp(&other.green))
            .then(self.blue.total_cmp(&other.blue))
            .then(self.alpha.total_cmp(&other.alpha))
    }
}

impl fmt::Display for CanonicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

#[inline]
fn sanitize(v: f64) -> f64 {
    if !v.is_finite() {
        return 0.0;
    }
    // Adding 0.0 folds -0.0 into +0.0 so equal colors share one bit pattern.
    v.clamp(0.0, 1.0) + 0.0
}

#[inline]
fn to_byte(v: f64) -> u8 {
    (v * 255.0).round() as u8
}
