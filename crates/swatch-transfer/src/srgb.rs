//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//!
//! # Range
//!
//! - [`eotf`] / [`oetf`]: [0, 1]
//! - [`eotf_extended`]: any real, mirrored around zero (the extended-range
//!   sRGB encoding)
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// sRGB EOTF: Decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use swatch_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB OETF: Encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// Evaluated as `p + 0.055 * (p - 1)` so that `oetf(1.0)` is exactly `1.0`.
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        let p = l.powf(1.0 / 2.4);
        p + 0.055 * (p - 1.0)
    }
}

/// Extended-range sRGB EOTF: `sign(v) * eotf(|v|)`.
///
/// Values above 1 keep following the power segment.
#[inline]
pub fn eotf_extended(v: f64) -> f64 {
    v.signum() * eotf(v.abs())
}
