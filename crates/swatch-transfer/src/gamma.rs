//! Pure power-law transfer functions.
//!
//! - 2.2: gray gamma 2.2 spaces (generic, calibrated)
//! - 563/256 (~2.1992): Adobe RGB (1998)
//!
//! # Range
//!
//! - Input/Output: [0, 1]; the `_mirrored` variants accept any real

/// Gamma of the gray gamma 2.2 spaces.
pub const GRAY_GAMMA: f64 = 2.2;

/// Adobe RGB (1998) encoding gamma, `2 + 51/256`.
pub const ADOBE_RGB_GAMMA: f64 = 563.0 / 256.0;

/// EOTF for arbitrary gamma: `v^gamma`, zero for non-positive input.
///
/// ```rust
/// use swatch_transfer::gamma::gamma_eotf;
///
/// assert_eq!(gamma_eotf(0.5, 1.0), 0.5);
/// ```
#[inline]
pub fn gamma_eotf(v: f64, gamma: f64) -> f64 {
    if v <= 0.0 { 0.0 } else { v.powf(gamma) }
}

/// OETF for arbitrary gamma: `l^(1/gamma)`, zero for non-positive input.
#[inline]
pub fn gamma_oetf(l: f64, gamma: f64) -> f64 {
    if l <= 0.0 { 0.0 } else { l.powf(1.0 / gamma) }
}

/// Gamma EOTF mirrored around zero: `sign(v) * |v|^gamma`.
#[inline]
pub fn gamma_eotf_mirrored(v: f64, gamma: f64) -> f64 {
    v.signum() * gamma_eotf(v.abs(), gamma)
}

/// Gamma 2.2 EOTF.
#[inline]
pub fn eotf_22(v: f64) -> f64 {
    gamma_eotf(v, GRAY_GAMMA)
}

/// Adobe RGB (1998) EOTF.
#[inline]
pub fn adobe_rgb_eotf(v: f64) -> f64 {
    gamma_eotf(v, ADOBE_RGB_GAMMA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma22_roundtrip() {
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            assert!((v - gamma_oetf(eotf_22(v), GRAY_GAMMA)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_gamma_identity() {
        assert_eq!(gamma_eotf(0.5, 1.0), 0.5);
        assert_eq!(gamma_oetf(0.5, 1.0), 0.5);
    }

    #[test]
    fn test_non_positive_is_zero() {
        assert_eq!(gamma_eotf(-0.3, 2.2), 0.0);
        assert_eq!(gamma_oetf(0.0, 2.2), 0.0);
    }

    #[test]
    fn test_mirrored() {
        assert!((gamma_eotf_mirrored(-0.5, 2.2) + eotf_22(0.5)).abs() < 1e-15);
    }

    #[test]
    fn test_adobe_gamma_value() {
        assert!((ADOBE_RGB_GAMMA - 2.19921875).abs() < 1e-15);
        assert_eq!(adobe_rgb_eotf(1.0), 1.0);
    }
}
