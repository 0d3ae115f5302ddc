//! # swatch-primaries
//!
//! Color primaries, white points, and RGB-XYZ matrix generation.
//!
//! The RGB color spaces swatch converts from all share the D65 white point
//! with sRGB, so a primaries change is a single matrix through XYZ with no
//! chromatic adaptation.
//!
//! # Included Color Spaces
//!
//! | Color Space | Gamut Size | Source |
//! |-------------|------------|--------|
//! | sRGB | Small | IEC 61966-2-1 |
//! | Display P3 | Medium | P3 primaries, D65 |
//! | Adobe RGB (1998) | Medium | Adobe RGB (1998) Color Image Encoding |
//!
//! # Usage
//!
//! ```rust
//! use swatch_primaries::{DISPLAY_P3, SRGB, rgb_to_rgb_matrix};
//! use swatch_math::Vec3;
//!
//! let p3_to_srgb = rgb_to_rgb_matrix(&DISPLAY_P3, &SRGB);
//! let white = p3_to_srgb * Vec3::ONE;
//! assert!((white.x - 1.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use swatch_math::{Mat3, Vec3};

/// RGB color space primaries definition.
///
/// Three primaries and a white point, as CIE xy chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f64, f64),
    /// Green primary (x, y) chromaticity
    pub g: (f64, f64),
    /// Blue primary (x, y) chromaticity
    pub b: (f64, f64),
    /// White point (x, y) chromaticity
    pub w: (f64, f64),
    /// Color space name
    pub name: &'static str,
}

impl Primaries {
    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xy_to_xyz(self.w.0, self.w.1)
    }
}

// ============================================================================
// Standard White Points
// ============================================================================

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: (f64, f64) = (0.31270, 0.32900);

// ============================================================================
// Standard Color Space Primaries
// ============================================================================

/// sRGB / Rec.709 primaries (D65 white point).
pub const SRGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "sRGB",
};

/// Display P3 primaries (D65 white point).
///
/// DCI-P3 primaries with a D65 white point.
pub const DISPLAY_P3: Primaries = Primaries {
    r: (0.6800, 0.3200),
    g: (0.2650, 0.6900),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "Display P3",
};

/// Adobe RGB (1998) primaries (D65 white point).
pub const ADOBE_RGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.2100, 0.7100),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "Adobe RGB (1998)",
};

// ============================================================================
// Matrix Generation
// ============================================================================

/// Converts xy chromaticity to XYZ (with Y=1).
fn xy_to_xyz(x: f64, y: f64) -> Vec3 {
    if y.abs() < 1e-12 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Compute scaling factors so white point maps correctly
/// 3. Multiply primaries by scaling factors
///
/// ```rust
/// use swatch_primaries::{SRGB, rgb_to_xyz_matrix};
/// use swatch_math::Vec3;
///
/// let white = rgb_to_xyz_matrix(&SRGB) * Vec3::ONE;
/// assert!((white.y - 1.0).abs() < 1e-9);
/// ```
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    let r_xyz = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g_xyz = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b_xyz = xy_to_xyz(primaries.b.0, primaries.b.1);
    let w_xyz = primaries.white_xyz();

    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);

    // S = M^-1 * W
    let m_inv = m.inverse().unwrap_or(Mat3::IDENTITY);
    let s = m_inv * w_xyz;

    Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z)
}

/// Computes the XYZ to RGB matrix for a set of primaries.
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Mat3 {
    rgb_to_xyz_matrix(primaries)
        .inverse()
        .unwrap_or(Mat3::IDENTITY)
}

/// Computes a matrix converting linear RGB from one set of primaries to another.
///
/// Goes through XYZ: `RGB_src -> XYZ -> RGB_dst`. No chromatic adaptation is
/// applied; every space in this crate is D65.
pub fn rgb_to_rgb_matrix(src: &Primaries, dst: &Primaries) -> Mat3 {
    xyz_to_rgb_matrix(dst) * rgb_to_xyz_matrix(src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_srgb_matrix() {
        // IEC 61966-2-1 values for a white of xy (0.3127, 0.3290).
        let m = rgb_to_xyz_matrix(&SRGB);
        assert_abs_diff_eq!(m.m[0][0], 0.4123908, epsilon = 1e-6);
        assert_abs_diff_eq!(m.m[1][0], 0.2126390, epsilon = 1e-6);
        assert_abs_diff_eq!(m.m[2][2], 0.9505322, epsilon = 1e-6);

        let white = m * Vec3::ONE;
        let expected = SRGB.white_xyz();
        assert_abs_diff_eq!(white.x, expected.x, epsilon = 1e-12);
        assert_abs_diff_eq!(white.z, expected.z, epsilon = 1e-12);
    }

    #[test]
    fn test_roundtrip() {
        let to_xyz = rgb_to_xyz_matrix(&SRGB);
        let to_rgb = xyz_to_rgb_matrix(&SRGB);
        let rgb = Vec3::new(0.5, 0.3, 0.8);
        let back = to_rgb * (to_xyz * rgb);
        assert_abs_diff_eq!(rgb.x, back.x, epsilon = 1e-12);
        assert_abs_diff_eq!(rgb.y, back.y, epsilon = 1e-12);
        assert_abs_diff_eq!(rgb.z, back.z, epsilon = 1e-12);
    }

    #[test]
    fn test_same_space_is_identity() {
        let m = rgb_to_rgb_matrix(&SRGB, &SRGB);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(m.m[i][j], expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_p3_to_srgb_known_values() {
        // Published linear Display P3 -> linear sRGB matrix.
        let m = rgb_to_rgb_matrix(&DISPLAY_P3, &SRGB);
        assert_abs_diff_eq!(m.m[0][0], 1.2249402, epsilon = 1e-6);
        assert_abs_diff_eq!(m.m[0][1], -0.2249402, epsilon = 1e-6);
        assert_abs_diff_eq!(m.m[1][1], 1.0420570, epsilon = 1e-6);
        assert_abs_diff_eq!(m.m[2][2], 1.0982736, epsilon = 1e-6);
    }

    #[test]
    fn test_white_maps_to_white_across_d65_spaces() {
        for src in [DISPLAY_P3, ADOBE_RGB] {
            let white = rgb_to_rgb_matrix(&src, &SRGB) * Vec3::ONE;
            assert_abs_diff_eq!(white.x, 1.0, epsilon = 1e-9);
            assert_abs_diff_eq!(white.y, 1.0, epsilon = 1e-9);
            assert_abs_diff_eq!(white.z, 1.0, epsilon = 1e-9);
        }
    }
}
