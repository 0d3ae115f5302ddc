//! 3D vector type for color triplets.
//!
//! [`Vec3`] represents RGB or XYZ values.
//!
//! ```rust
//! use swatch_math::Vec3;
//!
//! let rgb = Vec3::new(1.2, 0.5, -0.25);
//! assert_eq!(rgb.clamp01(), Vec3::new(1.0, 0.5, 0.0));
//! ```

use std::ops::Mul;

/// A 3D vector for color triplets (RGB, XYZ).
///
/// For RGB: x=R, y=G, z=B. For XYZ: x=X, y=Y, z=Z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// X component (R for RGB, X for XYZ)
    pub x: f64,
    /// Y component (G for RGB, Y for XYZ)
    pub y: f64,
    /// Z component (B for RGB, Z for XYZ)
    pub z: f64,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Applies `f` to every component.
    ///
    /// Used to run a per-channel transfer curve over a triplet.
    ///
    /// ```rust
    /// use swatch_math::Vec3;
    ///
    /// let v = Vec3::new(1.0, 4.0, 9.0).map(f64::sqrt);
    /// assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    /// ```
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Clamps each component to [0, 1].
    #[inline]
    pub fn clamp01(self) -> Self {
        self.map(|c| c.clamp(0.0, 1.0))
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> [f64; 3] {
        v.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_dot() {
        let luma = Vec3::new(0.2126, 0.7152, 0.0722);
        assert!((Vec3::ONE.dot(luma) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_vec3_clamp01() {
        let v = Vec3::new(-1.0, 0.25, 3.0).clamp01();
        assert_eq!(v, Vec3::new(0.0, 0.25, 1.0));
    }
}
