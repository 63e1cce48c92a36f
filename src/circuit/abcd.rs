//! 2×2 chain (ABCD) transmission matrices.
//!
//! A two-port relates its input port to its output port by
//!
//! ```text
//! [ V1 ]   [ A  B ] [ V2 ]
//! [ I1 ] = [ C  D ] [ I2 ]
//! ```
//!
//! so a cascade of sections is the left-to-right product of their matrices.

use std::ops::Mul;

use num_complex::Complex64;

/// ABCD matrix of a two-port section or of a whole cascade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbcdMatrix {
    pub a: Complex64,
    pub b: Complex64,
    pub c: Complex64,
    pub d: Complex64,
}

impl AbcdMatrix {
    /// The through connection `[[1, 0], [0, 1]]`.
    pub fn identity() -> Self {
        Self::new(Complex64::ONE, Complex64::ZERO, Complex64::ZERO, Complex64::ONE)
    }

    /// Construct from explicit elements.
    pub fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        Self { a, b, c, d }
    }

    /// Construct from real elements.
    pub fn real(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::new(a.into(), b.into(), c.into(), d.into())
    }

    /// Series impedance `Z`: `[[1, Z], [0, 1]]`.
    pub fn series(z: Complex64) -> Self {
        Self::new(Complex64::ONE, z, Complex64::ZERO, Complex64::ONE)
    }

    /// Shunt admittance `Y`: `[[1, 0], [Y, 1]]`.
    pub fn shunt(y: Complex64) -> Self {
        Self::new(Complex64::ONE, Complex64::ZERO, y, Complex64::ONE)
    }

    /// Determinant `AD - BC` (1 for any reciprocal network).
    pub fn determinant(&self) -> Complex64 {
        self.a * self.d - self.b * self.c
    }

    /// Whether every element is within `tolerance` of `other`'s.
    pub fn approx_eq(&self, other: &AbcdMatrix, tolerance: f64) -> bool {
        (self.a - other.a).norm() <= tolerance
            && (self.b - other.b).norm() <= tolerance
            && (self.c - other.c).norm() <= tolerance
            && (self.d - other.d).norm() <= tolerance
    }
}

impl Default for AbcdMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for AbcdMatrix {
    type Output = AbcdMatrix;

    /// `self` followed by `rhs` in the cascade.
    fn mul(self, rhs: AbcdMatrix) -> AbcdMatrix {
        AbcdMatrix {
            a: self.a * rhs.a + self.b * rhs.c,
            b: self.a * rhs.b + self.b * rhs.d,
            c: self.c * rhs.a + self.d * rhs.c,
            d: self.c * rhs.b + self.d * rhs.d,
        }
    }
}
