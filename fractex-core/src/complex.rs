use serde::{Deserialize, Serialize};
use std::ops::Add;

/// A complex number represented as two `f64` components.
///
/// This is a lightweight, `Copy` type sized for the tight iteration loop.
/// We roll our own instead of pulling in `num::Complex` so the escape-time
/// update rules can be expressed with exactly the primitives they need
/// ([`sqr`](Self::sqr), [`conj`](Self::conj), [`abs_parts`](Self::abs_parts)).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    #[inline]
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Returns `re² + im²` without taking the square root.
    #[inline]
    pub fn norm_sq(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Returns the complex square `z²`.
    #[inline]
    pub fn sqr(self) -> Self {
        Self {
            re: self.re * self.re - self.im * self.im,
            im: 2.0 * self.re * self.im,
        }
    }

    /// Returns the complex conjugate `z̄`.
    #[inline]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Returns `|re| + i·|im|` — the component-wise absolute value used by
    /// the Burning Ship update rule.
    #[inline]
    pub fn abs_parts(self) -> Self {
        Self {
            re: self.re.abs(),
            im: self.im.abs(),
        }
    }
}

// -- Arithmetic operators --

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl std::fmt::Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.im >= 0.0 {
            write!(f, "{} + {}i", self.re, self.im)
        } else {
            write!(f, "{} - {}i", self.re, -self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn zero_constant() {
        let z = Complex::ZERO;
        assert_eq!(z.re, 0.0);
        assert_eq!(z.im, 0.0);
    }

    #[test]
    fn addition() {
        let c = Complex::new(1.0, 2.0) + Complex::new(3.0, 4.0);
        assert!(approx_eq(c.re, 4.0));
        assert!(approx_eq(c.im, 6.0));
    }

    #[test]
    fn squaring() {
        // z² where z = 1 + i → (1+i)(1+i) = 1 + 2i - 1 = 0 + 2i
        let z2 = Complex::new(1.0, 1.0).sqr();
        assert!(approx_eq(z2.re, 0.0));
        assert!(approx_eq(z2.im, 2.0));
    }

    #[test]
    fn conjugate_square_flips_imaginary() {
        // z̄² where z = 1 + i → (1-i)² = -2i
        let z2 = Complex::new(1.0, 1.0).conj().sqr();
        assert!(approx_eq(z2.re, 0.0));
        assert!(approx_eq(z2.im, -2.0));
    }

    #[test]
    fn abs_parts_folds_into_first_quadrant() {
        let z = Complex::new(-3.0, -4.0).abs_parts();
        assert!(approx_eq(z.re, 3.0));
        assert!(approx_eq(z.im, 4.0));
    }

    #[test]
    fn norm_sq() {
        assert!(approx_eq(Complex::new(3.0, 4.0).norm_sq(), 25.0));
    }

    #[test]
    fn serde_round_trip() {
        let z = Complex::new(-0.75, 0.1);
        let json = serde_json::to_string(&z).unwrap();
        let back: Complex = serde_json::from_str(&json).unwrap();
        assert_eq!(z, back);
    }
}
