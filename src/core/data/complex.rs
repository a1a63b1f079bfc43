use std::ops::{Add, Mul};

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Modulus computed with `hypot` so large iterates do not overflow before the escape test.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imag)
    }

    #[must_use]
    pub fn conj(self) -> Self {
        Self {
            real: self.real,
            imag: -self.imag,
        }
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self {
            real: self.real * factor,
            imag: self.imag * factor,
        }
    }

    #[must_use]
    pub fn square(self) -> Self {
        self * self
    }

    #[must_use]
    pub fn cube(self) -> Self {
        self * self * self
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude() {
        assert_eq!(Complex::new(3.0, -4.0).magnitude(), 5.0);
        assert_eq!(Complex::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_magnitude_does_not_overflow_for_huge_parts() {
        let c = Complex::new(1e200, 1e200);

        assert!((c.real * c.real + c.imag * c.imag).is_infinite());
        assert!(c.magnitude().is_finite());
    }

    #[test]
    fn test_add() {
        let result = Complex::new(1.0, 2.0) + Complex::new(-3.0, -7.0);
        assert_eq!(result, Complex::new(-2.0, -5.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i) * (3 + 4i) = 3 + 4i + 6i + 8i² = 3 + 10i - 8 = -5 + 10i
        let result = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
        assert_eq!(result, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_mul_by_zero() {
        let result = Complex::new(5.0, 3.0) * Complex::ZERO;
        assert_eq!(result, Complex::ZERO);
    }

    #[test]
    fn test_square() {
        // (2 + 3i)² = 4 + 12i + 9i² = -5 + 12i
        assert_eq!(Complex::new(2.0, 3.0).square(), Complex::new(-5.0, 12.0));
    }

    #[test]
    fn test_cube() {
        // (1 + i)³ = (2i)(1 + i) = -2 + 2i
        assert_eq!(Complex::new(1.0, 1.0).cube(), Complex::new(-2.0, 2.0));
    }

    #[test]
    fn test_conj() {
        assert_eq!(Complex::new(1.5, -2.0).conj(), Complex::new(1.5, 2.0));
    }

    #[test]
    fn test_scale() {
        assert_eq!(Complex::new(2.0, -4.0).scale(-0.5), Complex::new(-1.0, 2.0));
    }
}
