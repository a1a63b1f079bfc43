use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;

/// Constant added by the Julia recurrence.
pub const JULIA_CONSTANT: Complex = Complex::new(-0.7, 0.27015);

/// Weight of the previous iterate in the Phoenix recurrence.
pub const PHOENIX_WEIGHT: f64 = -0.5;

/// The iterated map applied to every active pixel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Formula {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
    Custom(Complex),
    Tricorn,
    MultibrotCubic,
    Phoenix,
    Perpendicular,
}

impl Formula {
    #[must_use]
    pub const fn kind(self) -> FractalKinds {
        match self {
            Self::Mandelbrot => FractalKinds::Mandelbrot,
            Self::Julia => FractalKinds::Julia,
            Self::BurningShip => FractalKinds::BurningShip,
            Self::Custom(_) => FractalKinds::Custom,
            Self::Tricorn => FractalKinds::Tricorn,
            Self::MultibrotCubic => FractalKinds::MultibrotCubic,
            Self::Phoenix => FractalKinds::Phoenix,
            Self::Perpendicular => FractalKinds::Perpendicular,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        self.kind().display_name()
    }

    /// Starting iterate for the pixel sampled at `c`.
    #[must_use]
    pub fn initial_z(self, c: Complex) -> Complex {
        match self {
            Self::Julia | Self::Custom(_) => c,
            _ => Complex::ZERO,
        }
    }

    /// Whether the recurrence reads the iterate from the step before.
    #[must_use]
    pub const fn uses_previous(self) -> bool {
        matches!(self, Self::Phoenix)
    }

    /// Next iterate from the current `z`, the previous iterate `z_prev` and the sample `c`.
    #[must_use]
    pub fn next(self, z: Complex, z_prev: Complex, c: Complex) -> Complex {
        match self {
            Self::Mandelbrot => z.square() + c,
            Self::Julia => z.square() + JULIA_CONSTANT,
            Self::BurningShip => Complex::new(z.real.abs(), z.imag.abs()).square() + c,
            Self::Custom(k) => z.square() + k,
            Self::Tricorn => z.conj().square() + c,
            Self::MultibrotCubic => z.cube() + c,
            Self::Phoenix => z.square() + z_prev.scale(PHOENIX_WEIGHT) + c,
            Self::Perpendicular => Complex::new(z.real.abs(), -z.imag.abs()).square() + c,
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Custom(k) => write!(f, "Custom ({} + {}i)", k.real, k.imag),
            _ => f.write_str(self.display_name()),
        }
    }
}
