use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;

pub const MIN_ITERATIONS: u32 = 50;
pub const MAX_ITERATIONS: u32 = 2000;
pub const MIN_GAMMA: f64 = 0.1;
pub const MAX_GAMMA: f64 = 2.0;
pub const DEFAULT_GAMMA: f64 = 0.5;
pub const CUSTOM_CONSTANT_LIMIT: f64 = 2.0;
pub const DEFAULT_CUSTOM_CONSTANT: Complex = Complex::new(-0.7, 0.27015);

/// Presentation and input options that sit beside the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiOptions {
    pub fractal_kind: FractalKinds,
    pub colour_map: ColourMapKinds,
    pub gamma: f64,
    pub fixed_iterations: bool,
    pub custom_constant: Complex,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            fractal_kind: FractalKinds::default(),
            colour_map: ColourMapKinds::default(),
            gamma: DEFAULT_GAMMA,
            fixed_iterations: false,
            custom_constant: DEFAULT_CUSTOM_CONSTANT,
        }
    }
}

impl UiOptions {
    #[must_use]
    pub fn clamp_gamma(gamma: f64) -> f64 {
        gamma.clamp(MIN_GAMMA, MAX_GAMMA)
    }

    #[must_use]
    pub fn clamp_iterations(iterations: u32) -> u32 {
        iterations.clamp(MIN_ITERATIONS, MAX_ITERATIONS)
    }

    #[must_use]
    pub fn clamp_custom_constant(constant: Complex) -> Complex {
        Complex::new(
            constant.real.clamp(-CUSTOM_CONSTANT_LIMIT, CUSTOM_CONSTANT_LIMIT),
            constant.imag.clamp(-CUSTOM_CONSTANT_LIMIT, CUSTOM_CONSTANT_LIMIT),
        )
    }
}
