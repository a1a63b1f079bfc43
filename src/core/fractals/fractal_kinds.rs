use std::str::FromStr;

use crate::core::data::complex::Complex;
use crate::core::errors::configuration::ConfigurationError;
use crate::core::fractals::formula::Formula;

/// Formula selector without the Custom constant, as picked from a menu or a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
    Custom,
    Tricorn,
    MultibrotCubic,
    Phoenix,
    Perpendicular,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia,
        Self::BurningShip,
        Self::Custom,
        Self::Tricorn,
        Self::MultibrotCubic,
        Self::Phoenix,
        Self::Perpendicular,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::BurningShip => "Burning Ship",
            Self::Custom => "Custom",
            Self::Tricorn => "Tricorn",
            Self::MultibrotCubic => "Multibrot3",
            Self::Phoenix => "Phoenix",
            Self::Perpendicular => "Perpendicular",
        }
    }

    /// Concrete formula; `custom_constant` is only used by [`FractalKinds::Custom`].
    #[must_use]
    pub const fn formula(self, custom_constant: Complex) -> Formula {
        match self {
            Self::Mandelbrot => Formula::Mandelbrot,
            Self::Julia => Formula::Julia,
            Self::BurningShip => Formula::BurningShip,
            Self::Custom => Formula::Custom(custom_constant),
            Self::Tricorn => Formula::Tricorn,
            Self::MultibrotCubic => Formula::MultibrotCubic,
            Self::Phoenix => Formula::Phoenix,
            Self::Perpendicular => Formula::Perpendicular,
        }
    }
}

impl std::fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for FractalKinds {
    type Err = ConfigurationError;

    /// Accepts display names and their kebab/snake spellings, ignoring case.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "mandelbrot" => Ok(Self::Mandelbrot),
            "julia" => Ok(Self::Julia),
            "burningship" => Ok(Self::BurningShip),
            "custom" => Ok(Self::Custom),
            "tricorn" => Ok(Self::Tricorn),
            "multibrot3" | "multibrotcubic" => Ok(Self::MultibrotCubic),
            "phoenix" => Ok(Self::Phoenix),
            "perpendicular" => Ok(Self::Perpendicular),
            _ => Err(ConfigurationError::UnsupportedFormula {
                name: name.to_string(),
            }),
        }
    }
}
