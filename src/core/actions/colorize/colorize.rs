use crate::core::actions::colorize::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ColorizeError {
    InvalidGamma { gamma: f64 },
    ColourMap(Box<dyn Error>),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for ColorizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGamma { gamma } => {
                write!(f, "gamma must be positive and finite, got {}", gamma)
            }
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for ColorizeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidGamma { .. } => None,
            Self::ColourMap(err) => Some(err.as_ref()),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for ColorizeError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Escape value to palette input: divided by `max_iter + 1`, clipped to
/// `[0, 1]`, then raised to `gamma`. NaN maps to 0.
#[must_use]
pub fn normalise(value: f64, max_iter: u32, gamma: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }

    let scaled = value / (f64::from(max_iter) + 1.0);

    scaled.clamp(0.0, 1.0).powf(gamma)
}

/// Turns an escape-result raster into packed RGB through `mapper`.
pub fn colorize<CMap: ColourMap<f64>>(
    result: &[f64],
    max_iter: u32,
    mapper: &CMap,
    gamma: f64,
    resolution: Resolution,
) -> Result<PixelBuffer, ColorizeError> {
    if !(gamma.is_finite() && gamma > 0.0) {
        return Err(ColorizeError::InvalidGamma { gamma });
    }

    let mut buffer: PixelBufferData = Vec::with_capacity(result.len() * 3);

    for &value in result {
        let Colour { r, g, b } = mapper
            .map(normalise(value, max_iter, gamma))
            .map_err(ColorizeError::ColourMap)?;

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    Ok(PixelBuffer::from_data(resolution, buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StubGreyscale {}

    impl ColourMap<f64> for StubGreyscale {
        fn map(&self, value: f64) -> Result<Colour, Box<dyn Error>> {
            let level = (value * 255.0) as u8;
            Ok(Colour::new(level, level, level))
        }

        fn display_name(&self) -> &str {
            "Stub Greyscale"
        }
    }

    #[derive(Debug)]
    struct StubFailure {}

    impl ColourMap<f64> for StubFailure {
        fn map(&self, _: f64) -> Result<Colour, Box<dyn Error>> {
            Err("StubColourMapError".into())
        }

        fn display_name(&self) -> &str {
            "Stub Failure"
        }
    }

    fn resolution(width: u32, height: u32) -> Resolution {
        Resolution::new(width, height).unwrap()
    }

    #[test]
    fn test_normalise_divides_by_budget_plus_one() {
        assert_eq!(normalise(3.0, 3, 1.0), 0.75);
        assert_eq!(normalise(0.0, 100, 0.5), 0.0);
    }

    #[test]
    fn test_normalise_clips_and_applies_gamma() {
        assert_eq!(normalise(-4.0, 10, 1.0), 0.0);
        assert_eq!(normalise(50.0, 10, 1.0), 1.0);
        assert!((normalise(1.0, 3, 0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_normalise_maps_nan_to_zero() {
        assert_eq!(normalise(f64::NAN, 10, 0.5), 0.0);
    }

    #[test]
    fn test_colorize_row_major_rgb() {
        let result = vec![0.0, 3.0, 1.5, 100.0];
        let buffer = colorize(&result, 3, &StubGreyscale {}, 1.0, resolution(2, 2)).unwrap();

        assert_eq!(
            buffer.buffer(),
            &vec![0, 0, 0, 191, 191, 191, 95, 95, 95, 255, 255, 255]
        );
    }

    #[test]
    fn test_colorize_rejects_bad_gamma() {
        let result = vec![0.0];

        for gamma in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                colorize(&result, 3, &StubGreyscale {}, gamma, resolution(1, 1)),
                Err(ColorizeError::InvalidGamma { .. })
            ));
        }
    }

    #[test]
    fn test_colorize_propagates_colour_map_failure() {
        let result = vec![1.0, 2.0];
        let outcome = colorize(&result, 3, &StubFailure {}, 1.0, resolution(2, 1));

        assert!(matches!(outcome, Err(ColorizeError::ColourMap(_))));
    }

    #[test]
    fn test_colorize_size_mismatch() {
        let result = vec![1.0, 2.0, 3.0];
        let outcome = colorize(&result, 3, &StubGreyscale {}, 1.0, resolution(2, 2));

        assert!(matches!(
            outcome,
            Err(ColorizeError::PixelBuffer(PixelBufferError::BoundsMismatch {
                expected_size: 12,
                buffer_size: 9
            }))
        ));
    }

    #[test]
    fn test_colour_map_error_display() {
        let err = ColorizeError::ColourMap("StubColourMapError".into());

        assert_eq!(err.to_string(), "colour map error: StubColourMapError");
    }

    #[test]
    fn test_colour_map_error_is_the_source() {
        let err = colorize(&[1.0], 3, &StubFailure {}, 1.0, resolution(1, 1)).unwrap_err();
        let source = err.source().unwrap();

        assert_eq!(source.to_string(), "StubColourMapError");
    }
}
