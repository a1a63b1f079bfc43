use crate::core::data::bounds::Bounds;
use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::errors::configuration::ConfigurationError;
use crate::core::util::roll_2d::roll_2d;

/// Evenly spaced samples over `[start, end]`, both endpoints included.
///
/// A single sample sits on `start`; with more than one, the last sample is `end`
/// exactly rather than the accumulated step.
fn linspace(start: f64, end: f64, count: u32) -> Vec<f64> {
    if count == 1 {
        return vec![start];
    }

    let last = count - 1;
    let step = (end - start) / f64::from(last);

    (0..count)
        .map(|i| if i == last { end } else { start + f64::from(i) * step })
        .collect()
}

/// One complex sample point per pixel, row-major, `height` rows of `width` columns.
///
/// Rows walk the imaginary axis from `im_start`, columns walk the real axis from
/// `re_start`. Axes are sampled independently, so a non-matching aspect ratio
/// stretches the image.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    resolution: Resolution,
    points: Vec<Complex>,
}

impl SampleGrid {
    pub fn build(bounds: Bounds, width: u32, height: u32) -> Result<Self, ConfigurationError> {
        let resolution = Resolution::new(width, height)?;
        Ok(Self::for_resolution(bounds, resolution))
    }

    #[must_use]
    pub fn for_resolution(bounds: Bounds, resolution: Resolution) -> Self {
        let reals = linspace(bounds.re_start, bounds.re_end, resolution.width());
        let imags = linspace(bounds.im_start, bounds.im_end, resolution.height());

        let points = imags
            .iter()
            .flat_map(|&imag| reals.iter().map(move |&real| Complex { real, imag }))
            .collect();

        Self { resolution, points }
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn points(&self) -> &[Complex] {
        &self.points
    }

    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> Complex {
        self.points[self.resolution.index(row, col)]
    }

    /// Cyclic shift by `dy` rows and `dx` columns, keeping every sample value.
    pub fn roll(&mut self, dx: i32, dy: i32) {
        self.points = roll_2d(&self.points, self.resolution, dx, dy);
    }
}
