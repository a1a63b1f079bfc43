use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::fractals::formula::Formula;
use crate::core::util::roll_2d::roll_2d;

/// Per-pixel iterate. `z_prev` stays zero unless the formula reads it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Iterate {
    pub z: Complex,
    pub z_prev: Complex,
    pub active: bool,
}

/// Iterates plus the escape result, both row-major over the same raster.
///
/// `result` holds the iteration budget for every active pixel and the smooth
/// escape index for every escaped one.
#[derive(Debug, Clone, PartialEq)]
pub struct IterateState {
    resolution: Resolution,
    iterates: Vec<Iterate>,
    result: Vec<f64>,
}

impl IterateState {
    /// Fresh state: every pixel active at the formula's starting iterate.
    #[must_use]
    pub fn initial(formula: Formula, grid: &SampleGrid, max_iter: u32) -> Self {
        let iterates: Vec<Iterate> = grid
            .points()
            .iter()
            .map(|&c| Iterate {
                z: formula.initial_z(c),
                z_prev: Complex::ZERO,
                active: true,
            })
            .collect();
        let result = vec![f64::from(max_iter); iterates.len()];

        Self {
            resolution: grid.resolution(),
            iterates,
            result,
        }
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn iterates(&self) -> &[Iterate] {
        &self.iterates
    }

    #[must_use]
    pub fn result(&self) -> &[f64] {
        &self.result
    }

    /// Split borrow for the step kernels.
    pub fn parts_mut(&mut self) -> (&mut [Iterate], &mut [f64]) {
        (&mut self.iterates, &mut self.result)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.iterates.iter().filter(|iterate| iterate.active).count()
    }

    /// Stamps the budget on every pixel that is still active.
    pub fn settle_active(&mut self, max_iter: u32) {
        let budget = f64::from(max_iter);

        for (iterate, value) in self.iterates.iter().zip(self.result.iter_mut()) {
            if iterate.active {
                *value = budget;
            }
        }
    }

    pub fn roll(&mut self, dx: i32, dy: i32) {
        self.iterates = roll_2d(&self.iterates, self.resolution, dx, dy);
        self.result = roll_2d(&self.result, self.resolution, dx, dy);
    }
}
