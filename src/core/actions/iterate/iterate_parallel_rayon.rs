use rayon::prelude::*;

use crate::core::actions::iterate::backend_kinds::BackendKinds;
use crate::core::actions::iterate::ports::iteration_backend::IterationBackend;
use crate::core::actions::iterate::step_pixel::step_pixel;
use crate::core::data::iterate_state::IterateState;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::fractals::formula::Formula;

/// Smallest run of pixels handed to a single rayon task.
pub const MIN_PIXELS_PER_TASK: usize = 1024;

/// Runs each step across rayon's work-stealing pool.
///
/// Pixels carry no cross-pixel dependency within a step, so the split is
/// arbitrary; steps themselves still run one after the other.
#[derive(Debug, Clone, Copy, Default)]
pub struct RayonBackend;

impl IterationBackend for RayonBackend {
    fn kind(&self) -> BackendKinds {
        BackendKinds::Rayon
    }

    fn step(&self, iteration: u32, formula: Formula, grid: &SampleGrid, state: &mut IterateState) {
        let (iterates, result) = state.parts_mut();

        iterates
            .par_iter_mut()
            .zip(result.par_iter_mut())
            .zip(grid.points().par_iter())
            .with_min_len(MIN_PIXELS_PER_TASK)
            .for_each(|((iterate, escape), &c)| {
                step_pixel(iteration, formula, c, iterate, escape);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::iterate::iterate_serial::SerialBackend;
    use crate::core::data::bounds::Bounds;
    use crate::core::fractals::fractal_kinds::FractalKinds;
    use crate::core::data::complex::Complex;

    fn run(backend: &dyn IterationBackend, formula: Formula, steps: u32) -> IterateState {
        let grid = SampleGrid::build(Bounds::new(-2.0, 1.0, -1.2, 1.2), 97, 61).unwrap();
        let mut state = IterateState::initial(formula, &grid, steps);

        for i in 0..steps {
            backend.step(i, formula, &grid, &mut state);
        }

        state
    }

    #[test]
    fn test_rayon_matches_serial_for_every_formula() {
        for &kind in FractalKinds::ALL {
            let formula = kind.formula(Complex::new(-0.8, 0.156));
            let serial = run(&SerialBackend, formula, 30);
            let rayon = run(&RayonBackend, formula, 30);

            assert_eq!(rayon, serial, "{}", formula);
        }
    }

    #[test]
    fn test_rayon_with_single_pixel() {
        let grid = SampleGrid::build(Bounds::new(0.0, 0.0, 0.0, 0.0), 1, 1).unwrap();
        let mut state = IterateState::initial(Formula::Mandelbrot, &grid, 3);

        RayonBackend.step(0, Formula::Mandelbrot, &grid, &mut state);

        assert_eq!(state.active_count(), 1);
    }
}
