use crate::core::actions::iterate::backend_kinds::BackendKinds;
use crate::core::actions::iterate::ports::iteration_backend::IterationBackend;
use crate::core::actions::iterate::step_pixel::step_pixel;
use crate::core::data::iterate_state::IterateState;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::fractals::formula::Formula;

/// Single-threaded reference backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialBackend;

impl IterationBackend for SerialBackend {
    fn kind(&self) -> BackendKinds {
        BackendKinds::Serial
    }

    fn step(&self, iteration: u32, formula: Formula, grid: &SampleGrid, state: &mut IterateState) {
        let (iterates, result) = state.parts_mut();

        iterates
            .iter_mut()
            .zip(result.iter_mut())
            .zip(grid.points())
            .for_each(|((iterate, escape), &c)| {
                step_pixel(iteration, formula, c, iterate, escape);
            });
    }
}
