use std::fmt::Debug;

use crate::core::actions::iterate::backend_kinds::BackendKinds;
use crate::core::data::iterate_state::IterateState;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::fractals::formula::Formula;

/// Executes one iteration step over every pixel.
///
/// Implementations may visit pixels in any order but must leave the state
/// exactly as [`step_pixel`](crate::core::actions::iterate::step_pixel::step_pixel)
/// applied to each pixel would.
pub trait IterationBackend: Debug + Send + Sync {
    fn kind(&self) -> BackendKinds;

    fn step(&self, iteration: u32, formula: Formula, grid: &SampleGrid, state: &mut IterateState);
}
