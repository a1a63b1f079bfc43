use std::time::Instant;

use log::{debug, trace};

use crate::core::actions::iterate::backend_kinds::{BackendKinds, iteration_backend_factory};
use crate::core::actions::iterate::ports::iteration_backend::IterationBackend;
use crate::core::data::bounds::{Bounds, SAME_VIEW_TOLERANCE};
use crate::core::data::iterate_state::{Iterate, IterateState};
use crate::core::data::resolution::Resolution;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::engine::engine_config::EngineConfig;
use crate::core::errors::configuration::ConfigurationError;
use crate::core::fractals::formula::Formula;

/// Which path [`FractalState::update_zoom`] took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomUpdate {
    Extended,
    Rebuilt,
}

fn validate_max_iter(max_iter: u32) -> Result<(), ConfigurationError> {
    if max_iter == 0 {
        return Err(ConfigurationError::ZeroMaxIterations);
    }

    Ok(())
}

/// The current view: sample grid, per-pixel iterates and escape result.
///
/// Structural operations take `&mut self` and must not overlap. Inside a step
/// the backend is free to spread pixels across threads.
#[derive(Debug)]
pub struct FractalState {
    resolution: Resolution,
    bounds: Bounds,
    max_iter: u32,
    formula: Formula,
    grid: SampleGrid,
    state: IterateState,
    initial_bounds: Bounds,
    initial_max_iter: u32,
    backend: Box<dyn IterationBackend>,
}

impl FractalState {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigurationError> {
        Self::with_backend(config, iteration_backend_factory(config.backend))
    }

    pub fn with_backend(
        config: EngineConfig,
        backend: Box<dyn IterationBackend>,
    ) -> Result<Self, ConfigurationError> {
        let resolution = Resolution::new(config.width, config.height)?;
        validate_max_iter(config.max_iter)?;

        let grid = SampleGrid::for_resolution(config.bounds, resolution);
        let state = IterateState::initial(config.formula, &grid, config.max_iter);

        let mut engine = Self {
            resolution,
            bounds: config.bounds,
            max_iter: config.max_iter,
            formula: config.formula,
            grid,
            state,
            initial_bounds: config.bounds,
            initial_max_iter: config.max_iter,
            backend,
        };

        debug!(
            "engine {}x{} on {} backend, {} over {:?}",
            resolution.width(),
            resolution.height(),
            engine.backend.kind(),
            engine.formula,
            engine.bounds
        );

        engine.run_steps(0, engine.max_iter);
        Ok(engine)
    }

    /// Discards all iterate state and recomputes `max_iter` steps from scratch.
    pub fn rebuild(
        &mut self,
        bounds: Bounds,
        max_iter: u32,
        formula: Formula,
    ) -> Result<(), ConfigurationError> {
        validate_max_iter(max_iter)?;

        self.bounds = bounds;
        self.max_iter = max_iter;
        self.formula = formula;
        self.recompute();

        Ok(())
    }

    /// Runs steps `max_iter..new_max_iter` on the pixels that are still active.
    ///
    /// Only meaningful while bounds and formula are unchanged since the last
    /// rebuild. A budget at or below the current one leaves everything as is.
    pub fn extend(&mut self, new_max_iter: u32) -> Result<(), ConfigurationError> {
        validate_max_iter(new_max_iter)?;

        if new_max_iter <= self.max_iter {
            trace!(
                "extend to {} ignored, budget already {}",
                new_max_iter, self.max_iter
            );
            return Ok(());
        }

        let start = Instant::now();
        self.run_steps(self.max_iter, new_max_iter);
        self.state.settle_active(new_max_iter);

        debug!(
            "extended {} -> {} iterations in {:?}, {} pixels still active",
            self.max_iter,
            new_max_iter,
            start.elapsed(),
            self.state.active_count()
        );

        self.max_iter = new_max_iter;
        Ok(())
    }

    /// Advances every active pixel by step `iteration`.
    ///
    /// Steps must be issued in increasing order starting from the current budget.
    pub fn step(&mut self, iteration: u32) {
        self.backend
            .step(iteration, self.formula, &self.grid, &mut self.state);
    }

    /// Pans by whole pixels without iterating.
    ///
    /// The grid and buffers shift cyclically together, so every iterate stays
    /// paired with the sample it was computed from. The trailing edge shows
    /// wrapped content from the opposite side until the next rebuild.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.state.roll(dx, dy);
        self.grid.roll(dx, dy);
        self.bounds = self.bounds.translated(
            dx,
            dy,
            self.resolution.width(),
            self.resolution.height(),
        );

        trace!("translated by ({}, {}) to {:?}", dx, dy, self.bounds);
    }

    /// Extends in place when the bounds are unchanged within tolerance and the
    /// budget grows; rebuilds otherwise.
    pub fn update_zoom(
        &mut self,
        bounds: Bounds,
        new_max_iter: u32,
    ) -> Result<ZoomUpdate, ConfigurationError> {
        validate_max_iter(new_max_iter)?;

        if self.bounds.approx_eq(&bounds, SAME_VIEW_TOLERANCE) && new_max_iter > self.max_iter {
            self.extend(new_max_iter)?;
            return Ok(ZoomUpdate::Extended);
        }

        self.rebuild(bounds, new_max_iter, self.formula)?;
        Ok(ZoomUpdate::Rebuilt)
    }

    /// Back to the bounds and budget the engine was created with, keeping the formula.
    pub fn reset(&mut self) {
        self.bounds = self.initial_bounds;
        self.max_iter = self.initial_max_iter;
        self.recompute();
    }

    /// Switches formula (or Custom constant) and rebuilds the current view.
    pub fn set_formula(&mut self, formula: Formula) {
        self.formula = formula;
        self.recompute();
    }

    #[must_use]
    pub fn result(&self) -> &[f64] {
        self.state.result()
    }

    #[must_use]
    pub fn iterates(&self) -> &[Iterate] {
        self.state.iterates()
    }

    #[must_use]
    pub fn sample_grid(&self) -> &SampleGrid {
        &self.grid
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn max_iter(&self) -> u32 {
        self.max_iter
    }

    #[must_use]
    pub fn formula(&self) -> Formula {
        self.formula
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn backend_kind(&self) -> BackendKinds {
        self.backend.kind()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.state.active_count()
    }

    /// The live view as a config for building a fresh engine at another size.
    #[must_use]
    pub fn current_config(&self) -> EngineConfig {
        EngineConfig {
            width: self.resolution.width(),
            height: self.resolution.height(),
            bounds: self.bounds,
            max_iter: self.max_iter,
            formula: self.formula,
            backend: self.backend_kind(),
        }
    }

    fn recompute(&mut self) {
        let start = Instant::now();

        self.grid = SampleGrid::for_resolution(self.bounds, self.resolution);
        self.state = IterateState::initial(self.formula, &self.grid, self.max_iter);
        self.run_steps(0, self.max_iter);

        debug!(
            "rebuilt {} at {} iterations over {:?} in {:?}",
            self.formula,
            self.max_iter,
            self.bounds,
            start.elapsed()
        );
    }

    fn run_steps(&mut self, from: u32, to: u32) {
        for iteration in from..to {
            self.step(iteration);
        }
    }
}
