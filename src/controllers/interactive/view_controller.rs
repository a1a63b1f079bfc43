use std::time::Instant;

use log::debug;

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::ui_options::{MAX_ITERATIONS, MIN_ITERATIONS, UiOptions};
use crate::controllers::interactive::data::view_command::{ViewCommand, ZoomDirection};
use crate::core::actions::colorize::colorize::{ColorizeError, colorize};
use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::colour_mapping::map::PaletteColourMap;
use crate::core::data::complex::Complex;
use crate::core::engine::engine_config::EngineConfig;
use crate::core::engine::fractal_state::{FractalState, ZoomUpdate};
use crate::core::errors::configuration::ConfigurationError;
use crate::core::fractals::fractal_kinds::FractalKinds;

pub const WHEEL_ZOOM_IN_FACTOR: f64 = 0.9;
pub const WHEEL_ZOOM_OUT_FACTOR: f64 = 1.1;
pub const CONTINUOUS_ZOOM_FACTOR: f64 = 0.95;

const fn zoom_factor(direction: ZoomDirection) -> f64 {
    match direction {
        ZoomDirection::In => WHEEL_ZOOM_IN_FACTOR,
        ZoomDirection::Out => WHEEL_ZOOM_OUT_FACTOR,
    }
}

/// Zooming in adds an iteration up to the ceiling, zooming out drops one down to the floor.
fn budget_after_zoom(direction: ZoomDirection, current: u32) -> u32 {
    match direction {
        ZoomDirection::In => MAX_ITERATIONS.min(current.saturating_add(1)),
        ZoomDirection::Out => MIN_ITERATIONS.max(current.saturating_sub(1)),
    }
}

/// Owns the engine and the UI options and translates input into engine operations.
pub struct ViewController {
    engine: FractalState,
    options: UiOptions,
    colour_map: Box<dyn PaletteColourMap>,
}

impl ViewController {
    /// The formula in `config` is replaced by the one selected in `options`.
    pub fn new(config: EngineConfig, options: UiOptions) -> Result<Self, ConfigurationError> {
        let config = EngineConfig {
            formula: options.fractal_kind.formula(options.custom_constant),
            ..config
        };

        Ok(Self {
            engine: FractalState::new(config)?,
            colour_map: colour_map_factory(options.colour_map),
            options,
        })
    }

    #[must_use]
    pub fn engine(&self) -> &FractalState {
        &self.engine
    }

    #[must_use]
    pub fn options(&self) -> &UiOptions {
        &self.options
    }

    /// Dispatches a command. Returns whether the next frame differs from the last.
    pub fn apply(&mut self, command: ViewCommand) -> Result<bool, ConfigurationError> {
        match command {
            ViewCommand::WheelZoom(direction) => {
                self.wheel_zoom(direction)?;
            }
            ViewCommand::ContinuousZoom => {
                self.continuous_zoom_step()?;
            }
            ViewCommand::Pan { dx, dy } => {
                if dx == 0 && dy == 0 {
                    return Ok(false);
                }
                self.pan(dx, dy);
            }
            ViewCommand::SetIterations(iterations) => {
                return Ok(self.set_iterations(iterations)?.is_some());
            }
            ViewCommand::SetFixedIterations(fixed) => {
                self.set_fixed_iterations(fixed);
                return Ok(false);
            }
            ViewCommand::SelectFormula(kind) => return Ok(self.select_formula(kind)),
            ViewCommand::SetCustomConstant(constant) => {
                return Ok(self.set_custom_constant(constant));
            }
            ViewCommand::CycleColourMap => {
                self.cycle_colour_map();
            }
            ViewCommand::SetColourMap(kind) => self.set_colour_map(kind),
            ViewCommand::SetGamma(gamma) => self.set_gamma(gamma),
            ViewCommand::Reset => self.reset(),
        }

        Ok(true)
    }

    /// One wheel notch about the view centre.
    pub fn wheel_zoom(&mut self, direction: ZoomDirection) -> Result<ZoomUpdate, ConfigurationError> {
        let current = self.engine.max_iter();
        let budget = if self.options.fixed_iterations {
            current
        } else {
            budget_after_zoom(direction, current)
        };

        self.zoom_by(zoom_factor(direction), budget)
    }

    /// One frame of held-button zoom.
    pub fn continuous_zoom_step(&mut self) -> Result<ZoomUpdate, ConfigurationError> {
        let current = self.engine.max_iter();
        let budget = if self.options.fixed_iterations {
            current
        } else {
            budget_after_zoom(ZoomDirection::In, current)
        };

        self.zoom_by(CONTINUOUS_ZOOM_FACTOR, budget)
    }

    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.engine.translate(dx, dy);
    }

    /// Budget change at the current view. Returns `None` while iterations are fixed.
    pub fn set_iterations(&mut self, iterations: u32) -> Result<Option<ZoomUpdate>, ConfigurationError> {
        if self.options.fixed_iterations {
            return Ok(None);
        }

        let budget = UiOptions::clamp_iterations(iterations);
        let update = self.engine.update_zoom(self.engine.bounds(), budget)?;

        debug!("iterations -> {} ({:?})", budget, update);
        Ok(Some(update))
    }

    pub fn set_fixed_iterations(&mut self, fixed: bool) {
        self.options.fixed_iterations = fixed;
    }

    /// Returns whether the engine was rebuilt.
    pub fn select_formula(&mut self, kind: FractalKinds) -> bool {
        if kind == self.options.fractal_kind {
            return false;
        }

        self.options.fractal_kind = kind;
        self.engine.set_formula(kind.formula(self.options.custom_constant));

        debug!("formula -> {}", self.engine.formula());
        true
    }

    /// Stores the clamped constant; rebuilds only while Custom is selected.
    pub fn set_custom_constant(&mut self, constant: Complex) -> bool {
        let constant = UiOptions::clamp_custom_constant(constant);
        self.options.custom_constant = constant;

        if self.options.fractal_kind != FractalKinds::Custom {
            return false;
        }

        self.engine.set_formula(FractalKinds::Custom.formula(constant));
        true
    }

    pub fn cycle_colour_map(&mut self) -> ColourMapKinds {
        self.set_colour_map(self.options.colour_map.next());
        self.options.colour_map
    }

    pub fn set_colour_map(&mut self, kind: ColourMapKinds) {
        self.options.colour_map = kind;
        self.colour_map = colour_map_factory(kind);
    }

    pub fn set_gamma(&mut self, gamma: f64) {
        if gamma.is_nan() {
            return;
        }

        self.options.gamma = UiOptions::clamp_gamma(gamma);
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Colorizes the current escape result.
    pub fn render_frame(&self) -> Result<FrameData, ColorizeError> {
        let start = Instant::now();
        let pixel_buffer = colorize(
            self.engine.result(),
            self.engine.max_iter(),
            &self.colour_map,
            self.options.gamma,
            self.engine.resolution(),
        )?;

        Ok(FrameData {
            pixel_buffer,
            max_iter: self.engine.max_iter(),
            active_pixels: self.engine.active_count(),
            render_duration: start.elapsed(),
        })
    }

    fn zoom_by(&mut self, factor: f64, budget: u32) -> Result<ZoomUpdate, ConfigurationError> {
        let bounds = self.engine.bounds().zoomed(factor);
        let update = self.engine.update_zoom(bounds, budget)?;

        debug!("zoom x{} at {} iterations ({:?})", factor, budget, update);
        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::iterate::backend_kinds::BackendKinds;
    use crate::core::data::bounds::Bounds;
    use crate::core::engine::engine_config::DEFAULT_BOUNDS;
    use crate::core::fractals::formula::Formula;

    fn small_config(max_iter: u32) -> EngineConfig {
        EngineConfig {
            width: 32,
            height: 24,
            max_iter,
            backend: BackendKinds::Serial,
            ..EngineConfig::default()
        }
    }

    fn controller(max_iter: u32) -> ViewController {
        ViewController::new(small_config(max_iter), UiOptions::default()).unwrap()
    }

    fn assert_bounds_close(actual: Bounds, expected: Bounds) {
        assert!(actual.approx_eq(&expected, 1e-12), "{:?} vs {:?}", actual, expected);
    }

    #[test]
    fn test_new_uses_selected_formula() {
        let options = UiOptions {
            fractal_kind: FractalKinds::Custom,
            ..UiOptions::default()
        };
        let view = ViewController::new(small_config(60), options).unwrap();

        assert_eq!(view.engine().formula(), Formula::Custom(options.custom_constant));
    }

    #[test]
    fn test_wheel_zoom_in_shrinks_view_and_adds_iteration() {
        let mut view = controller(100);

        let update = view.wheel_zoom(ZoomDirection::In).unwrap();

        assert_eq!(update, ZoomUpdate::Rebuilt);
        assert_eq!(view.engine().max_iter(), 101);
        assert_bounds_close(view.engine().bounds(), DEFAULT_BOUNDS.zoomed(0.9));
    }

    #[test]
    fn test_wheel_zoom_out_drops_iteration_with_floor() {
        let mut view = controller(51);

        view.wheel_zoom(ZoomDirection::Out).unwrap();
        assert_eq!(view.engine().max_iter(), 50);

        view.wheel_zoom(ZoomDirection::Out).unwrap();
        assert_eq!(view.engine().max_iter(), 50);
        assert_bounds_close(view.engine().bounds(), DEFAULT_BOUNDS.zoomed(1.1).zoomed(1.1));
    }

    #[test]
    fn test_wheel_zoom_in_caps_iterations() {
        let mut view = controller(2000);

        view.wheel_zoom(ZoomDirection::In).unwrap();

        assert_eq!(view.engine().max_iter(), 2000);
    }

    #[test]
    fn test_fixed_iterations_keep_budget_on_zoom() {
        let mut view = controller(100);
        view.set_fixed_iterations(true);

        view.wheel_zoom(ZoomDirection::In).unwrap();
        view.continuous_zoom_step().unwrap();

        assert_eq!(view.engine().max_iter(), 100);
    }

    #[test]
    fn test_continuous_zoom_step() {
        let mut view = controller(100);

        view.continuous_zoom_step().unwrap();

        assert_eq!(view.engine().max_iter(), 101);
        assert_bounds_close(view.engine().bounds(), DEFAULT_BOUNDS.zoomed(0.95));
    }

    #[test]
    fn test_set_iterations_extends_in_place() {
        let mut view = controller(60);

        assert_eq!(view.set_iterations(80).unwrap(), Some(ZoomUpdate::Extended));
        assert_eq!(view.engine().max_iter(), 80);
        assert_eq!(view.engine().bounds(), DEFAULT_BOUNDS);
    }

    #[test]
    fn test_set_iterations_clamps_and_rebuilds_when_lowered() {
        let mut view = controller(100);

        assert_eq!(view.set_iterations(3).unwrap(), Some(ZoomUpdate::Rebuilt));
        assert_eq!(view.engine().max_iter(), 50);
    }

    #[test]
    fn test_set_iterations_ignored_when_fixed() {
        let mut view = controller(100);
        view.set_fixed_iterations(true);

        assert_eq!(view.set_iterations(500).unwrap(), None);
        assert_eq!(view.engine().max_iter(), 100);
    }

    #[test]
    fn test_pan_translates_engine() {
        let mut view = controller(50);

        view.pan(4, -2);

        assert_ne!(view.engine().bounds(), DEFAULT_BOUNDS);
        assert_eq!(view.engine().max_iter(), 50);
    }

    #[test]
    fn test_select_formula_only_rebuilds_on_change() {
        let mut view = controller(50);

        assert!(!view.select_formula(FractalKinds::Mandelbrot));
        assert!(view.select_formula(FractalKinds::Phoenix));
        assert_eq!(view.engine().formula(), Formula::Phoenix);
        assert_eq!(view.options().fractal_kind, FractalKinds::Phoenix);
    }

    #[test]
    fn test_custom_constant_rebuilds_only_for_custom() {
        let mut view = controller(50);

        assert!(!view.set_custom_constant(Complex::new(0.25, 0.5)));
        assert_eq!(view.engine().formula(), Formula::Mandelbrot);

        view.select_formula(FractalKinds::Custom);
        assert_eq!(view.engine().formula(), Formula::Custom(Complex::new(0.25, 0.5)));

        assert!(view.set_custom_constant(Complex::new(5.0, -0.5)));
        assert_eq!(view.engine().formula(), Formula::Custom(Complex::new(2.0, -0.5)));
    }

    #[test]
    fn test_cycle_colour_map_wraps() {
        let mut view = controller(50);

        assert_eq!(view.cycle_colour_map(), ColourMapKinds::Magma);
        assert_eq!(view.cycle_colour_map(), ColourMapKinds::Cividis);
        assert_eq!(view.cycle_colour_map(), ColourMapKinds::Viridis);
        assert_eq!(view.cycle_colour_map(), ColourMapKinds::Plasma);
    }

    #[test]
    fn test_set_gamma_clamps_and_ignores_nan() {
        let mut view = controller(50);

        view.set_gamma(7.0);
        assert_eq!(view.options().gamma, 2.0);

        view.set_gamma(f64::NAN);
        assert_eq!(view.options().gamma, 2.0);

        view.set_gamma(0.01);
        assert_eq!(view.options().gamma, 0.1);
    }

    #[test]
    fn test_reset_restores_initial_view() {
        let mut view = controller(100);

        view.wheel_zoom(ZoomDirection::In).unwrap();
        view.pan(3, 3);
        view.reset();

        assert_eq!(view.engine().bounds(), DEFAULT_BOUNDS);
        assert_eq!(view.engine().max_iter(), 100);
    }

    #[test]
    fn test_apply_dispatches_commands() {
        let mut view = controller(60);

        assert!(view.apply(ViewCommand::WheelZoom(ZoomDirection::In)).unwrap());
        assert_eq!(view.engine().max_iter(), 61);

        assert!(!view.apply(ViewCommand::SetFixedIterations(true)).unwrap());
        assert!(!view.apply(ViewCommand::SetIterations(500)).unwrap());
        assert!(view.options().fixed_iterations);

        assert!(!view.apply(ViewCommand::Pan { dx: 0, dy: 0 }).unwrap());
        assert!(view.apply(ViewCommand::Pan { dx: 1, dy: 0 }).unwrap());

        assert!(view.apply(ViewCommand::SelectFormula(FractalKinds::Julia)).unwrap());
        assert!(!view.apply(ViewCommand::SelectFormula(FractalKinds::Julia)).unwrap());

        assert!(view.apply(ViewCommand::SetColourMap(ColourMapKinds::Cividis)).unwrap());
        assert_eq!(view.options().colour_map, ColourMapKinds::Cividis);

        assert!(view.apply(ViewCommand::Reset).unwrap());
        assert_eq!(view.engine().bounds(), DEFAULT_BOUNDS);
    }

    #[test]
    fn test_render_frame_matches_resolution() {
        let view = controller(50);

        let frame = view.render_frame().unwrap();

        assert_eq!(frame.pixel_buffer.buffer_size(), 32 * 24 * 3);
        assert_eq!(frame.max_iter, 50);
        assert_eq!(frame.active_pixels, view.engine().active_count());
    }

    #[test]
    fn test_render_frame_changes_with_palette() {
        let mut view = controller(50);
        let plasma = view.render_frame().unwrap();

        view.cycle_colour_map();
        let magma = view.render_frame().unwrap();

        assert_ne!(plasma.pixel_buffer, magma.pixel_buffer);
    }
}
