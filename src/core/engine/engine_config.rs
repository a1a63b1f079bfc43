use crate::core::actions::iterate::backend_kinds::BackendKinds;
use crate::core::data::bounds::Bounds;
use crate::core::fractals::formula::Formula;

pub const DEFAULT_WIDTH: u32 = 1100;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_BOUNDS: Bounds = Bounds::new(-2.5, 1.5, -1.2, 1.2);

/// Everything an engine needs at construction. The bounds and budget given
/// here are also what `reset` returns to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    pub bounds: Bounds,
    pub max_iter: u32,
    pub formula: Formula,
    pub backend: BackendKinds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            bounds: DEFAULT_BOUNDS,
            max_iter: DEFAULT_MAX_ITERATIONS,
            formula: Formula::default(),
            backend: BackendKinds::default(),
        }
    }
}
