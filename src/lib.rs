pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

pub use crate::controllers::cli::still_render::StillRenderController;
pub use crate::controllers::interactive::data::ui_options::UiOptions;
pub use crate::controllers::interactive::{ViewCommand, ViewController, ZoomDirection};
pub use crate::core::actions::iterate::backend_kinds::BackendKinds;
pub use crate::core::colour_mapping::kinds::ColourMapKinds;
pub use crate::core::data::bounds::Bounds;
pub use crate::core::data::complex::Complex;
pub use crate::core::engine::engine_config::EngineConfig;
pub use crate::core::engine::fractal_state::{FractalState, ZoomUpdate};
pub use crate::core::errors::configuration::ConfigurationError;
pub use crate::core::fractals::formula::Formula;
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
