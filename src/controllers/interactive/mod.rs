//! Interactive view control.
//!
//! Maps discrete user input (wheel, drag, sliders, buttons) onto engine
//! operations and turns the current escape result into frames.

pub mod data;
mod view_controller;

pub use data::view_command::{ViewCommand, ZoomDirection};
pub use view_controller::ViewController;
