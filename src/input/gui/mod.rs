//! Windowed explorer: winit for the window and input, pixels for the
//! framebuffer and egui for the control panel.

mod app;
pub mod commands;
mod drag;
mod panel;
pub mod ports;
