use egui::Context as EguiContext;

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::core::data::pixel_buffer::PixelBufferError;

pub trait GuiPresenterPort {
    /// Replaces the framebuffer contents with a colorized frame.
    fn show_frame(&mut self, frame: &FrameData) -> Result<(), PixelBufferError>;
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
