use std::time::Duration;
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug)]
pub struct FrameData {
    pub pixel_buffer: PixelBuffer,
    pub max_iter: u32,
    pub active_pixels: usize,
    pub render_duration: Duration,
}
