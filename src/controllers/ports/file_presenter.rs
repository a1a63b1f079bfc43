use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes a finished raster somewhere addressed by a filesystem path.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, path: impl AsRef<Path>) -> std::io::Result<()>;
}
