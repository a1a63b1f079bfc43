use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes binary PPM (P6), creating missing parent directories.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(std::fs::File::create(filepath)?);
        write_ppm(&mut file, buffer)?;
        file.flush()
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

/// P6 header (magic, width height, max colour) followed by the raw RGB bytes.
pub fn write_ppm(out: &mut impl Write, buffer: &PixelBuffer) -> std::io::Result<()> {
    let resolution = buffer.resolution();

    writeln!(out, "P6")?;
    writeln!(out, "{} {}", resolution.width(), resolution.height())?;
    writeln!(out, "255")?;
    out.write_all(buffer.buffer())
}
