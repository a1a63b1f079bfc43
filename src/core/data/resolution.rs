use crate::core::errors::configuration::ConfigurationError;

/// Raster size in pixels; both sides are at least one pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigurationError> {
        if width == 0 || height == 0 {
            return Err(ConfigurationError::InvalidResolution { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of `(row, col)`.
    #[must_use]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width as usize + col
    }
}
