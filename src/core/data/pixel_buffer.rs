use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn resolution_to_buffer_size(resolution: Resolution) -> usize {
    resolution.size() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected {} bytes of RGB data, got {}",
                    expected_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Packed 8-bit RGB raster, row-major, no padding.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    resolution: Resolution,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            buffer: vec![0; resolution_to_buffer_size(resolution)],
        }
    }

    pub fn from_data(
        resolution: Resolution,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected_size = resolution_to_buffer_size(resolution);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { resolution, buffer })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Expands into an RGBA frame of the same resolution with opaque alpha.
    pub fn write_rgba(&self, dst: &mut [u8]) -> Result<(), PixelBufferError> {
        let expected_size = self.resolution.size() * 4;

        if dst.len() != expected_size {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: dst.len(),
            });
        }

        for (src_pixel, dst_pixel) in self
            .buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(dst.chunks_exact_mut(4))
        {
            dst_pixel[..3].copy_from_slice(src_pixel);
            dst_pixel[3] = 255;
        }

        Ok(())
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolution(width: u32, height: u32) -> Resolution {
        Resolution::new(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(resolution(10, 10));

        assert_eq!(buffer.resolution(), resolution(10, 10));
        assert_eq!(buffer.buffer_size(), 300);
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, // (0,0) red
            0, 255, 0, // (0,1) green
            0, 0, 255, // (1,0) blue
            255, 255, 0, // (1,1) yellow
        ];

        let buffer = PixelBuffer::from_data(resolution(2, 2), data.clone()).unwrap();

        assert_eq!(buffer.buffer(), &data);
        assert_eq!(&buffer.buffer()[6..9], &[0, 0, 255]);
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let result = PixelBuffer::from_data(resolution(2, 2), vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                expected_size: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_from_data_buffer_too_large() {
        let result = PixelBuffer::from_data(resolution(2, 2), vec![0; 24]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                expected_size: 12,
                buffer_size: 24
            }
        );
    }

    #[test]
    fn test_write_rgba_sets_opaque_alpha() {
        let buffer =
            PixelBuffer::from_data(resolution(2, 1), vec![10, 20, 30, 40, 50, 60]).unwrap();
        let mut rgba = vec![0; 8];

        buffer.write_rgba(&mut rgba).unwrap();

        assert_eq!(rgba, vec![10, 20, 30, 255, 40, 50, 60, 255]);
    }

    #[test]
    fn test_write_rgba_rejects_wrong_frame_size() {
        let buffer = PixelBuffer::new(resolution(2, 2));
        let mut rgba = vec![0; 12];

        assert_eq!(
            buffer.write_rgba(&mut rgba),
            Err(PixelBufferError::BoundsMismatch {
                expected_size: 16,
                buffer_size: 12
            })
        );
    }

    #[test]
    fn test_error_display() {
        let err = PixelBufferError::BoundsMismatch {
            expected_size: 12,
            buffer_size: 3,
        };

        assert_eq!(err.to_string(), "expected 12 bytes of RGB data, got 3");
    }
}
