use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

fn expected_byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 3
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    BoundsMismatch {
        expected_bytes: usize,
        actual_bytes: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_bytes,
                actual_bytes,
            } => {
                write!(
                    f,
                    "buffer of {} bytes does not match the expected {}",
                    actual_bytes, expected_bytes
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// A width×height RGB byte buffer, 3 bytes per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(
        width: u32,
        height: u32,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected = expected_byte_len(width, height);

        if buffer.len() != expected {
            return Err(PixelBufferError::BoundsMismatch {
                expected_bytes: expected,
                actual_bytes: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
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
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn colour_at(&self, px: u32, py: u32) -> Option<Colour> {
        if px >= self.width || py >= self.height {
            return None;
        }

        let index = (py as usize * self.width as usize + px as usize) * 3;
        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, // (0,0) red
            0, 255, 0, // (1,0) green
            0, 0, 255, // (0,1) blue
            255, 255, 0, // (1,1) yellow
        ];

        let buffer = PixelBuffer::from_data(2, 2, data.clone()).unwrap();

        assert_eq!(buffer.width(), 2);
        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.buffer(), &data);
    }

    #[test]
    fn test_from_data_rejects_size_mismatch() {
        let too_small = PixelBuffer::from_data(2, 2, vec![255, 0, 0]);
        let too_large = PixelBuffer::from_data(2, 2, vec![0; 24]);

        assert_eq!(
            too_small,
            Err(PixelBufferError::BoundsMismatch {
                expected_bytes: 12,
                actual_bytes: 3
            })
        );
        assert_eq!(
            too_large,
            Err(PixelBufferError::BoundsMismatch {
                expected_bytes: 12,
                actual_bytes: 24
            })
        );
    }

    #[test]
    fn test_colour_at_is_row_major() {
        let data: Vec<u8> = vec![
            1, 2, 3, //
            4, 5, 6, //
            7, 8, 9, //
            10, 11, 12,
        ];
        let buffer = PixelBuffer::from_data(2, 2, data).unwrap();

        assert_eq!(buffer.colour_at(0, 0), Some(Colour { r: 1, g: 2, b: 3 }));
        assert_eq!(buffer.colour_at(1, 0), Some(Colour { r: 4, g: 5, b: 6 }));
        assert_eq!(buffer.colour_at(0, 1), Some(Colour { r: 7, g: 8, b: 9 }));
        assert_eq!(
            buffer.colour_at(1, 1),
            Some(Colour {
                r: 10,
                g: 11,
                b: 12
            })
        );
    }

    #[test]
    fn test_colour_at_outside_grid_is_none() {
        let buffer = PixelBuffer::from_data(2, 2, vec![0; 12]).unwrap();

        assert_eq!(buffer.colour_at(2, 0), None);
        assert_eq!(buffer.colour_at(0, 2), None);
    }
}
