use crate::error::BufferError;
use image::RgbaImage;

/// Bytes per pixel (red, green, blue, alpha)
pub const CHANNELS: usize = 4;

/// Immutable RGBA pixel grid, row-major, 8 bits per channel
///
/// The data length always equals `width * height * 4`. Transforms never
/// mutate a buffer in place; they build a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes, validating dimensions and length
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, BufferError> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer where every pixel has the same RGBA value
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Result<Self, BufferError> {
        let pixels = byte_len(width, height)? / CHANNELS;
        Self::new(width, height, rgba.repeat(pixels))
    }

    /// Build a buffer from shape-checked parts produced inside the crate
    pub(crate) fn from_parts(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height * CHANNELS);
        Self {
            width,
            height,
            data,
        }
    }

    /// Convert from an `image` crate RGBA image
    pub fn from_rgba_image(img: RgbaImage) -> Result<Self, BufferError> {
        let (width, height) = (img.width() as usize, img.height() as usize);
        Self::new(width, height, img.into_raw())
    }

    /// Copy into an `image` crate RGBA image (for previews and saving)
    ///
    /// Fails with [`BufferError::TooLarge`] when a side exceeds `u32::MAX`.
    pub fn to_rgba_image(&self) -> Result<RgbaImage, BufferError> {
        let (w, h) = image_dims(self.width, self.height)?;
        // Length invariant holds, so from_raw cannot reject the data
        RgbaImage::from_raw(w, h, self.data.clone()).ok_or(BufferError::LengthMismatch {
            expected: self.data.len(),
            actual: self.data.len(),
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels (`width * height`)
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Raw interleaved RGBA bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the raw bytes
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// RGBA value at (x, y), or `None` when out of bounds
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * CHANNELS;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }
}

/// Byte length of a `width x height` RGBA buffer, checked for zero and overflow
fn byte_len(width: usize, height: usize) -> Result<usize, BufferError> {
    if width == 0 || height == 0 {
        return Err(BufferError::ZeroDimension { width, height });
    }
    width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(CHANNELS))
        .ok_or(BufferError::TooLarge { width, height })
}

fn image_dims(width: usize, height: usize) -> Result<(u32, u32), BufferError> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(BufferError::TooLarge { width, height }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_length() {
        let err = PixelBuffer::new(2, 2, vec![0; 15]).unwrap_err();
        assert_eq!(
            err,
            BufferError::LengthMismatch {
                expected: 16,
                actual: 15
            }
        );
        assert!(PixelBuffer::new(2, 2, vec![0; 16]).is_ok());
    }

    #[test]
    fn test_new_rejects_overflowing_dimensions() {
        let too_large = BufferError::TooLarge {
            width: usize::MAX / 2,
            height: 3,
        };
        assert_eq!(
            PixelBuffer::new(usize::MAX / 2, 3, Vec::new()).unwrap_err(),
            too_large
        );
        assert_eq!(
            PixelBuffer::filled(usize::MAX / 2, 3, [0, 0, 0, 255]).unwrap_err(),
            too_large
        );
        // Pixel count fits, byte count does not
        let side = usize::MAX / 4 + 1;
        assert!(matches!(
            PixelBuffer::new(side, 1, Vec::new()),
            Err(BufferError::TooLarge { .. })
        ));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_image_dims_reject_sides_beyond_u32() {
        assert_eq!(image_dims(640, 480), Ok((640, 480)));
        let wide = u32::MAX as usize + 1;
        assert_eq!(
            image_dims(wide, 1),
            Err(BufferError::TooLarge { width: wide, height: 1 })
        );
    }

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert!(matches!(
            PixelBuffer::new(0, 3, Vec::new()),
            Err(BufferError::ZeroDimension { width: 0, height: 3 })
        ));
    }

    #[test]
    fn test_pixel_access() {
        let buf = PixelBuffer::new(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(buf.pixel(0, 0), Some([1, 2, 3, 4]));
        assert_eq!(buf.pixel(1, 0), Some([5, 6, 7, 8]));
        assert_eq!(buf.pixel(2, 0), None);
        assert_eq!(buf.pixel(0, 1), None);
    }

    #[test]
    fn test_image_round_trip() {
        let buf = PixelBuffer::filled(3, 2, [10, 20, 30, 255]).unwrap();
        let img = buf.to_rgba_image().unwrap();
        assert_eq!(img.dimensions(), (3, 2));
        let back = PixelBuffer::from_rgba_image(img).unwrap();
        assert_eq!(back, buf);
    }
}
