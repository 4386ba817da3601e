//! Color inversion for light-on-dark symbols

use super::map_pixels;
use crate::models::PixelBuffer;

/// Invert R, G and B (`255 - v`), keeping alpha.
///
/// Lets a decoder tuned for dark-on-light symbols read light-on-dark ones.
pub fn invert(src: &PixelBuffer) -> PixelBuffer {
    map_pixels(src, |[r, g, b, a]| [255 - r, 255 - g, 255 - b, a])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_support::gradient;

    #[test]
    fn test_invert_values() {
        let src = PixelBuffer::new(1, 1, vec![0, 100, 255, 42]).unwrap();
        assert_eq!(invert(&src).pixel(0, 0), Some([255, 155, 0, 42]));
    }

    #[test]
    fn test_invert_is_involution() {
        let src = gradient(6, 11);
        assert_eq!(invert(&invert(&src)), src);
    }
}
