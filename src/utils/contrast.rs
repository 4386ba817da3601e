//! Global linear contrast stretch.
//!
//! The range is measured on the red channel only (input is expected to be gray
//! already), then the same remap is applied to R, G and B.

use super::map_pixels;
use crate::models::PixelBuffer;
use crate::models::pixel_buffer::CHANNELS;

/// Minimum and maximum of the red channel
pub fn red_channel_range(src: &PixelBuffer) -> (u8, u8) {
    src.as_bytes()
        .chunks_exact(CHANNELS)
        .fold((u8::MAX, u8::MIN), |(lo, hi), px| (lo.min(px[0]), hi.max(px[0])))
}

/// Stretch values so the red channel spans 0..=255.
///
/// A uniform image comes back as an unmodified copy.
pub fn normalize_contrast(src: &PixelBuffer) -> PixelBuffer {
    let (min, max) = red_channel_range(src);
    if max == min {
        return src.clone();
    }

    let range = (max - min) as f64;
    let remap = |v: u8| -> u8 {
        let stretched = (v as f64 - min as f64) * 255.0 / range;
        stretched.round().clamp(0.0, 255.0) as u8
    };

    map_pixels(src, |[r, g, b, a]| [remap(r), remap(g), remap(b), a])
}
