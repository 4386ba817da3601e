//! Convert an RGBA buffer to gray, keeping four channels
//! Y = round(0.299*R + 0.587*G + 0.114*B), written to R, G and B; alpha untouched

use super::map_pixels;
use crate::models::PixelBuffer;

const COEF_R: f64 = 0.299;
const COEF_G: f64 = 0.587;
const COEF_B: f64 = 0.114;

/// Luma of a single RGB triple
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = COEF_R * r as f64 + COEF_G * g as f64 + COEF_B * b as f64;
    y.round().clamp(0.0, 255.0) as u8
}

/// Replace R, G and B of every pixel with its luma
pub fn to_grayscale(src: &PixelBuffer) -> PixelBuffer {
    map_pixels(src, |[r, g, b, a]| {
        let y = luma(r, g, b);
        [y, y, y, a]
    })
}
