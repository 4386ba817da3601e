//! Pixel buffer transforms used to normalize an image before decoding
//!
//! - Grayscale conversion (BT.601 luma into R, G and B)
//! - Global contrast stretch
//! - Exact quarter-turn rotation
//! - Color inversion
//!
//! Every transform is total and returns a fresh buffer. Large buffers are
//! processed row-parallel with rayon; results are identical either way.

/// Global contrast stretch
pub mod contrast;
/// BT.601 grayscale conversion
pub mod grayscale;
/// Color inversion
pub mod invert;
/// Exact quarter-turn rotation
pub mod rotate;

pub use contrast::{normalize_contrast, red_channel_range};
pub use grayscale::to_grayscale;
pub use invert::invert;
pub use rotate::rotate;

use crate::config::parallel_min_pixels;
use crate::models::PixelBuffer;
use crate::models::pixel_buffer::CHANNELS;
use rayon::prelude::*;

/// Apply `f` to every RGBA pixel, producing a new buffer of the same shape
pub(crate) fn map_pixels<F>(src: &PixelBuffer, f: F) -> PixelBuffer
where
    F: Fn([u8; 4]) -> [u8; 4] + Sync,
{
    let input = src.as_bytes();
    let mut out = vec![0u8; input.len()];
    let row_bytes = src.width() * CHANNELS;

    let map_row = |(dst_row, src_row): (&mut [u8], &[u8])| {
        for (d, s) in dst_row
            .chunks_exact_mut(CHANNELS)
            .zip(src_row.chunks_exact(CHANNELS))
        {
            d.copy_from_slice(&f([s[0], s[1], s[2], s[3]]));
        }
    };

    if src.pixel_count() >= parallel_min_pixels() {
        out.par_chunks_mut(row_bytes)
            .zip(input.par_chunks(row_bytes))
            .for_each(map_row);
    } else {
        out.chunks_mut(row_bytes)
            .zip(input.chunks(row_bytes))
            .for_each(map_row);
    }

    PixelBuffer::from_parts(src.width(), src.height(), out)
}
