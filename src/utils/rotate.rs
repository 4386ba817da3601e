//! Exact quarter-turn rotation (pure index permutation, no resampling)
//!
//! For a source pixel at (x, y) in a `w x h` image:
//! - 90° clockwise lands at `(h - 1 - y, x)` in an `h x w` image
//! - 180° lands at `(w - 1 - x, h - 1 - y)`
//! - 270° clockwise lands at `(y, w - 1 - x)` in an `h x w` image
//!
//! The implementation walks destination rows and gathers from the source so
//! that rows can be filled in parallel.

use crate::config::parallel_min_pixels;
use crate::models::pixel_buffer::CHANNELS;
use crate::models::{Orientation, PixelBuffer};
use rayon::prelude::*;

/// Rotate clockwise by `orientation`. `Deg0` returns a fresh copy.
pub fn rotate(src: &PixelBuffer, orientation: Orientation) -> PixelBuffer {
    let (w, h) = (src.width(), src.height());
    let (dst_w, dst_h) = if orientation.swaps_dimensions() {
        (h, w)
    } else {
        (w, h)
    };

    if orientation == Orientation::Deg0 {
        return src.clone();
    }

    // Maps a destination coordinate back to its source coordinate
    let source_of = move |nx: usize, ny: usize| -> (usize, usize) {
        match orientation {
            Orientation::Deg0 => (nx, ny),
            Orientation::Deg90 => (ny, h - 1 - nx),
            Orientation::Deg180 => (w - 1 - nx, h - 1 - ny),
            Orientation::Deg270 => (w - 1 - ny, nx),
        }
    };

    let input = src.as_bytes();
    let mut out = vec![0u8; input.len()];
    let row_bytes = dst_w * CHANNELS;

    let fill_row = |(ny, row): (usize, &mut [u8])| {
        for (nx, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let (x, y) = source_of(nx, ny);
            let si = (y * w + x) * CHANNELS;
            px.copy_from_slice(&input[si..si + CHANNELS]);
        }
    };

    if src.pixel_count() >= parallel_min_pixels() {
        out.par_chunks_mut(row_bytes).enumerate().for_each(fill_row);
    } else {
        out.chunks_mut(row_bytes).enumerate().for_each(fill_row);
    }

    PixelBuffer::from_parts(dst_w, dst_h, out)
}
