//! Image acquisition and dataset helpers shared by the CLI, tests and benches

use crate::config::max_dim;
use crate::error::LoadError;
use crate::models::PixelBuffer;
use image::GenericImageView;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Load an image file as an RGBA pixel buffer.
///
/// Downscales so the longest side fits `BARSCAN_MAX_DIM` when that is set.
pub fn load_pixel_buffer<P: AsRef<Path>>(path: P) -> Result<PixelBuffer, LoadError> {
    let path = path.as_ref();
    let img = image::open(path)?;
    let rgba = match max_dim() {
        Some(max_dim) if img.width().max(img.height()) > max_dim => {
            let (orig_w, orig_h) = img.dimensions();
            let resized = img.resize(max_dim, max_dim, image::imageops::FilterType::Triangle);
            debug!(
                "load: {} downscaled {}x{} -> {}x{}",
                path.display(),
                orig_w,
                orig_h,
                resized.width(),
                resized.height()
            );
            resized.to_rgba8()
        }
        _ => img.to_rgba8(),
    };
    Ok(PixelBuffer::from_rgba_image(rgba)?)
}

/// Write a pixel buffer to disk; the format follows the file extension
pub fn save_pixel_buffer<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> Result<(), LoadError> {
    buffer.to_rgba_image()?.save(path)?;
    Ok(())
}

/// Default batch limit from `BARSCAN_BATCH_LIMIT`; unset or `0` means no limit
pub fn batch_limit_from_env() -> Option<usize> {
    std::env::var("BARSCAN_BATCH_LIMIT")
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .and_then(|v| if v == 0 { None } else { Some(v) })
}

/// Sorted image paths under `root`, optionally truncated to `limit`
pub fn dataset_iter<P: AsRef<Path>>(root: P, limit: Option<usize>) -> impl Iterator<Item = PathBuf> {
    let mut images = collect_images(root.as_ref());
    images.sort();
    if let Some(limit) = limit {
        images.truncate(limit);
    }
    images.into_iter()
}

/// Recursively collect png/jpg/jpeg/gif/bmp files; unreadable directories are skipped
pub fn collect_images(root: &Path) -> Vec<PathBuf> {
    let mut stack = vec![root.to_path_buf()];
    let mut images = Vec::new();

    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
                continue;
            }
            if let Some(ext) = path.extension() {
                let ext = ext.to_string_lossy().to_lowercase();
                if ext == "png" || ext == "jpg" || ext == "jpeg" || ext == "gif" || ext == "bmp" {
                    images.push(path);
                }
            }
        }
    }

    images
}
