//! Environment-driven tuning knobs, each parsed once per process

use log::LevelFilter;
use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

static PARALLEL_MIN_PIXELS: OnceLock<usize> = OnceLock::new();

/// Pixel count at which transforms switch from a scalar loop to rayon rows.
///
/// `BARSCAN_PARALLEL_MIN_PIXELS`, default 512x512.
pub fn parallel_min_pixels() -> usize {
    *PARALLEL_MIN_PIXELS.get_or_init(|| parse_env_usize("BARSCAN_PARALLEL_MIN_PIXELS", 512 * 512))
}

static MAX_DIM: OnceLock<Option<u32>> = OnceLock::new();

/// Longest side images are downscaled to at load time.
///
/// `BARSCAN_MAX_DIM`; unset, unparsable or `0` disables downscaling.
pub fn max_dim() -> Option<u32> {
    *MAX_DIM.get_or_init(|| match std::env::var("BARSCAN_MAX_DIM") {
        Ok(value) => match value.trim().parse::<u32>() {
            Ok(0) => None,
            Ok(v) => Some(v),
            Err(_) => None,
        },
        Err(_) => None,
    })
}

/// Log level for the CLI from `BARSCAN_LOG` (`off`, `error`, ..., `trace`).
pub fn log_level() -> LevelFilter {
    std::env::var("BARSCAN_LOG")
        .ok()
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn)
}
