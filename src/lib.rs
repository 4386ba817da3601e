//! RustBarscan - orientation-agnostic barcode scanning
//!
//! Takes an arbitrary photo or screenshot as an RGBA buffer, normalizes it
//! (grayscale, global contrast stretch) and retries a symbol decoder across
//! every quarter-turn rotation, each plain and inverted, until one decodes.
//!
//! The decoder is pluggable through [`SymbolDecoder`]; [`QrDecoder`] is
//! provided for QR codes.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven tuning knobs
pub mod config;
/// Symbol decoder trait and the rqrr-backed QR decoder
pub mod decoder;
/// Error types
pub mod error;
/// stderr backend for the `log` facade
pub mod logger;
/// Core data structures (PixelBuffer, Orientation, ScanOutcome, etc.)
pub mod models;
/// Orientation/inversion search
pub mod search;
/// Generation-stamped scan session
pub mod session;
/// Image loading and dataset helpers
pub mod tools;
/// Pixel transforms (grayscale, contrast, rotation, inversion)
pub mod utils;

pub use decoder::{QrDecoder, SymbolDecoder};
pub use error::{BufferError, DecoderFault, LoadError, ScanError};
pub use models::{Orientation, PixelBuffer, ScanOutcome, ScanResult, Symbol};
pub use search::{SCAN_ATTEMPTS, Scanner, scan_barcode, scan_barcode_traced};
pub use session::{Completion, PendingScan, ScanHandler, ScanSession, ScanTicket, SessionState};

/// Scan raw RGBA bytes for a QR code in any orientation
///
/// # Arguments
/// * `rgba` - Raw RGBA bytes (4 bytes per pixel)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Example
/// ```
/// let blank = vec![255u8; 32 * 32 * 4];
/// let outcome = rust_barscan::scan_qr(&blank, 32, 32).unwrap();
/// assert!(!outcome.is_found());
/// ```
pub fn scan_qr(rgba: &[u8], width: usize, height: usize) -> Result<ScanOutcome, ScanError> {
    let buffer = PixelBuffer::new(width, height, rgba.to_vec())?;
    Ok(scan_barcode(&buffer, &QrDecoder::new())?)
}
