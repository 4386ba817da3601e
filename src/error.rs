//! Error types for buffer construction, decoding and image loading

use thiserror::Error;

/// Errors raised when a pixel buffer would violate its shape invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Width or height was zero
    #[error("buffer dimensions must be positive, got {width}x{height}")]
    ZeroDimension {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// Byte length does not equal `width * height * 4`
    #[error("expected {expected} bytes of RGBA data, got {actual}")]
    LengthMismatch {
        /// `width * height * 4`
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// `width * height * 4` does not fit in memory addressing, or a side
    /// does not fit the `image` crate's `u32` dimensions
    #[error("buffer dimensions {width}x{height} are too large")]
    TooLarge {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// Rotation angle outside {0, 90, 180, 270}
    #[error("unsupported orientation: {0} degrees")]
    InvalidOrientation(u16),
}

/// Failure reported by a symbol decoder
///
/// This is distinct from "no symbol present", which decoders report as an
/// empty symbol list. A fault aborts the orientation search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecoderFault {
    /// The decoder rejected the buffer it was handed
    #[error("decoder rejected buffer: {0}")]
    InvalidBuffer(String),

    /// The decoder failed internally
    #[error("decoder failure: {0}")]
    Internal(String),
}

/// Errors raised while turning an image file into a pixel buffer
#[derive(Debug, Error)]
pub enum LoadError {
    /// Image could not be opened or decoded
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Decoded image did not form a valid buffer (e.g. zero-sized)
    #[error("buffer error: {0}")]
    Buffer(#[from] BufferError),
}

/// Failure of the raw-bytes convenience entry points
#[derive(Debug, Error)]
pub enum ScanError {
    /// Input bytes did not form a valid buffer
    #[error(transparent)]
    Buffer(#[from] BufferError),

    /// The decoder failed
    #[error(transparent)]
    Decoder(#[from] DecoderFault),
}
