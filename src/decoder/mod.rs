//! Symbol decoder seam
//!
//! The search is generic over anything that turns a normalized buffer into a
//! list of symbols. An empty list means "nothing here"; `Err` means the
//! decoder itself failed and the search must stop.

/// QR decoding backed by rqrr
pub mod qr;

pub use qr::QrDecoder;

use crate::error::DecoderFault;
use crate::models::{PixelBuffer, Symbol};

/// Something that can find barcode symbols in a pixel buffer
pub trait SymbolDecoder: Send + Sync {
    /// Decode every symbol present, in the decoder's own order
    fn decode(&self, buffer: &PixelBuffer) -> Result<Vec<Symbol>, DecoderFault>;
}

impl<F> SymbolDecoder for F
where
    F: Fn(&PixelBuffer) -> Result<Vec<Symbol>, DecoderFault> + Send + Sync,
{
    fn decode(&self, buffer: &PixelBuffer) -> Result<Vec<Symbol>, DecoderFault> {
        self(buffer)
    }
}
