use super::SymbolDecoder;
use crate::error::DecoderFault;
use crate::models::pixel_buffer::CHANNELS;
use crate::models::{PixelBuffer, Symbol};
use log::debug;

/// Format name reported for QR symbols
pub const QR_FORMAT_NAME: &str = "QR-Code";

/// QR code decoder using rqrr on the red channel
///
/// Intended for buffers that already went through grayscale conversion,
/// where R = G = B.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrDecoder;

impl QrDecoder {
    /// Create a new QR decoder
    pub fn new() -> Self {
        Self
    }
}

impl SymbolDecoder for QrDecoder {
    fn decode(&self, buffer: &PixelBuffer) -> Result<Vec<Symbol>, DecoderFault> {
        let (w, h) = (buffer.width(), buffer.height());
        let data = buffer.as_bytes();
        let mut img =
            rqrr::PreparedImage::prepare_from_greyscale(w, h, |x, y| data[(y * w + x) * CHANNELS]);
        let grids = img.detect_grids();
        debug!("rqrr: {} candidate grids in {}x{}", grids.len(), w, h);

        let mut symbols = Vec::new();
        for (i, grid) in grids.iter().enumerate() {
            match grid.decode() {
                Ok((_meta, content)) => symbols.push(Symbol::new(content, QR_FORMAT_NAME)),
                Err(e) => debug!("rqrr: grid {} failed to decode: {:?}", i, e),
            }
        }
        Ok(symbols)
    }
}
