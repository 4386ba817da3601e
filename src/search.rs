//! Orientation/inversion search
//!
//! Normalizes the image once, then walks the fixed attempt order below and
//! stops at the first attempt that yields a symbol:
//!
//! `0°`, `0° inverted`, `90°`, `90° inverted`, `180°`, `180° inverted`,
//! `270°`, `270° inverted`
//!
//! A decoder fault aborts the walk and is returned as-is.

use crate::decoder::SymbolDecoder;
use crate::error::DecoderFault;
use crate::models::{Orientation, PixelBuffer, ScanOutcome, ScanResult};
use crate::utils::{invert, normalize_contrast, rotate, to_grayscale};
use log::{debug, info};
use std::time::SystemTime;

/// Every (orientation, inverted) pair in the order it is tried
pub const SCAN_ATTEMPTS: [(Orientation, bool); 8] = [
    (Orientation::Deg0, false),
    (Orientation::Deg0, true),
    (Orientation::Deg90, false),
    (Orientation::Deg90, true),
    (Orientation::Deg180, false),
    (Orientation::Deg180, true),
    (Orientation::Deg270, false),
    (Orientation::Deg270, true),
];

/// One decoder call made during a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    /// Rotation applied
    pub orientation: Orientation,
    /// Whether the buffer was inverted
    pub inverted: bool,
    /// Number of symbols the decoder returned
    pub symbols: usize,
}

/// Search outcome plus the attempts that led to it
#[derive(Debug, Clone)]
pub struct SearchTrace {
    /// Final outcome
    pub outcome: ScanOutcome,
    /// Attempts in execution order
    pub attempts: Vec<Attempt>,
}

/// Grayscale then contrast-stretch; orientation independent, done once
pub fn normalize(raw: &PixelBuffer) -> PixelBuffer {
    normalize_contrast(&to_grayscale(raw))
}

/// Locate and decode a symbol in any quarter-turn orientation, light or dark
pub fn scan_barcode<D>(raw: &PixelBuffer, decoder: &D) -> Result<ScanOutcome, DecoderFault>
where
    D: SymbolDecoder + ?Sized,
{
    run(raw, decoder, None)
}

/// Like [`scan_barcode`] but also records every attempt
pub fn scan_barcode_traced<D>(raw: &PixelBuffer, decoder: &D) -> Result<SearchTrace, DecoderFault>
where
    D: SymbolDecoder + ?Sized,
{
    let mut attempts = Vec::with_capacity(SCAN_ATTEMPTS.len());
    let outcome = run(raw, decoder, Some(&mut attempts))?;
    Ok(SearchTrace { outcome, attempts })
}

fn run<D>(
    raw: &PixelBuffer,
    decoder: &D,
    mut trace: Option<&mut Vec<Attempt>>,
) -> Result<ScanOutcome, DecoderFault>
where
    D: SymbolDecoder + ?Sized,
{
    let normalized = normalize(raw);

    for orientation in Orientation::ALL {
        let rotated = rotate(&normalized, orientation);

        if let Some(result) = attempt(&rotated, orientation, false, decoder, trace.as_deref_mut())? {
            return Ok(ScanOutcome::Decoded(result));
        }

        let inverted = invert(&rotated);
        if let Some(result) = attempt(&inverted, orientation, true, decoder, trace.as_deref_mut())? {
            return Ok(ScanOutcome::Decoded(result));
        }
    }

    debug!(
        "search: no symbol in {}x{} after {} attempts",
        raw.width(),
        raw.height(),
        SCAN_ATTEMPTS.len()
    );
    Ok(ScanOutcome::NotFound)
}

fn attempt<D>(
    buffer: &PixelBuffer,
    orientation: Orientation,
    inverted: bool,
    decoder: &D,
    trace: Option<&mut Vec<Attempt>>,
) -> Result<Option<ScanResult>, DecoderFault>
where
    D: SymbolDecoder + ?Sized,
{
    let symbols = decoder.decode(buffer)?;
    debug!(
        "search: {} inverted={} -> {} symbols",
        orientation,
        inverted,
        symbols.len()
    );
    if let Some(trace) = trace {
        trace.push(Attempt {
            orientation,
            inverted,
            symbols: symbols.len(),
        });
    }

    let Some(first) = symbols.into_iter().next() else {
        return Ok(None);
    };
    info!(
        "search: decoded {} at {} (inverted={})",
        first.format_name, orientation, inverted
    );
    Ok(Some(ScanResult {
        value: first.content,
        format: first.format_name,
        orientation,
        was_inverted: inverted,
        scanned_at: SystemTime::now(),
    }))
}

/// A decoder bundled with the search, for callers that scan repeatedly
#[derive(Debug, Clone, Default)]
pub struct Scanner<D> {
    decoder: D,
}

impl<D: SymbolDecoder> Scanner<D> {
    /// Wrap a decoder
    pub fn new(decoder: D) -> Self {
        Self { decoder }
    }

    /// Borrow the decoder
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Run the search on a raw buffer
    pub fn scan(&self, raw: &PixelBuffer) -> Result<ScanOutcome, DecoderFault> {
        scan_barcode(raw, &self.decoder)
    }

    /// Run the search and keep the attempt log
    pub fn scan_traced(&self, raw: &PixelBuffer) -> Result<SearchTrace, DecoderFault> {
        scan_barcode_traced(raw, &self.decoder)
    }
}
