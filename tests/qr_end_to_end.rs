//! Real QR symbols, encoded with `qrcode` and decoded through the full search.

use qrcode::{Color, QrCode};
use rust_barscan::utils::{invert, rotate};
use rust_barscan::{Orientation, PixelBuffer, QrDecoder, ScanOutcome, scan_barcode, scan_qr};

const MODULE_PX: usize = 6;
const QUIET_ZONE: usize = 4;

/// Render `payload` as a low-contrast RGBA image (dark 70, light 180, tinted)
fn render(payload: &str) -> PixelBuffer {
    let code = QrCode::new(payload.as_bytes()).unwrap();
    let modules = code.width();
    let colors = code.to_colors();
    let side = (modules + 2 * QUIET_ZONE) * MODULE_PX;

    let mut data = Vec::with_capacity(side * side * 4);
    for y in 0..side {
        for x in 0..side {
            let mx = (x / MODULE_PX).checked_sub(QUIET_ZONE);
            let my = (y / MODULE_PX).checked_sub(QUIET_ZONE);
            let dark = match (mx, my) {
                (Some(mx), Some(my)) if mx < modules && my < modules => {
                    colors[my * modules + mx] == Color::Dark
                }
                _ => false,
            };
            let v: u8 = if dark { 70 } else { 180 };
            data.extend_from_slice(&[v, v.saturating_sub(10), v, 255]);
        }
    }
    PixelBuffer::new(side, side, data).unwrap()
}

fn decoded_value(buffer: &PixelBuffer) -> Option<String> {
    match scan_barcode(buffer, &QrDecoder::new()).unwrap() {
        ScanOutcome::Decoded(result) => {
            assert_eq!(result.format, "QR-Code");
            Some(result.value)
        }
        ScanOutcome::NotFound => None,
    }
}

#[test]
fn upright_low_contrast_symbol_decodes() {
    let buffer = render("https://example.com/item/42");
    assert_eq!(
        decoded_value(&buffer).as_deref(),
        Some("https://example.com/item/42")
    );
}

#[test]
fn rotated_symbols_decode() {
    let buffer = render("ROTATE-ME");
    for orientation in [Orientation::Deg90, Orientation::Deg180, Orientation::Deg270] {
        let turned = rotate(&buffer, orientation);
        assert_eq!(
            decoded_value(&turned).as_deref(),
            Some("ROTATE-ME"),
            "failed at {orientation}"
        );
    }
}

#[test]
fn light_on_dark_symbol_decodes() {
    let buffer = invert(&render("NEGATIVE"));
    assert_eq!(decoded_value(&buffer).as_deref(), Some("NEGATIVE"));
}

#[test]
fn raw_bytes_entry_point_decodes() {
    let buffer = render("raw bytes");
    let outcome = scan_qr(buffer.as_bytes(), buffer.width(), buffer.height()).unwrap();
    assert_eq!(outcome.into_result().map(|r| r.value).as_deref(), Some("raw bytes"));
}
