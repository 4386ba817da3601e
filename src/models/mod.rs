/// Clockwise quarter-turn orientations
pub mod orientation;
/// Decoder symbols and search outcomes
pub mod outcome;
/// RGBA pixel buffer
pub mod pixel_buffer;

pub use orientation::Orientation;
pub use outcome::{ScanOutcome, ScanResult, Symbol};
pub use pixel_buffer::PixelBuffer;
