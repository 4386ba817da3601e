use super::Orientation;
use std::fmt;
use std::time::SystemTime;

/// A symbol as reported by a decoder: payload plus symbology name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Decoded payload
    pub content: String,
    /// Symbology name, e.g. "EAN-13" or "QR-Code"
    pub format_name: String,
}

impl Symbol {
    /// Create a symbol
    pub fn new(content: impl Into<String>, format_name: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            format_name: format_name.into(),
        }
    }
}

/// A successful decode annotated with the transform combination that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    /// Decoded payload of the first symbol
    pub value: String,
    /// Symbology name of the first symbol
    pub format: String,
    /// Rotation that was applied before the successful attempt
    pub orientation: Orientation,
    /// Whether the successful attempt ran on the inverted image
    pub was_inverted: bool,
    /// Captured at success time
    pub scanned_at: SystemTime,
}

impl ScanResult {
    /// Labels shown next to a result: format, rotation (if any), inversion (if any)
    pub fn badges(&self) -> Vec<String> {
        let mut badges = vec![self.format.clone()];
        if self.orientation != Orientation::Deg0 {
            badges.push(format!("rotated {}", self.orientation));
        }
        if self.was_inverted {
            badges.push("inverted".to_string());
        }
        badges
    }
}

impl fmt::Display for ScanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.badges().join(", "), self.value)
    }
}

/// Outcome of one complete orientation/inversion search
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// A symbol was decoded
    Decoded(ScanResult),
    /// All attempts came back empty
    NotFound,
}

impl ScanOutcome {
    /// True for `Decoded`
    pub fn is_found(&self) -> bool {
        matches!(self, ScanOutcome::Decoded(_))
    }

    /// Borrow the result, if any
    pub fn result(&self) -> Option<&ScanResult> {
        match self {
            ScanOutcome::Decoded(r) => Some(r),
            ScanOutcome::NotFound => None,
        }
    }

    /// Take the result, if any
    pub fn into_result(self) -> Option<ScanResult> {
        match self {
            ScanOutcome::Decoded(r) => Some(r),
            ScanOutcome::NotFound => None,
        }
    }
}
