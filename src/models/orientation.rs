use crate::error::BufferError;
use std::fmt;

/// Clockwise rotation applied to the normalized image before a decode attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// No rotation
    Deg0,
    /// Quarter turn clockwise
    Deg90,
    /// Half turn
    Deg180,
    /// Three quarter turns clockwise
    Deg270,
}

impl Orientation {
    /// All orientations in scan order
    pub const ALL: [Orientation; 4] = [
        Orientation::Deg0,
        Orientation::Deg90,
        Orientation::Deg180,
        Orientation::Deg270,
    ];

    /// Rotation in degrees
    pub fn degrees(self) -> u16 {
        match self {
            Orientation::Deg0 => 0,
            Orientation::Deg90 => 90,
            Orientation::Deg180 => 180,
            Orientation::Deg270 => 270,
        }
    }

    /// True when rotating swaps width and height
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Orientation::Deg90 | Orientation::Deg270)
    }

    /// Rotation that undoes this one
    pub fn inverse(self) -> Self {
        match self {
            Orientation::Deg0 => Orientation::Deg0,
            Orientation::Deg90 => Orientation::Deg270,
            Orientation::Deg180 => Orientation::Deg180,
            Orientation::Deg270 => Orientation::Deg90,
        }
    }
}

impl TryFrom<u16> for Orientation {
    type Error = BufferError;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Orientation::Deg0),
            90 => Ok(Orientation::Deg90),
            180 => Ok(Orientation::Deg180),
            270 => Ok(Orientation::Deg270),
            other => Err(BufferError::InvalidOrientation(other)),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
