use core::fmt::Display;

/// Size of the surface a stream should target, usually the root layout size.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TargetResolution {
    pub width: u32,
    pub height: u32,
}

impl TargetResolution {
    /// Create a new target resolution.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// If either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Display for TargetResolution {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Metrics of the full physical display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    pub width_pixels: u32,
    pub height_pixels: u32,

    /// Pixels per density-independent unit.
    pub density: f32,
}

impl DisplayMetrics {
    /// Convert density-independent units to whole pixels, truncating.
    pub fn dp_to_px(&self, dp: u32) -> u32 {
        (dp as f32 * self.density) as u32
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self {
            width_pixels: 1080,
            height_pixels: 2340,
            density: 2.75,
        }
    }
}

/// Rotation of the display relative to its natural orientation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Natural orientation.
    #[default]
    Rotation0,
    /// Rotated a quarter turn.
    Rotation90,
    /// Upside down.
    Rotation180,
    /// Rotated three quarter turns.
    Rotation270,
}

impl Rotation {
    /// Rotation from degrees, only exact quarter turns are accepted.
    pub fn from_degrees(degrees: u32) -> Option<Self> {
        match degrees % 360 {
            0 => Some(Self::Rotation0),
            90 => Some(Self::Rotation90),
            180 => Some(Self::Rotation180),
            270 => Some(Self::Rotation270),
            _ => None,
        }
    }

    /// The rotation in degrees.
    pub fn degrees(self) -> u32 {
        match self {
            Self::Rotation0 => 0,
            Self::Rotation90 => 90,
            Self::Rotation180 => 180,
            Self::Rotation270 => 270,
        }
    }
}
