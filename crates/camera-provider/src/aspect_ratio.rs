use core::fmt::Display;

const RATIO_4_3_VALUE: f64 = 4.0 / 3.0;
const RATIO_16_9_VALUE: f64 = 16.0 / 9.0;

/// The stream aspect ratio presets a camera can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    /// Four by three, the usual sensor shape.
    Ratio4x3,
    /// Sixteen by nine.
    Ratio16x9,
}

impl AspectRatio {
    /// Select the preset closest to the display's ratio, preferring 4:3 on a tie.
    ///
    /// Orientation does not matter, the ratio is always long side over short side.
    pub fn from_display(width: u32, height: u32) -> Self {
        let long_side = width.max(height);
        let short_side = width.min(height);

        if short_side == 0 {
            return Self::Ratio4x3;
        }

        let ratio = f64::from(long_side) / f64::from(short_side);

        if (ratio - RATIO_4_3_VALUE).abs() <= (ratio - RATIO_16_9_VALUE).abs() {
            Self::Ratio4x3
        } else {
            Self::Ratio16x9
        }
    }

    /// The long side over short side ratio of the preset.
    pub fn value(self) -> f64 {
        match self {
            Self::Ratio4x3 => RATIO_4_3_VALUE,
            Self::Ratio16x9 => RATIO_16_9_VALUE,
        }
    }
}

impl Display for AspectRatio {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Ratio4x3 => write!(f, "4:3"),
            Self::Ratio16x9 => write!(f, "16:9"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::AspectRatio;

    #[test]
    fn common_displays() {
        assert_eq!(AspectRatio::from_display(1080, 2340), AspectRatio::Ratio16x9);
        assert_eq!(AspectRatio::from_display(1920, 1080), AspectRatio::Ratio16x9);
        assert_eq!(AspectRatio::from_display(1536, 2048), AspectRatio::Ratio4x3);
        assert_eq!(AspectRatio::from_display(1000, 1000), AspectRatio::Ratio4x3);
    }

    #[test]
    fn degenerate_display() {
        assert_eq!(AspectRatio::from_display(0, 1080), AspectRatio::Ratio4x3);
        assert_eq!(AspectRatio::from_display(0, 0), AspectRatio::Ratio4x3);
    }

    #[test]
    fn either_side_of_midpoint() {
        // Midpoint between the presets is 14/9 ~ 1.5556
        assert_eq!(AspectRatio::from_display(900, 1399), AspectRatio::Ratio4x3);
        assert_eq!(AspectRatio::from_display(900, 1401), AspectRatio::Ratio16x9);
    }

    #[test]
    fn orientation_is_symmetric() {
        let mut rng = rand::rng();

        for _ in 0..10_000 {
            let width = rng.random_range(0..8_000);
            let height = rng.random_range(0..8_000);

            assert_eq!(
                AspectRatio::from_display(width, height),
                AspectRatio::from_display(height, width),
                "{width}x{height}"
            );
        }
    }
}
