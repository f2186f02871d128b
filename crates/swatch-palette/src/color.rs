use core::fmt::Display;

use palette::{FromColor, Srgb};

/// A 32-bit ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// An opaque color from its channels.
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(0xFF00_0000 | u32::from(red) << 16 | u32::from(green) << 8 | u32::from(blue))
    }

    /// The packed ARGB value.
    pub fn argb(self) -> u32 {
        self.0
    }

    /// The alpha channel.
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The red channel.
    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// The green channel.
    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// The blue channel.
    pub fn blue(self) -> u8 {
        self.0 as u8
    }

    /// `#RRGGBB` with the alpha channel stripped.
    pub fn hex(self) -> String {
        format!("#{:06X}", self.0 & 0x00FF_FFFF)
    }

    /// The color in HSL.
    pub fn hsl(self) -> Hsl {
        Hsl::from(self)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.hex())
    }
}

/// Hue in degrees within `[0, 360)`, saturation and lightness within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        let rgb: Srgb<f32> = Srgb::new(color.red(), color.green(), color.blue()).into_format();
        let hsl = palette::Hsl::from_color(rgb);

        Self {
            hue: hsl.hue.into_positive_degrees() % 360.0,
            saturation: hsl.saturation.clamp(0.0, 1.0),
            lightness: hsl.lightness.clamp(0.0, 1.0),
        }
    }
}
