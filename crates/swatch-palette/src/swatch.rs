use crate::{Color, Hsl};

/// A representative color and the number of pixels it stands for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    color: Color,
    population: u32,
    hsl: Hsl,
}

impl Swatch {
    /// Create a swatch, computing its HSL once.
    pub fn new(color: Color, population: u32) -> Self {
        Self {
            color,
            population,
            hsl: color.hsl(),
        }
    }

    /// The representative color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Number of pixels represented.
    pub fn population(&self) -> u32 {
        self.population
    }

    /// The color in HSL.
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }
}
