use crate::{Hsl, Swatch};

const WEIGHT_SATURATION: f32 = 0.24;
const WEIGHT_LUMA: f32 = 0.52;
const WEIGHT_POPULATION: f32 = 0.24;

/// `[minimum, target, maximum]`
type Range = [f32; 3];

const LIGHT_LUMA: Range = [0.55, 0.74, 1.0];
const NORMAL_LUMA: Range = [0.3, 0.5, 0.7];
const DARK_LUMA: Range = [0.0, 0.26, 0.45];

const VIBRANT_SATURATION: Range = [0.35, 1.0, 1.0];
const MUTED_SATURATION: Range = [0.0, 0.3, 0.4];

/// A kind of color to pick out of the swatches, described by saturation and lightness ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    saturation: Range,
    lightness: Range,

    /// Saturation, luma and population weights.
    weights: [f32; 3],

    /// If a swatch claimed by this target is unavailable to later targets.
    exclusive: bool,
}

impl Target {
    /// Saturated and light.
    pub const LIGHT_VIBRANT: Self = Self::new(VIBRANT_SATURATION, LIGHT_LUMA);
    /// Saturated with mid lightness.
    pub const VIBRANT: Self = Self::new(VIBRANT_SATURATION, NORMAL_LUMA);
    /// Saturated and dark.
    pub const DARK_VIBRANT: Self = Self::new(VIBRANT_SATURATION, DARK_LUMA);
    /// Desaturated and light.
    pub const LIGHT_MUTED: Self = Self::new(MUTED_SATURATION, LIGHT_LUMA);
    /// Desaturated with mid lightness.
    pub const MUTED: Self = Self::new(MUTED_SATURATION, NORMAL_LUMA);
    /// Desaturated and dark.
    pub const DARK_MUTED: Self = Self::new(MUTED_SATURATION, DARK_LUMA);

    /// The targets a palette generates unless told otherwise, in scoring order.
    pub const DEFAULTS: [Self; 6] = [
        Self::LIGHT_VIBRANT,
        Self::VIBRANT,
        Self::DARK_VIBRANT,
        Self::LIGHT_MUTED,
        Self::MUTED,
        Self::DARK_MUTED,
    ];

    /// An exclusive target with the default weights.
    pub const fn new(saturation: [f32; 3], lightness: [f32; 3]) -> Self {
        Self {
            saturation,
            lightness,
            weights: [WEIGHT_SATURATION, WEIGHT_LUMA, WEIGHT_POPULATION],
            exclusive: true,
        }
    }

    /// Replace the saturation, luma and population weights. Non-positive weights are ignored.
    pub fn with_weights(mut self, saturation: f32, luma: f32, population: f32) -> Self {
        self.weights = [saturation, luma, population];
        self
    }

    /// Set if a swatch claimed by this target may be claimed again.
    pub fn with_exclusive(mut self, exclusive: bool) -> Self {
        self.exclusive = exclusive;
        self
    }

    /// If claimed swatches are unavailable to later targets.
    pub fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    /// Weights scaled so the positive ones sum to one.
    pub fn normalized_weights(&self) -> [f32; 3] {
        let sum: f32 = self.weights.iter().filter(|weight| **weight > 0.0).sum();

        if sum == 0.0 {
            return self.weights;
        }

        self.weights
            .map(|weight| if weight > 0.0 { weight / sum } else { weight })
    }

    /// If the color lies within the target's saturation and lightness ranges.
    pub fn accepts(&self, hsl: Hsl) -> bool {
        (self.saturation[0]..=self.saturation[2]).contains(&hsl.saturation)
            && (self.lightness[0]..=self.lightness[2]).contains(&hsl.lightness)
    }

    /// How well a swatch matches, relative to the most populous swatch.
    pub fn score(&self, swatch: &Swatch, dominant_population: u32) -> f32 {
        let hsl = swatch.hsl();
        let [saturation_weight, luma_weight, population_weight] = self.normalized_weights();

        let mut score = 0.0;

        if saturation_weight > 0.0 {
            score += saturation_weight * (1.0 - (hsl.saturation - self.saturation[1]).abs());
        }
        if luma_weight > 0.0 {
            score += luma_weight * (1.0 - (hsl.lightness - self.lightness[1]).abs());
        }
        if population_weight > 0.0 {
            let max_population = dominant_population.max(1) as f32;
            score += population_weight * (swatch.population() as f32 / max_population);
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use crate::{Color, Swatch};

    use super::Target;

    #[test]
    fn default_weights_normalize() {
        let weights = Target::VIBRANT.normalized_weights();

        assert!((weights.iter().sum::<f32>() - 1.0).abs() < 1e-6);
        assert!((weights[1] - 0.52).abs() < 1e-6);
    }

    #[test]
    fn ranges() {
        let vivid_blue = Color::from_rgb(0x20, 0x60, 0xE0).hsl();

        assert!(Target::VIBRANT.accepts(vivid_blue));
        assert!(!Target::LIGHT_VIBRANT.accepts(vivid_blue));
        assert!(!Target::MUTED.accepts(vivid_blue));

        let dusty_blue = Color::from_rgb(0x58, 0x68, 0x88).hsl();
        assert!(Target::MUTED.accepts(dusty_blue));
        assert!(!Target::VIBRANT.accepts(dusty_blue));
    }

    #[test]
    fn closer_swatch_scores_higher() {
        let vivid = Swatch::new(Color::from_rgb(0x00, 0x40, 0xF8), 10);
        let duller = Swatch::new(Color::from_rgb(0x30, 0x50, 0xB0), 10);

        assert!(Target::VIBRANT.score(&vivid, 10) > Target::VIBRANT.score(&duller, 10));
    }

    #[test]
    fn population_breaks_ties() {
        let common = Swatch::new(Color::from_rgb(0x20, 0x60, 0xE0), 90);
        let rare = Swatch::new(Color::from_rgb(0x20, 0x60, 0xE0), 10);

        assert!(Target::VIBRANT.score(&common, 90) > Target::VIBRANT.score(&rare, 90));
    }
}
