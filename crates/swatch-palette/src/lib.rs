//! # Swatch Palette
//! Extracts representative swatches from an image and picks the best swatch for each of a set
//! of targets (vibrant, muted, and their light and dark variants).
//!
//! ```ignore
//! let palette = Palette::from_image(&image).generate();
//! let color = palette.vibrant_swatch().map(|swatch| swatch.color());
//! ```

use std::{borrow::Cow, collections::HashSet};

use image::{RgbaImage, imageops::FilterType};
use tracing::debug;

pub use color::{Color, Hsl};
pub use filter::{DefaultFilter, Filter};
pub use swatch::Swatch;
pub use target::Target;

mod color;
mod filter;
mod quantizer;
mod swatch;
mod target;

use quantizer::ColorCutQuantizer;

/// Images with a larger area are scaled down before quantization.
pub const DEFAULT_RESIZE_AREA: u32 = 112 * 112;

/// Maximum number of swatches the quantizer produces.
pub const DEFAULT_MAXIMUM_COLOR_COUNT: usize = 16;

/// The swatches of an image and the swatch selected for each target.
#[derive(Debug, Clone)]
pub struct Palette {
    swatches: Vec<Swatch>,
    selected: Vec<(Target, Option<Swatch>)>,
    dominant: Option<Swatch>,
}

impl Palette {
    /// Start building a palette for an image.
    pub fn from_image(image: &RgbaImage) -> PaletteBuilder<'_> {
        PaletteBuilder::new(image)
    }

    /// Build a palette from existing swatches, scoring the default targets.
    pub fn from_swatches(swatches: Vec<Swatch>) -> Self {
        Self::generate(swatches, &Target::DEFAULTS)
    }

    fn generate(swatches: Vec<Swatch>, targets: &[Target]) -> Self {
        let dominant = swatches
            .iter()
            .copied()
            .reduce(|dominant, swatch| {
                if swatch.population() > dominant.population() {
                    swatch
                } else {
                    dominant
                }
            });
        let dominant_population = dominant.map_or(1, |swatch| swatch.population());

        let mut used_colors = HashSet::new();
        let selected = targets
            .iter()
            .map(|target| {
                let mut best: Option<(Swatch, f32)> = None;

                for swatch in &swatches {
                    if !target.accepts(swatch.hsl()) || used_colors.contains(&swatch.color()) {
                        continue;
                    }

                    let score = target.score(swatch, dominant_population);
                    if best.is_none_or(|(_, best_score)| score > best_score) {
                        best = Some((*swatch, score));
                    }
                }

                let best = best.map(|(swatch, _)| swatch);
                if let Some(swatch) = best.filter(|_| target.is_exclusive()) {
                    used_colors.insert(swatch.color());
                }

                (*target, best)
            })
            .collect();

        Self {
            swatches,
            selected,
            dominant,
        }
    }

    /// Every swatch the quantizer produced.
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// The swatch with the largest population.
    pub fn dominant_swatch(&self) -> Option<Swatch> {
        self.dominant
    }

    /// The swatch selected for a target, if the target was generated and matched.
    pub fn swatch_for(&self, target: &Target) -> Option<Swatch> {
        self.selected
            .iter()
            .find(|(selected, _)| selected == target)
            .and_then(|(_, swatch)| *swatch)
    }

    /// The swatch selected for [`Target::VIBRANT`].
    pub fn vibrant_swatch(&self) -> Option<Swatch> {
        self.swatch_for(&Target::VIBRANT)
    }

    /// The swatch selected for [`Target::LIGHT_VIBRANT`].
    pub fn light_vibrant_swatch(&self) -> Option<Swatch> {
        self.swatch_for(&Target::LIGHT_VIBRANT)
    }

    /// The swatch selected for [`Target::DARK_VIBRANT`].
    pub fn dark_vibrant_swatch(&self) -> Option<Swatch> {
        self.swatch_for(&Target::DARK_VIBRANT)
    }

    /// The swatch selected for [`Target::MUTED`].
    pub fn muted_swatch(&self) -> Option<Swatch> {
        self.swatch_for(&Target::MUTED)
    }

    /// The swatch selected for [`Target::LIGHT_MUTED`].
    pub fn light_muted_swatch(&self) -> Option<Swatch> {
        self.swatch_for(&Target::LIGHT_MUTED)
    }

    /// The swatch selected for [`Target::DARK_MUTED`].
    pub fn dark_muted_swatch(&self) -> Option<Swatch> {
        self.swatch_for(&Target::DARK_MUTED)
    }
}

/// Options for generating a [`Palette`].
pub struct PaletteBuilder<'a> {
    image: &'a RgbaImage,
    maximum_color_count: usize,
    resize_area: Option<u32>,
    filters: Vec<Box<dyn Filter>>,
    targets: Vec<Target>,
}

impl<'a> PaletteBuilder<'a> {
    fn new(image: &'a RgbaImage) -> Self {
        Self {
            image,
            maximum_color_count: DEFAULT_MAXIMUM_COLOR_COUNT,
            resize_area: Some(DEFAULT_RESIZE_AREA),
            filters: vec![Box::new(DefaultFilter)],
            targets: Target::DEFAULTS.to_vec(),
        }
    }

    /// Set the maximum number of swatches the quantizer may produce.
    pub fn maximum_color_count(mut self, count: usize) -> Self {
        self.maximum_color_count = count.max(1);
        self
    }

    /// Set the area above which the image is scaled down, `None` never scales.
    pub fn resize_area(mut self, area: Option<u32>) -> Self {
        self.resize_area = area;
        self
    }

    /// Remove every filter, including the default one.
    pub fn clear_filters(mut self) -> Self {
        self.filters.clear();
        self
    }

    /// Add a filter, colors must pass every filter.
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Remove every target, including the defaults.
    pub fn clear_targets(mut self) -> Self {
        self.targets.clear();
        self
    }

    /// Add a target, scored after the existing ones.
    pub fn add_target(mut self, target: Target) -> Self {
        if !self.targets.contains(&target) {
            self.targets.push(target);
        }
        self
    }

    /// Quantize the image and select a swatch for each target.
    pub fn generate(self) -> Palette {
        let image = self.scale_down();

        let pixels = image.pixels().map(|pixel| [pixel[0], pixel[1], pixel[2]]);
        let quantizer = ColorCutQuantizer::new(pixels, &self.filters);
        let distinct = quantizer.distinct_colors();
        let swatches = quantizer.quantized_colors(self.maximum_color_count);

        debug!(
            "Quantized {}x{} image: {distinct} distinct colors, {} swatches",
            image.width(),
            image.height(),
            swatches.len()
        );

        Palette::generate(swatches, &self.targets)
    }

    fn scale_down(&self) -> Cow<'a, RgbaImage> {
        let Some(resize_area) = self.resize_area else {
            return Cow::Borrowed(self.image);
        };

        let (width, height) = self.image.dimensions();
        let area = u64::from(width) * u64::from(height);

        if resize_area == 0 || area <= u64::from(resize_area) {
            return Cow::Borrowed(self.image);
        }

        let scale = (f64::from(resize_area) / area as f64).sqrt();
        let scaled_width = (f64::from(width) * scale).ceil() as u32;
        let scaled_height = (f64::from(height) * scale).ceil() as u32;

        Cow::Owned(image::imageops::resize(
            self.image,
            scaled_width.max(1),
            scaled_height.max(1),
            FilterType::Nearest,
        ))
    }
}
