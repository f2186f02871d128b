//! Reduces a patch to one color.

use swatch_palette::{Color, Palette};
use tracing::debug;
use utilities::DebugTime;

use crate::region_sampler::CroppedPatch;

/// The six named candidates extracted from a patch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SwatchSet {
    pub vibrant: Option<Color>,
    pub light_vibrant: Option<Color>,
    pub dark_vibrant: Option<Color>,
    pub muted: Option<Color>,
    pub light_muted: Option<Color>,
    pub dark_muted: Option<Color>,
}

impl SwatchSet {
    /// The candidates a palette selected.
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            vibrant: palette.vibrant_swatch().map(|swatch| swatch.color()),
            light_vibrant: palette.light_vibrant_swatch().map(|swatch| swatch.color()),
            dark_vibrant: palette.dark_vibrant_swatch().map(|swatch| swatch.color()),
            muted: palette.muted_swatch().map(|swatch| swatch.color()),
            light_muted: palette.light_muted_swatch().map(|swatch| swatch.color()),
            dark_muted: palette.dark_muted_swatch().map(|swatch| swatch.color()),
        }
    }

    /// The first present candidate: vibrant, light vibrant, dark vibrant, muted, light muted,
    /// then dark muted.
    pub fn select(&self) -> Option<Color> {
        self.vibrant
            .or(self.light_vibrant)
            .or(self.dark_vibrant)
            .or(self.muted)
            .or(self.light_muted)
            .or(self.dark_muted)
    }
}

/// Extract the patch's swatches and select one color, `None` if no swatch qualified.
pub fn resolve(patch: &CroppedPatch) -> Option<Color> {
    let _timer = DebugTime::start("Resolving color");

    let palette = Palette::from_image(&patch.image).generate();
    let swatches = SwatchSet::from_palette(&palette);

    debug!("Swatches: {swatches:?}");

    swatches.select()
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use swatch_palette::Color;

    use crate::region_sampler::{CroppedPatch, PatchBounds};

    use super::{SwatchSet, resolve};

    fn patch(color: [u8; 3]) -> CroppedPatch {
        CroppedPatch {
            image: RgbaImage::from_pixel(50, 50, Rgba([color[0], color[1], color[2], 255])),
            bounds: PatchBounds {
                left: 0,
                top: 0,
                right: 50,
                bottom: 50,
            },
        }
    }

    #[test]
    fn priority_order() {
        let light = Color(0xFF112233);
        let muted = Color(0xFF445566);

        let swatches = SwatchSet {
            light_vibrant: Some(light),
            muted: Some(muted),
            ..Default::default()
        };
        assert_eq!(swatches.select(), Some(light));

        let swatches = SwatchSet {
            dark_muted: Some(light),
            muted: Some(muted),
            ..Default::default()
        };
        assert_eq!(swatches.select(), Some(muted));

        let swatches = SwatchSet {
            vibrant: Some(muted),
            light_vibrant: Some(light),
            ..Default::default()
        };
        assert_eq!(swatches.select(), Some(muted));
    }

    #[test]
    fn all_absent() {
        assert_eq!(SwatchSet::default().select(), None);
    }

    #[test]
    fn solid_patches() {
        assert_eq!(
            resolve(&patch([0x20, 0x60, 0xE0])),
            Some(Color::from_rgb(0x20, 0x60, 0xE0))
        );
        assert_eq!(
            resolve(&patch([0x58, 0x68, 0x88])),
            Some(Color::from_rgb(0x58, 0x68, 0x88))
        );
        assert_eq!(resolve(&patch([255, 255, 255])), None);
        assert_eq!(resolve(&patch([0, 0, 0])), None);
    }
}
