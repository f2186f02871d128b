use crate::{Color, Hsl};

const BLACK_MAX_LIGHTNESS: f32 = 0.05;
const WHITE_MIN_LIGHTNESS: f32 = 0.95;

/// Decides if a color may take part in the palette.
pub trait Filter: Send + Sync {
    /// If the color should be kept.
    fn is_allowed(&self, color: Color, hsl: Hsl) -> bool;
}

impl<F> Filter for F
where
    F: Fn(Color, Hsl) -> bool + Send + Sync,
{
    fn is_allowed(&self, color: Color, hsl: Hsl) -> bool {
        self(color, hsl)
    }
}

/// Rejects colors close to black, close to white, or close to the red I-line
/// where skin tones sit.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFilter;

impl DefaultFilter {
    fn is_black(hsl: Hsl) -> bool {
        hsl.lightness <= BLACK_MAX_LIGHTNESS
    }

    fn is_white(hsl: Hsl) -> bool {
        hsl.lightness >= WHITE_MIN_LIGHTNESS
    }

    fn is_near_red_i_line(hsl: Hsl) -> bool {
        (10.0..=37.0).contains(&hsl.hue) && hsl.saturation <= 0.82
    }
}

impl Filter for DefaultFilter {
    fn is_allowed(&self, _color: Color, hsl: Hsl) -> bool {
        !Self::is_white(hsl) && !Self::is_black(hsl) && !Self::is_near_red_i_line(hsl)
    }
}

/// If any filter rejects the color.
pub(crate) fn should_ignore(filters: &[Box<dyn Filter>], color: Color) -> bool {
    if filters.is_empty() {
        return false;
    }

    let hsl = color.hsl();
    filters.iter().any(|filter| !filter.is_allowed(color, hsl))
}
