//! Modified median cut quantization over a 5-bit per channel histogram.

use std::collections::BinaryHeap;

use crate::{
    Color, Swatch,
    filter::{Filter, should_ignore},
};

const QUANTIZE_WORD_WIDTH: u16 = 5;
const QUANTIZE_WORD_MASK: u16 = (1 << QUANTIZE_WORD_WIDTH) - 1;
const HISTOGRAM_SIZE: usize = 1 << (QUANTIZE_WORD_WIDTH * 3);

/// Reduce an 8-bit per channel color to RGB555.
pub(crate) fn quantize_from_rgb888(red: u8, green: u8, blue: u8) -> u16 {
    u16::from(red >> 3) << (QUANTIZE_WORD_WIDTH * 2)
        | u16::from(green >> 3) << QUANTIZE_WORD_WIDTH
        | u16::from(blue >> 3)
}

fn quantized_red(color: u16) -> u16 {
    (color >> (QUANTIZE_WORD_WIDTH * 2)) & QUANTIZE_WORD_MASK
}

fn quantized_green(color: u16) -> u16 {
    (color >> QUANTIZE_WORD_WIDTH) & QUANTIZE_WORD_MASK
}

fn quantized_blue(color: u16) -> u16 {
    color & QUANTIZE_WORD_MASK
}

fn widen(value: u16) -> u8 {
    ((value << 3) & 0xFF) as u8
}

fn approximate_to_rgb888(red: u16, green: u16, blue: u16) -> Color {
    Color::from_rgb(widen(red), widen(green), widen(blue))
}

fn approximate(color: u16) -> Color {
    approximate_to_rgb888(
        quantized_red(color),
        quantized_green(color),
        quantized_blue(color),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dimension {
    Red,
    Green,
    Blue,
}

impl Dimension {
    /// Reorders the channels so this dimension is the most significant.
    fn sort_key(self, color: u16) -> u16 {
        let (red, green, blue) = (
            quantized_red(color),
            quantized_green(color),
            quantized_blue(color),
        );

        let (first, second, third) = match self {
            Self::Red => (red, green, blue),
            Self::Green => (green, red, blue),
            Self::Blue => (blue, green, red),
        };

        first << (QUANTIZE_WORD_WIDTH * 2) | second << QUANTIZE_WORD_WIDTH | third
    }
}

/// A box of the color cube, covering `colors[lower..=upper]`.
#[derive(Debug, Clone, Copy)]
struct Vbox {
    lower: usize,
    upper: usize,
    population: u32,

    min_red: u16,
    max_red: u16,
    min_green: u16,
    max_green: u16,
    min_blue: u16,
    max_blue: u16,
}

impl Vbox {
    fn fit(lower: usize, upper: usize, colors: &[u16], histogram: &[u32]) -> Self {
        let mut vbox = Self {
            lower,
            upper,
            population: 0,
            min_red: u16::MAX,
            max_red: 0,
            min_green: u16::MAX,
            max_green: 0,
            min_blue: u16::MAX,
            max_blue: 0,
        };

        for &color in &colors[lower..=upper] {
            vbox.population += histogram[usize::from(color)];

            let (red, green, blue) = (
                quantized_red(color),
                quantized_green(color),
                quantized_blue(color),
            );
            vbox.min_red = vbox.min_red.min(red);
            vbox.max_red = vbox.max_red.max(red);
            vbox.min_green = vbox.min_green.min(green);
            vbox.max_green = vbox.max_green.max(green);
            vbox.min_blue = vbox.min_blue.min(blue);
            vbox.max_blue = vbox.max_blue.max(blue);
        }

        vbox
    }

    fn volume(&self) -> u32 {
        u32::from(self.max_red - self.min_red + 1)
            * u32::from(self.max_green - self.min_green + 1)
            * u32::from(self.max_blue - self.min_blue + 1)
    }

    fn color_count(&self) -> usize {
        self.upper + 1 - self.lower
    }

    fn can_split(&self) -> bool {
        self.color_count() > 1
    }

    fn longest_dimension(&self) -> Dimension {
        let red_length = self.max_red - self.min_red;
        let green_length = self.max_green - self.min_green;
        let blue_length = self.max_blue - self.min_blue;

        if red_length >= green_length && red_length >= blue_length {
            Dimension::Red
        } else if green_length >= red_length && green_length >= blue_length {
            Dimension::Green
        } else {
            Dimension::Blue
        }
    }
}

impl PartialEq for Vbox {
    fn eq(&self, other: &Self) -> bool {
        self.volume() == other.volume()
    }
}

impl Eq for Vbox {}

impl PartialOrd for Vbox {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vbox {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.volume().cmp(&other.volume())
    }
}

/// Reduces a set of pixels to at most a fixed number of representative swatches.
pub(crate) struct ColorCutQuantizer<'a> {
    /// The distinct quantized colors that passed the filters.
    colors: Vec<u16>,
    histogram: Vec<u32>,
    filters: &'a [Box<dyn Filter>],
}

impl<'a> ColorCutQuantizer<'a> {
    pub fn new(
        pixels: impl IntoIterator<Item = [u8; 3]>,
        filters: &'a [Box<dyn Filter>],
    ) -> Self {
        let mut histogram = vec![0u32; HISTOGRAM_SIZE];

        for [red, green, blue] in pixels {
            histogram[usize::from(quantize_from_rgb888(red, green, blue))] += 1;
        }

        let mut colors = Vec::new();
        for (color, population) in histogram.iter_mut().enumerate() {
            if *population == 0 {
                continue;
            }

            let color = color as u16;
            if should_ignore(filters, approximate(color)) {
                *population = 0;
                continue;
            }

            colors.push(color);
        }

        Self {
            colors,
            histogram,
            filters,
        }
    }

    /// Number of distinct quantized colors that passed the filters.
    pub fn distinct_colors(&self) -> usize {
        self.colors.len()
    }

    pub fn quantized_colors(mut self, max_colors: usize) -> Vec<Swatch> {
        if self.colors.is_empty() {
            return Vec::new();
        }

        if self.colors.len() <= max_colors {
            return self
                .colors
                .iter()
                .map(|&color| Swatch::new(approximate(color), self.histogram[usize::from(color)]))
                .collect();
        }

        self.quantize_pixels(max_colors)
    }

    fn quantize_pixels(&mut self, max_colors: usize) -> Vec<Swatch> {
        let mut queue = BinaryHeap::with_capacity(max_colors);
        queue.push(Vbox::fit(
            0,
            self.colors.len() - 1,
            &self.colors,
            &self.histogram,
        ));

        while queue.len() < max_colors {
            let Some(vbox) = queue.pop() else {
                break;
            };

            if !vbox.can_split() {
                queue.push(vbox);
                break;
            }

            let (lower, upper) = self.split_box(vbox);
            queue.push(lower);
            queue.push(upper);
        }

        queue
            .into_sorted_vec()
            .into_iter()
            .rev()
            .map(|vbox| self.average_color(&vbox))
            .filter(|swatch| !should_ignore(self.filters, swatch.color()))
            .collect()
    }

    fn split_box(&mut self, vbox: Vbox) -> (Vbox, Vbox) {
        let split_point = self.find_split_point(&vbox);

        (
            Vbox::fit(vbox.lower, split_point, &self.colors, &self.histogram),
            Vbox::fit(split_point + 1, vbox.upper, &self.colors, &self.histogram),
        )
    }

    /// Sort the box by its longest dimension then find the population midpoint.
    fn find_split_point(&mut self, vbox: &Vbox) -> usize {
        let dimension = vbox.longest_dimension();

        let range = &mut self.colors[vbox.lower..=vbox.upper];
        range.sort_unstable_by_key(|&color| dimension.sort_key(color));

        let midpoint = vbox.population / 2;
        let mut count = 0;
        for (offset, &color) in range.iter().enumerate() {
            count += self.histogram[usize::from(color)];
            if count >= midpoint {
                return (vbox.upper - 1).min(vbox.lower + offset);
            }
        }

        vbox.lower
    }

    fn average_color(&self, vbox: &Vbox) -> Swatch {
        let mut red_sum = 0u64;
        let mut green_sum = 0u64;
        let mut blue_sum = 0u64;
        let mut total_population = 0u64;

        for &color in &self.colors[vbox.lower..=vbox.upper] {
            let population = u64::from(self.histogram[usize::from(color)]);

            total_population += population;
            red_sum += population * u64::from(quantized_red(color));
            green_sum += population * u64::from(quantized_green(color));
            blue_sum += population * u64::from(quantized_blue(color));
        }

        let mean = |sum: u64| (sum as f32 / total_population as f32).round() as u16;

        Swatch::new(
            approximate_to_rgb888(mean(red_sum), mean(green_sum), mean(blue_sum)),
            total_population as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{Color, DefaultFilter, filter::Filter};

    use super::{ColorCutQuantizer, approximate, quantize_from_rgb888};

    #[test]
    fn quantize_round_trip_drops_low_bits() {
        let quantized = quantize_from_rgb888(0xFF, 0x87, 0x07);

        assert_eq!(quantized, 31 << 10 | 16 << 5);
        assert_eq!(approximate(quantized), Color::from_rgb(0xF8, 0x80, 0x00));
    }

    #[test]
    fn few_colors_are_kept_exactly() {
        let mut pixels = vec![[0x20, 0x60, 0xE0]; 30];
        pixels.extend(vec![[0x40, 0xA0, 0x40]; 10]);

        let quantizer = ColorCutQuantizer::new(pixels, &[]);
        assert_eq!(quantizer.distinct_colors(), 2);

        let mut swatches = quantizer.quantized_colors(16);
        swatches.sort_by_key(|swatch| swatch.population());

        assert_eq!(swatches.len(), 2);
        assert_eq!(swatches[0].color(), Color::from_rgb(0x40, 0xA0, 0x40));
        assert_eq!(swatches[0].population(), 10);
        assert_eq!(swatches[1].color(), Color::from_rgb(0x20, 0x60, 0xE0));
        assert_eq!(swatches[1].population(), 30);
    }

    #[test]
    fn filtered_colors_are_removed() {
        let filters: Vec<Box<dyn Filter>> = vec![Box::new(DefaultFilter)];
        let pixels = vec![[0, 0, 0], [255, 255, 255], [0x20, 0x60, 0xE0]];

        let swatches = ColorCutQuantizer::new(pixels, &filters).quantized_colors(16);

        assert_eq!(swatches.len(), 1);
        assert_eq!(swatches[0].color(), Color::from_rgb(0x20, 0x60, 0xE0));
    }

    #[test]
    fn median_cut_limits_swatch_count() {
        let pixels: Vec<[u8; 3]> = (0..64u8)
            .flat_map(|red| (0..8u8).map(move |blue| [red * 4, 0x80, blue * 32]))
            .collect();
        let total = pixels.len() as u32;

        let quantizer = ColorCutQuantizer::new(pixels, &[]);
        assert!(quantizer.distinct_colors() > 16);

        let swatches = quantizer.quantized_colors(16);

        assert_eq!(swatches.len(), 16);
        assert_eq!(
            swatches.iter().map(|swatch| swatch.population()).sum::<u32>(),
            total
        );
    }

    #[test]
    fn empty_input() {
        assert!(ColorCutQuantizer::new([], &[]).quantized_colors(16).is_empty());
    }
}
