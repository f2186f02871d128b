//! Encoded still frames for capture tests.

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};

/// Encode an image as PNG bytes.
pub fn encode_png(image: &RgbImage) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png).unwrap();
    bytes.into_inner()
}

/// Encode an image as JPEG bytes.
pub fn encode_jpeg(image: &RgbImage) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Jpeg).unwrap();
    bytes.into_inner()
}

/// A single color frame.
pub fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

/// A frame split into a left and a right half.
pub fn split_vertical(width: u32, height: u32, left: [u8; 3], right: [u8; 3]) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 { Rgb(left) } else { Rgb(right) }
    })
}

/// A frame with `inner` filling the given box and `outer` everywhere else.
pub fn boxed(
    width: u32,
    height: u32,
    outer: [u8; 3],
    inner: [u8; 3],
    (left, top, right, bottom): (u32, u32, u32, u32),
) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        if (left..right).contains(&x) && (top..bottom).contains(&y) {
            Rgb(inner)
        } else {
            Rgb(outer)
        }
    })
}
