use camera_provider::{RawFrame, TargetResolution};
use image::{DynamicImage, ImageError, RgbaImage, imageops::FilterType};
use thiserror::Error;
use tracing::debug;

/// Decode a frame, rotate it upright, then scale it to exactly the preview size.
///
/// Once scaled, image coordinates line up with screen coordinates over the preview.
pub fn frame_to_raster(frame: &RawFrame, preview_size: TargetResolution) -> Result<RgbaImage, Error> {
    if preview_size.is_empty() {
        return Err(Error::EmptyPreview(preview_size));
    }

    let decoded = image::load_from_memory(&frame.data).map_err(Error::Decode)?;
    debug!(
        "Decoded {}x{} frame, rotating {} degrees",
        decoded.width(),
        decoded.height(),
        frame.rotation_degrees
    );

    let rotated = rotate(decoded, frame.rotation_degrees)?;

    let scaled = if rotated.width() == preview_size.width && rotated.height() == preview_size.height
    {
        rotated
    } else {
        rotated.resize_exact(preview_size.width, preview_size.height, FilterType::Triangle)
    };

    Ok(scaled.into_rgba8())
}

/// Rotate clockwise by a multiple of 90 degrees.
fn rotate(image: DynamicImage, degrees: u32) -> Result<DynamicImage, Error> {
    match degrees % 360 {
        0 => Ok(image),
        90 => Ok(image.rotate90()),
        180 => Ok(image.rotate180()),
        270 => Ok(image.rotate270()),
        _ => Err(Error::UnsupportedRotation(degrees)),
    }
}

/// Failure to turn a frame into an image.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to decode the frame:\n{0}")]
    Decode(#[source] ImageError),

    #[error("Frame rotation of {0} degrees is not a multiple of 90.")]
    UnsupportedRotation(u32),

    #[error("The preview surface has no area: {0}")]
    EmptyPreview(TargetResolution),
}
