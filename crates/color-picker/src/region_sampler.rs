//! Crops the patch under the cross mark out of a captured image.

use camera_provider::DisplayMetrics;
use image::{RgbaImage, imageops};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::ScreenRegion;

/// Nominal patch edge length in density-independent units.
pub const DEFAULT_PATCH_DP: u32 = 25;

/// Pixel bounds of a patch within its source image, right and bottom exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatchBounds {
    /// First column inside the patch.
    pub left: u32,
    /// First row inside the patch.
    pub top: u32,
    /// First column past the patch.
    pub right: u32,
    /// First row past the patch.
    pub bottom: u32,
}

impl PatchBounds {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

impl core::fmt::Display for PatchBounds {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "({}, {}) to ({}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// A copy of part of a captured image.
#[derive(Debug, Clone)]
pub struct CroppedPatch {
    pub image: RgbaImage,
    pub bounds: PatchBounds,
}

/// Computes and extracts the square patch centered on the indicator.
#[derive(Debug, Clone, Copy)]
pub struct RegionSampler {
    patch_size: u32,
}

impl RegionSampler {
    /// A sampler whose nominal patch is `patch_dp` density-independent units wide.
    pub fn new(metrics: &DisplayMetrics, patch_dp: u32) -> Self {
        Self {
            patch_size: metrics.dp_to_px(patch_dp),
        }
    }

    /// Nominal patch edge length in pixels.
    pub fn patch_size(&self) -> u32 {
        self.patch_size
    }

    /// The patch bounds for an image of the given size, clamped to the image.
    ///
    /// The patch is never empty, if half the patch size truncates to zero the patch is the
    /// single pixel under the indicator's center.
    pub fn bounds(
        &self,
        width: u32,
        height: u32,
        indicator: ScreenRegion,
    ) -> Result<PatchBounds, Error> {
        let (center_x, center_y) = indicator.center();

        if center_x < 0
            || center_y < 0
            || center_x >= i64::from(width)
            || center_y >= i64::from(height)
        {
            return Err(Error::OutOfBounds {
                x: center_x,
                y: center_y,
                width,
                height,
            });
        }

        // Bounds checked above
        let (center_x, center_y) = (center_x as u32, center_y as u32);
        let half = self.patch_size / 2;

        if half == 0 {
            return Ok(PatchBounds {
                left: center_x,
                top: center_y,
                right: center_x + 1,
                bottom: center_y + 1,
            });
        }

        Ok(PatchBounds {
            left: center_x.saturating_sub(half),
            top: center_y.saturating_sub(half),
            right: width.min(center_x.saturating_add(half)),
            bottom: height.min(center_y.saturating_add(half)),
        })
    }

    /// Copy the patch under the indicator out of the image.
    pub fn sample(&self, image: &RgbaImage, indicator: ScreenRegion) -> Result<CroppedPatch, Error> {
        let bounds = self.bounds(image.width(), image.height(), indicator)?;

        let patch = imageops::crop_imm(
            image,
            bounds.left,
            bounds.top,
            bounds.width(),
            bounds.height(),
        )
        .to_image();

        debug!(
            "Sampled {}x{} patch at {bounds} from {}x{} image",
            bounds.width(),
            bounds.height(),
            image.width(),
            image.height()
        );

        Ok(CroppedPatch {
            image: patch,
            bounds,
        })
    }
}

/// Failure to sample the indicator region.
#[derive(Debug, Error)]
pub enum Error {
    #[error("The indicator center ({x}, {y}) is outside the {width}x{height} image.")]
    OutOfBounds {
        /// Indicator center column in image pixels.
        x: i64,
        /// Indicator center row in image pixels.
        y: i64,
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
    },
}
