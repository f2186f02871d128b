//! Failures the screen reports to the user.

use camera_provider::BindError;
use thiserror::Error;

use crate::region_sampler;

/// A failure during a capture cycle or session setup.
///
/// None of these end the screen, each is logged and shown to the user as a short notice.
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("Camera permission was denied.")]
    PermissionDenied,

    #[error("Failed to bind the camera session:\n{0}")]
    SessionBindFailed(#[from] BindError),

    #[error("Failed to capture the photo.")]
    CaptureFailed,

    #[error("Failed to sample the indicator region:\n{0}")]
    OutOfBoundsRegion(#[from] region_sampler::Error),

    #[error("No swatch in the patch was suitable.")]
    NoSuitableColor,
}

impl ScreenError {
    /// The transient notice shown to the user.
    pub fn notice(&self) -> &'static str {
        match self {
            Self::PermissionDenied => "Permission denied",
            Self::SessionBindFailed(_) => "Camera setup failed",
            Self::CaptureFailed => "Photo capture failed",
            Self::OutOfBoundsRegion(_) => "Cross mark is outside the captured image",
            Self::NoSuitableColor => "No suitable color found",
        }
    }
}
