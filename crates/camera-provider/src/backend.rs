use std::{io, sync::Arc};

use thiserror::Error;

use crate::{AspectRatio, Rotation, TargetResolution};

/// Which physical camera a stream is bound to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LensFacing {
    /// Camera on the opposite side to the display.
    #[default]
    Back,
    /// Camera on the same side as the display.
    Front,
}

/// Tradeoff the backend should make for still captures.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CaptureMode {
    /// Favour a fast shutter over image quality.
    #[default]
    MinimizeLatency,
}

/// What the backend may do if no stream matches the requested aspect ratio.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FallbackRule {
    /// Pick the closest available ratio.
    #[default]
    Auto,
    /// Fail the bind.
    None,
}

/// Resolution strategy shared by the preview and still capture streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionSelector {
    /// Preferred stream aspect ratio.
    pub aspect_ratio: AspectRatio,
    /// Behaviour when the camera has no stream at the preferred ratio.
    pub fallback: FallbackRule,
}

/// Everything a backend needs to bind a preview stream and a still capture stream.
///
/// Both streams share the same resolution selector and target rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfig {
    /// How both streams pick a resolution.
    pub resolution: ResolutionSelector,
    /// Display rotation the output is oriented for.
    pub target_rotation: Rotation,
    /// Preview surface size the streams should target.
    pub target_resolution: TargetResolution,
    /// Still capture tradeoff.
    pub capture_mode: CaptureMode,
    /// Which camera to bind.
    pub lens_facing: LensFacing,
}

impl StreamConfig {
    /// Config for the back camera in low latency mode.
    pub fn new(
        aspect_ratio: AspectRatio,
        target_rotation: Rotation,
        target_resolution: TargetResolution,
    ) -> Self {
        Self {
            resolution: ResolutionSelector {
                aspect_ratio,
                fallback: FallbackRule::Auto,
            },
            target_rotation,
            target_resolution,
            capture_mode: CaptureMode::MinimizeLatency,
            lens_facing: LensFacing::Back,
        }
    }

    /// Replace the aspect ratio fallback rule.
    pub fn with_fallback(mut self, fallback: FallbackRule) -> Self {
        self.resolution.fallback = fallback;
        self
    }
}

/// An encoded still frame as it left the camera.
#[derive(Debug, Clone)]
pub struct RawFrame {
    /// Encoded image bytes, JPEG or PNG.
    pub data: Box<[u8]>,

    /// Clockwise rotation needed to display the frame upright.
    pub rotation_degrees: u32,
}

/// The host camera framework.
pub trait CameraBackend: Send {
    /// Release every stream bound to the camera.
    fn unbind_all(&mut self);

    /// Bind the preview and still capture streams, returning the still capture trigger.
    fn bind(&mut self, config: &StreamConfig) -> Result<Arc<dyn StillCapture>, BindError>;
}

/// The still capture stream of one binding.
///
/// Captures run without holding the session, so a trigger may outlive its binding. Results from
/// a replaced binding are discarded by the session.
pub trait StillCapture: Send + Sync {
    /// Take a single still frame.
    fn capture_still(&self) -> Result<RawFrame, CaptureError>;
}

/// Failure to bind the camera streams.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("No camera matches the requested lens facing: {0:?}")]
    NoMatchingCamera(LensFacing),

    #[error("No stream supports the requested aspect ratio: {0}")]
    UnsupportedAspectRatio(AspectRatio),

    #[error("The session has never been opened.")]
    NeverOpened,

    #[error("Failed to bind the camera streams:\n{0}")]
    Backend(#[source] Box<dyn core::error::Error + Send + Sync>),
}

/// Failure to take a still frame.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("The capture stream is not bound.")]
    NotBound,

    #[error("The capture handle belongs to a binding that has been replaced.")]
    StaleHandle,

    #[error("Failed to read the frame source:\n{0}")]
    ReadFrame(#[source] io::Error),

    #[error("Failed to take the still capture:\n{0}")]
    Backend(#[source] Box<dyn core::error::Error + Send + Sync>),
}
