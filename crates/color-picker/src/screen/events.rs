use camera_provider::{PermissionStatus, Rotation, TargetResolution};
use image::RgbaImage;

use crate::ScreenRegion;

/// Sizes and positions of the screen's views, in screen pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// The root view, the camera streams target this size.
    pub root: TargetResolution,
    /// The preview view, captured photos are scaled to this size.
    pub preview: TargetResolution,
    /// The cross mark indicator.
    pub indicator: ScreenRegion,
}

/// Everything the screen reacts to.
#[derive(Debug)]
pub enum ScreenEvent {
    /// The host moved the screen through its lifecycle.
    Lifecycle(LifecycleEvent),
    /// The answer to the camera permission request.
    Permission(PermissionStatus),
    /// The views were measured or moved.
    LayoutChanged(Layout),
    /// The user tapped the capture control.
    CaptureTapped,
    /// A capture finished.
    Capture(CaptureEvent),
}

/// Host lifecycle notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The screen was created and shown.
    Started,
    /// The screen went to the background.
    Paused,
    /// The screen came back to the foreground.
    Resumed,
    /// The display changed orientation.
    DisplayRotated(Rotation),
    /// The screen is gone, no further events are handled.
    Destroyed,
}

/// Result of a requested capture.
#[derive(Debug)]
pub enum CaptureEvent {
    /// The photo, upright and scaled to the preview size.
    Captured(RgbaImage),
    /// Taking or decoding the photo failed.
    Failed,
}

mod from_impls {
    pub use super::*;

    impl From<LifecycleEvent> for ScreenEvent {
        fn from(value: LifecycleEvent) -> Self {
            Self::Lifecycle(value)
        }
    }

    impl From<CaptureEvent> for ScreenEvent {
        fn from(value: CaptureEvent) -> Self {
            Self::Capture(value)
        }
    }

    impl From<PermissionStatus> for ScreenEvent {
        fn from(value: PermissionStatus) -> Self {
            Self::Permission(value)
        }
    }

    impl From<Layout> for ScreenEvent {
        fn from(value: Layout) -> Self {
            Self::LayoutChanged(value)
        }
    }
}
