//! # Camera Provider
//! Camera permission, stream negotiation and session binding for the color picker.
//!
//! The host camera framework is reached through [`CameraBackend`], the permission prompt
//! through [`PermissionPrompt`]. [`CameraSession`] owns the backend and hands out
//! [`CaptureHandle`]s that stay valid until the next bind or close.

pub use aspect_ratio::AspectRatio;
pub use backend::{
    BindError, CameraBackend, CaptureError, CaptureMode, FallbackRule, LensFacing, RawFrame,
    ResolutionSelector, StillCapture, StreamConfig,
};
pub use display::{DisplayMetrics, Rotation, TargetResolution};
pub use permission::{PermissionPrompt, PermissionResponder, PermissionStatus, StaticPermission};
pub use session::{CameraSession, CaptureHandle, SessionState};
pub use still_frame::StillFrameCamera;

mod aspect_ratio;
mod backend;
mod display;
mod permission;
mod session;
mod still_frame;
