//! # Color Picker
//! A camera screen with a fixed cross mark. Each capture samples the patch under the cross mark
//! and presents its most representative color as a fill and a `#RRGGBB` label.
//!

pub use camera_provider;
pub use swatch_palette::Color;

pub use error::ScreenError;
pub use screen::{CaptureEvent, Layout, LifecycleEvent, ScreenEvent, ScreenSetup};
pub use screen_event_loop::{EventLoopClosed, EventProxy, ScreenEventLoop};
pub use screen_region::ScreenRegion;

pub mod capture_taker;
pub mod color_resolver;
pub mod error;
pub mod presentation;
pub mod region_sampler;
pub mod screen;
pub mod screen_event_loop;
pub mod screen_region;
