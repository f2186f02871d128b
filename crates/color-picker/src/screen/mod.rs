//! The color picker screen: a state machine driven by host events.

mod core_resources;
mod events;
mod states;

pub use core_resources::ScreenSetup;
pub use events::{CaptureEvent, Layout, LifecycleEvent, ScreenEvent};

pub(crate) use core_resources::CoreResources;
pub(crate) use states::{ScreenState, initialise_state};
