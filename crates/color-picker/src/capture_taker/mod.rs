//! Taking still photos and turning them into upright images the size of the preview.

use camera_provider::{CaptureHandle, TargetResolution};
use tracing::info;
use utilities::{
    DebugTime,
    failure::{Ignore, report},
};

use crate::{CaptureEvent, EventProxy};

pub use capture_taker_thread::CaptureTakerThread;
pub use raster::{Error, frame_to_raster};

mod capture_taker_thread;
mod raster;

/// Takes a photo and sends the resulting image, or the failure, back to the screen.
pub trait CaptureTaker {
    /// Take one photo with the handle, scaled to `preview_size`.
    fn take_capture(
        &mut self,
        handle: CaptureHandle,
        preview_size: TargetResolution,
        proxy: EventProxy,
    );
}

/// Takes the photo on the calling thread.
#[derive(Debug, Default)]
pub struct BlockingCaptureTaker;

impl BlockingCaptureTaker {
    /// Create a new capture taker.
    pub fn new() -> Self {
        Self
    }
}

impl CaptureTaker for BlockingCaptureTaker {
    fn take_capture(
        &mut self,
        handle: CaptureHandle,
        preview_size: TargetResolution,
        proxy: EventProxy,
    ) {
        let frame = {
            let _timer = DebugTime::start("Taking photo");

            match handle.capture() {
                Ok(frame) => frame,
                Err(e) => {
                    report(e, "Could not take the photo");
                    proxy.send_event(CaptureEvent::Failed).ignore();
                    return;
                }
            }
        };

        let image = {
            let _timer = DebugTime::start("Converting photo");

            match frame_to_raster(&frame, preview_size) {
                Ok(image) => image,
                Err(e) => {
                    report(e, "Could not convert the photo");
                    proxy.send_event(CaptureEvent::Failed).ignore();
                    return;
                }
            }
        };

        info!("Got photo");

        proxy.send_event(CaptureEvent::Captured(image)).ignore();
    }
}
