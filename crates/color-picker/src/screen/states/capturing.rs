use camera_provider::CaptureHandle;
use image::RgbaImage;
use tracing::debug;

use crate::{
    ScreenError, ScreenRegion,
    color_resolver::resolve,
    presentation::render,
    screen::{CaptureEvent, CoreResources, LifecycleEvent, ScreenEvent},
};

use super::{
    ScreenState, binding::SessionBinding, exited::ExitedScreen, idle::IdleScreen, ignore_tap,
};

/// A photo has been requested and its result has not arrived.
pub struct CapturingScreen {
    pub core: CoreResources,
    pub binding: SessionBinding,
    /// Where the indicator was when the capture was tapped.
    pub tapped_indicator: ScreenRegion,
}

impl CapturingScreen {
    pub fn new(screen: IdleScreen, handle: CaptureHandle) -> Self {
        debug!("[TRANSITION] Idle -> Capturing");

        let mut core = screen.core;

        let preview_size = core.layout.preview;
        let proxy = core.proxy.clone();
        core.capture_taker
            .take_capture(handle, preview_size, proxy);

        let tapped_indicator = core.layout.indicator;

        Self {
            core,
            binding: screen.binding,
            tapped_indicator,
        }
    }

    /// Sample the patch under the indicator, resolve its color and render it.
    fn present(&mut self, image: &RgbaImage) {
        debug!("[TRANSITION] Capturing -> Sampling");

        let indicator = self.core.layout.indicator;
        if indicator != self.tapped_indicator {
            debug!(
                "Indicator moved from {} to {indicator} during the capture",
                self.tapped_indicator
            );
        }

        let patch = match self.core.sampler.sample(image, indicator) {
            Ok(patch) => patch,
            Err(e) => {
                self.core.notify(&ScreenError::from(e));
                return;
            }
        };
        self.core.view.sampled(patch.bounds);

        debug!("[TRANSITION] Sampling -> Resolving");
        let color = resolve(&patch);

        debug!("[TRANSITION] Resolving -> Presented");
        render(self.core.view.as_mut(), color);
    }
}

impl ScreenState for CapturingScreen {
    fn handle_event(mut self: Box<Self>, event: ScreenEvent) -> Box<dyn ScreenState> {
        match event {
            ScreenEvent::Capture(CaptureEvent::Captured(image)) => {
                self.present(&image);
                Box::new(IdleScreen::from(*self))
            }

            ScreenEvent::Capture(CaptureEvent::Failed) => {
                self.core.notify(&ScreenError::CaptureFailed);
                Box::new(IdleScreen::from(*self))
            }

            ScreenEvent::CaptureTapped => {
                ignore_tap("a capture is in flight");
                self
            }

            ScreenEvent::Lifecycle(LifecycleEvent::Destroyed) => {
                Box::new(ExitedScreen::from(*self))
            }

            ScreenEvent::Lifecycle(event) => {
                self.binding.handle_lifecycle(&mut self.core, event);
                self
            }

            ScreenEvent::LayoutChanged(layout) => {
                self.core.set_layout(layout);
                self
            }

            ScreenEvent::Permission(_) => self,
        }
    }

    fn is_awaiting(&self) -> bool {
        true
    }
}
