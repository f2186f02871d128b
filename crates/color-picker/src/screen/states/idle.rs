use tracing::debug;

use crate::screen::{CoreResources, LifecycleEvent, ScreenEvent};

use super::{
    ScreenState, binding::SessionBinding, capturing::CapturingScreen, exited::ExitedScreen,
    ignore_tap, permission_requested::PermissionRequestedScreen,
};

/// Showing the preview, ready for a capture.
pub struct IdleScreen {
    pub core: CoreResources,
    pub binding: SessionBinding,
}

impl ScreenState for IdleScreen {
    fn handle_event(mut self: Box<Self>, event: ScreenEvent) -> Box<dyn ScreenState> {
        match event {
            ScreenEvent::CaptureTapped => {
                let Some(handle) = self.binding.handle.clone() else {
                    ignore_tap("the camera session is not bound");
                    return self;
                };

                Box::new(CapturingScreen::new(*self, handle))
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

            ScreenEvent::Capture(_) => {
                debug!("Ignoring a capture result that was not requested");
                self
            }

            ScreenEvent::Permission(_) => self,
        }
    }
}

impl From<PermissionRequestedScreen> for IdleScreen {
    fn from(screen: PermissionRequestedScreen) -> Self {
        debug!("[TRANSITION] PermissionRequested -> Idle");

        let mut core = screen.core;
        let binding = SessionBinding::open(&mut core);

        Self { core, binding }
    }
}

impl From<CapturingScreen> for IdleScreen {
    fn from(screen: CapturingScreen) -> Self {
        debug!("[TRANSITION] Capturing -> Idle");

        Self {
            core: screen.core,
            binding: screen.binding,
        }
    }
}
