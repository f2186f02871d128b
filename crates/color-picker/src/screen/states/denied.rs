use tracing::debug;

use crate::{
    ScreenError,
    screen::{CoreResources, LifecycleEvent, ScreenEvent},
};

use super::{
    ScreenState, exited::ExitedScreen, ignore_tap, permission_requested::PermissionRequestedScreen,
};

/// Camera access was refused, the screen stays up without a camera.
pub struct DeniedScreen {
    pub core: CoreResources,
}

impl ScreenState for DeniedScreen {
    fn handle_event(mut self: Box<Self>, event: ScreenEvent) -> Box<dyn ScreenState> {
        match event {
            ScreenEvent::Lifecycle(LifecycleEvent::Destroyed) => {
                Box::new(ExitedScreen::from(*self))
            }

            ScreenEvent::LayoutChanged(layout) => {
                self.core.set_layout(layout);
                self
            }

            ScreenEvent::CaptureTapped => {
                ignore_tap("camera permission was denied");
                self
            }

            _ => self,
        }
    }
}

impl From<PermissionRequestedScreen> for DeniedScreen {
    fn from(screen: PermissionRequestedScreen) -> Self {
        debug!("[TRANSITION] PermissionRequested -> Denied");

        let mut core = screen.core;
        core.notify(&ScreenError::PermissionDenied);

        Self { core }
    }
}
