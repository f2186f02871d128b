use camera_provider::PermissionStatus;
use tracing::{debug, info};
use utilities::failure::Ignore;

use crate::screen::{CoreResources, LifecycleEvent, ScreenEvent};

use super::{
    ScreenState, denied::DeniedScreen, exited::ExitedScreen, idle::IdleScreen, ignore_tap,
    uninitialized::UninitializedScreen,
};

pub struct PermissionRequestedScreen {
    pub core: CoreResources,
}

impl ScreenState for PermissionRequestedScreen {
    fn handle_event(mut self: Box<Self>, event: ScreenEvent) -> Box<dyn ScreenState> {
        match event {
            ScreenEvent::Permission(status) => {
                info!("Camera permission {status:?}");

                match status {
                    PermissionStatus::Granted => Box::new(IdleScreen::from(*self)),
                    PermissionStatus::Denied => Box::new(DeniedScreen::from(*self)),
                }
            }

            ScreenEvent::Lifecycle(LifecycleEvent::DisplayRotated(rotation)) => {
                self.core.display_rotation = rotation;
                self
            }

            ScreenEvent::Lifecycle(LifecycleEvent::Destroyed) => {
                Box::new(ExitedScreen::from(*self))
            }

            ScreenEvent::LayoutChanged(layout) => {
                self.core.set_layout(layout);
                self
            }

            ScreenEvent::CaptureTapped => {
                ignore_tap("waiting for camera permission");
                self
            }

            _ => self,
        }
    }

    fn is_awaiting(&self) -> bool {
        true
    }
}

impl From<UninitializedScreen> for PermissionRequestedScreen {
    fn from(screen: UninitializedScreen) -> Self {
        debug!("[TRANSITION] Uninitialized -> PermissionRequested");

        let mut core = screen.core;

        let proxy = core.proxy.clone();
        core.permission
            .request(Box::new(move |status: PermissionStatus| {
                proxy.send_event(status).ignore();
            }));

        Self { core }
    }
}
