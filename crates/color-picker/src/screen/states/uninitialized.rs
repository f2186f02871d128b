use crate::screen::{CoreResources, LifecycleEvent, ScreenEvent};

use super::{
    ScreenState, exited::ExitedScreen, ignore_tap, permission_requested::PermissionRequestedScreen,
};

pub struct UninitializedScreen {
    pub core: CoreResources,
}

impl ScreenState for UninitializedScreen {
    fn handle_event(mut self: Box<Self>, event: ScreenEvent) -> Box<dyn ScreenState> {
        match event {
            ScreenEvent::Lifecycle(LifecycleEvent::Started) => {
                Box::new(PermissionRequestedScreen::from(*self))
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
                ignore_tap("the screen has not started");
                self
            }

            _ => self,
        }
    }
}
