use camera_provider::CaptureHandle;
use tracing::debug;

use crate::screen::{CoreResources, LifecycleEvent};

/// The camera binding once permission is granted.
pub struct SessionBinding {
    /// `None` while paused or after a failed bind.
    pub handle: Option<CaptureHandle>,
    pub paused: bool,
}

impl SessionBinding {
    pub fn open(core: &mut CoreResources) -> Self {
        Self {
            handle: core.bind_session(),
            paused: false,
        }
    }

    /// Pausing closes the session, resuming or rotating the display binds it again.
    pub fn handle_lifecycle(&mut self, core: &mut CoreResources, event: LifecycleEvent) {
        match event {
            LifecycleEvent::Paused => {
                core.session.close();
                self.handle = None;
                self.paused = true;
            }

            LifecycleEvent::Resumed => {
                if self.paused || self.handle.is_none() {
                    self.paused = false;
                    self.handle = core.bind_session();
                }
            }

            LifecycleEvent::DisplayRotated(rotation) => {
                core.display_rotation = rotation;

                if self.paused {
                    debug!("Display rotated while paused, binding on resume");
                } else {
                    self.handle = core.bind_session();
                }
            }

            LifecycleEvent::Started | LifecycleEvent::Destroyed => {}
        }
    }
}
