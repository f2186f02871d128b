use camera_provider::{CameraSession, CaptureHandle, PermissionPrompt, Rotation};
use tracing::debug;

use crate::{
    EventProxy, ScreenError,
    capture_taker::CaptureTaker,
    presentation::{ColorView, notify},
    region_sampler::RegionSampler,
};

use super::Layout;

/// The collaborators a screen is built from.
pub struct ScreenSetup {
    /// A closed session, opened once permission is granted.
    pub session: CameraSession,
    pub permission: Box<dyn PermissionPrompt>,
    pub capture_taker: Box<dyn CaptureTaker>,
    /// Where colors and notices are shown.
    pub view: Box<dyn ColorView>,
    pub sampler: RegionSampler,
    /// Rotation of the display when the screen starts.
    pub display_rotation: Rotation,
}

/// Resources every screen state owns.
pub struct CoreResources {
    pub session: CameraSession,
    pub permission: Box<dyn PermissionPrompt>,
    pub capture_taker: Box<dyn CaptureTaker>,
    pub view: Box<dyn ColorView>,
    pub sampler: RegionSampler,
    pub proxy: EventProxy,
    pub layout: Layout,
    pub display_rotation: Rotation,
}

impl CoreResources {
    pub fn new(setup: ScreenSetup, proxy: EventProxy) -> Self {
        Self {
            session: setup.session,
            permission: setup.permission,
            capture_taker: setup.capture_taker,
            view: setup.view,
            sampler: setup.sampler,
            proxy,
            layout: Layout::default(),
            display_rotation: setup.display_rotation,
        }
    }

    /// Bind the camera session for the current layout and rotation.
    ///
    /// A failed bind is shown as a notice, the screen stays usable without a capture handle.
    pub fn bind_session(&mut self) -> Option<CaptureHandle> {
        match self
            .session
            .open(self.layout.root, self.display_rotation)
        {
            Ok(handle) => Some(handle),
            Err(e) => {
                notify(self.view.as_mut(), &ScreenError::from(e));
                None
            }
        }
    }

    pub fn set_layout(&mut self, layout: Layout) {
        if layout.root != self.layout.root {
            debug!("Root resized to {}", layout.root);
        }

        self.layout = layout;
    }

    pub fn notify(&mut self, error: &ScreenError) {
        notify(self.view.as_mut(), error);
    }
}
