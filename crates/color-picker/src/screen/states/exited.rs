use tracing::debug;

use crate::screen::CoreResources;

use super::{
    ScreenEvent, ScreenState, capturing::CapturingScreen, denied::DeniedScreen, idle::IdleScreen,
    permission_requested::PermissionRequestedScreen, uninitialized::UninitializedScreen,
};

pub struct ExitedScreen;

impl ExitedScreen {
    fn shutdown(mut core: CoreResources) -> Self {
        core.session.close();

        // Dropping the core joins any capture taker thread
        drop(core);

        Self
    }
}

impl ScreenState for ExitedScreen {
    fn handle_event(self: Box<Self>, _event: ScreenEvent) -> Box<dyn ScreenState> {
        self
    }

    fn is_exited(&self) -> bool {
        true
    }
}

impl From<UninitializedScreen> for ExitedScreen {
    fn from(screen: UninitializedScreen) -> Self {
        debug!("[TRANSITION] Uninitialized -> Exited");
        Self::shutdown(screen.core)
    }
}

impl From<PermissionRequestedScreen> for ExitedScreen {
    fn from(screen: PermissionRequestedScreen) -> Self {
        debug!("[TRANSITION] PermissionRequested -> Exited");
        Self::shutdown(screen.core)
    }
}

impl From<DeniedScreen> for ExitedScreen {
    fn from(screen: DeniedScreen) -> Self {
        debug!("[TRANSITION] Denied -> Exited");
        Self::shutdown(screen.core)
    }
}

impl From<IdleScreen> for ExitedScreen {
    fn from(screen: IdleScreen) -> Self {
        debug!("[TRANSITION] Idle -> Exited");
        Self::shutdown(screen.core)
    }
}

impl From<CapturingScreen> for ExitedScreen {
    fn from(screen: CapturingScreen) -> Self {
        debug!("[TRANSITION] Capturing -> Exited");
        Self::shutdown(screen.core)
    }
}
