use tracing::debug;
use uninitialized::UninitializedScreen;

use super::{CoreResources, ScreenEvent};

mod binding;
mod capturing;
mod denied;
mod exited;
mod idle;
mod permission_requested;
mod uninitialized;

pub trait ScreenState {
    fn handle_event(self: Box<Self>, event: ScreenEvent) -> Box<dyn ScreenState>;

    /// If the state is waiting on an answer it asked for.
    fn is_awaiting(&self) -> bool {
        false
    }

    fn is_exited(&self) -> bool {
        false
    }
}

pub fn initialise_state(core: CoreResources) -> Box<dyn ScreenState> {
    Box::new(UninitializedScreen { core })
}

fn ignore_tap(reason: &str) {
    debug!("Ignoring capture tap, {reason}");
}
