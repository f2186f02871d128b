//! Delivers events to the screen state machine in the order they were sent.

use std::sync::mpsc::{Receiver, Sender, channel};

use thiserror::Error;
use tracing::{debug, info_span};

use crate::screen::{
    CoreResources, LifecycleEvent, ScreenEvent, ScreenSetup, ScreenState, initialise_state,
};

/// Sends events to a [`ScreenEventLoop`] from any thread.
#[derive(Debug, Clone)]
pub struct EventProxy {
    sender: Sender<ScreenEvent>,
}

impl EventProxy {
    /// Queue an event for the screen.
    pub fn send_event(&self, event: impl Into<ScreenEvent>) -> Result<(), EventLoopClosed> {
        self.sender.send(event.into()).map_err(|_| EventLoopClosed)
    }
}

/// The event loop the proxy belongs to has been dropped.
#[derive(Debug, Error)]
#[error("The screen event loop has been dropped.")]
pub struct EventLoopClosed;

/// Owns the screen state and a queue of pending events.
pub struct ScreenEventLoop {
    receiver: Receiver<ScreenEvent>,
    proxy: EventProxy,
    state: Option<Box<dyn ScreenState>>,
}

impl ScreenEventLoop {
    /// Create the loop, the screen starts uninitialized until it receives
    /// [`LifecycleEvent::Started`].
    pub fn new(setup: ScreenSetup) -> Self {
        let (sender, receiver) = channel();
        let proxy = EventProxy { sender };

        let core = CoreResources::new(setup, proxy.clone());

        Self {
            receiver,
            proxy,
            state: Some(initialise_state(core)),
        }
    }

    /// A proxy to send events to this loop.
    pub fn create_proxy(&self) -> EventProxy {
        self.proxy.clone()
    }

    /// If the screen has been destroyed.
    pub fn is_exited(&self) -> bool {
        self.state.as_ref().is_none_or(|state| state.is_exited())
    }

    /// Handle queued events until the queue is empty and the screen is not waiting on a
    /// permission answer or a capture.
    pub fn run_until_idle(&mut self) {
        let _span = info_span!("[Screen]").entered();

        loop {
            let is_awaiting = self.state.as_ref().is_some_and(|state| state.is_awaiting());

            let event = if is_awaiting {
                self.receiver.recv().ok()
            } else {
                self.receiver.try_recv().ok()
            };

            let Some(event) = event else {
                return;
            };

            self.dispatch(event);
        }
    }

    /// Handle events until the screen is destroyed.
    pub fn run(mut self) {
        let _span = info_span!("[Screen]").entered();

        while !self.is_exited() {
            let Ok(event) = self.receiver.recv() else {
                return;
            };

            self.dispatch(event);
        }
    }

    fn dispatch(&mut self, event: ScreenEvent) {
        let Some(state) = self.state.take() else {
            return;
        };

        self.state = Some(state.handle_event(event));
    }
}

impl Drop for ScreenEventLoop {
    fn drop(&mut self) {
        if !self.is_exited() {
            debug!("Screen event loop dropped before the screen was destroyed");
            self.dispatch(ScreenEvent::Lifecycle(LifecycleEvent::Destroyed));
        }
    }
}
