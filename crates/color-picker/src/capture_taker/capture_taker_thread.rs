use std::{
    sync::mpsc::{Sender, channel},
    thread::{self, JoinHandle},
};

use camera_provider::{CaptureHandle, TargetResolution};
use tracing::{error, info_span};
use utilities::failure::{Failure, Ignore};

use crate::EventProxy;

use super::{BlockingCaptureTaker, CaptureTaker};

enum Message {
    Shutdown,
    TakeCapture(CaptureHandle, TargetResolution, EventProxy),
}

/// Takes photos on a dedicated background thread.
///
/// The thread is shut down and joined when this is dropped.
pub struct CaptureTakerThread {
    thread: Option<JoinHandle<()>>,
    sender: Sender<Message>,
}

impl CaptureTakerThread {
    /// Start the capture taker thread.
    pub fn new() -> Self {
        let (sender, receiver) = channel();

        let thread = thread::Builder::new()
            .name(String::from("Capture Taker"))
            .spawn(move || {
                let _span = info_span!("[Capture Taker]").entered();
                let mut capture_taker = BlockingCaptureTaker::new();

                while let Ok(message) = receiver.recv() {
                    match message {
                        Message::Shutdown => break,
                        Message::TakeCapture(handle, preview_size, proxy) => {
                            capture_taker.take_capture(handle, preview_size, proxy)
                        }
                    }
                }
            })
            .log_and_panic("Could not start the capture taker thread");

        Self {
            thread: Some(thread),
            sender,
        }
    }
}

impl Default for CaptureTakerThread {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureTaker for CaptureTakerThread {
    fn take_capture(
        &mut self,
        handle: CaptureHandle,
        preview_size: TargetResolution,
        proxy: EventProxy,
    ) {
        self.sender
            .send(Message::TakeCapture(handle, preview_size, proxy))
            .log_and_panic("Could not send message to capture taker");
    }
}

impl Drop for CaptureTakerThread {
    fn drop(&mut self) {
        self.sender.send(Message::Shutdown).ignore();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                error!("Joining Capture Taker thread returned an error");
            }
        }
    }
}
