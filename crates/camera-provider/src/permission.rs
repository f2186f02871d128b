use tracing::debug;

/// Answer to a camera permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Callback the prompt invokes exactly once with the user's answer.
pub type PermissionResponder = Box<dyn FnOnce(PermissionStatus) + Send>;

/// The host's camera permission prompt.
///
/// The answer may arrive on any thread and at any later time.
pub trait PermissionPrompt: Send {
    /// Ask for camera access.
    fn request(&mut self, respond: PermissionResponder);
}

/// A prompt with a fixed answer, given immediately.
#[derive(Debug, Clone, Copy)]
pub struct StaticPermission {
    status: PermissionStatus,
}

impl StaticPermission {
    /// A prompt that always grants access.
    pub fn granted() -> Self {
        Self {
            status: PermissionStatus::Granted,
        }
    }

    /// A prompt that always denies access.
    pub fn denied() -> Self {
        Self {
            status: PermissionStatus::Denied,
        }
    }
}

impl PermissionPrompt for StaticPermission {
    fn request(&mut self, respond: PermissionResponder) {
        debug!("Answering camera permission request with {:?}", self.status);
        respond(self.status);
    }
}
