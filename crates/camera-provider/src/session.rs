use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error, info, info_span};

use crate::{
    AspectRatio, BindError, CameraBackend, CaptureError, DisplayMetrics, RawFrame, Rotation,
    StillCapture, StreamConfig, TargetResolution,
};

/// Where the session is in its bind lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing is bound, either never opened or explicitly closed.
    Closed,
    /// Preview and still capture are bound.
    Bound {
        /// Generation of the binding, matches the handles it issued.
        generation: u64,
        /// The config the streams were bound with.
        config: StreamConfig,
    },
    /// The last bind attempt failed, the session can be rebound.
    BindFailed,
}

struct Binding {
    backend: Box<dyn CameraBackend>,
    generation: u64,
    capture: Option<Arc<dyn StillCapture>>,
}

/// Owns the camera backend and its current binding.
///
/// Every bind or close starts a new generation, capture handles from older generations are
/// rejected.
pub struct CameraSession {
    binding: Arc<Mutex<Binding>>,
    metrics: DisplayMetrics,
    state: SessionState,
    last_request: Option<(TargetResolution, Rotation)>,
}

impl CameraSession {
    /// Create a closed session over a backend.
    pub fn new<B: CameraBackend + 'static>(backend: B, metrics: DisplayMetrics) -> Self {
        Self {
            binding: Arc::new(Mutex::new(Binding {
                backend: Box::new(backend),
                generation: 0,
                capture: None,
            })),
            metrics,
            state: SessionState::Closed,
            last_request: None,
        }
    }

    /// Unbind everything then bind preview and still capture for the back camera.
    ///
    /// The aspect ratio is chosen from the display metrics, the rotation is applied to both
    /// streams.
    pub fn open(
        &mut self,
        target_resolution: TargetResolution,
        display_rotation: Rotation,
    ) -> Result<CaptureHandle, BindError> {
        let _span = info_span!("[Camera Session]").entered();

        self.last_request = Some((target_resolution, display_rotation));

        let aspect_ratio =
            AspectRatio::from_display(self.metrics.width_pixels, self.metrics.height_pixels);
        let config = StreamConfig::new(aspect_ratio, display_rotation, target_resolution);

        let mut binding = self.binding.lock();
        binding.backend.unbind_all();
        binding.capture = None;
        binding.generation += 1;
        let generation = binding.generation;

        let capture = match binding.backend.bind(&config) {
            Ok(capture) => capture,
            Err(e) => {
                error!("Error setting up camera: {e}");
                self.state = SessionState::BindFailed;
                return Err(e);
            }
        };

        binding.capture = Some(capture);
        drop(binding);

        info!(
            "Bound generation {generation}: {aspect_ratio} targeting {target_resolution} at {}°",
            display_rotation.degrees()
        );

        self.state = SessionState::Bound { generation, config };

        Ok(CaptureHandle {
            binding: Arc::clone(&self.binding),
            generation,
        })
    }

    /// Repeat the last open request.
    pub fn rebind(&mut self) -> Result<CaptureHandle, BindError> {
        let Some((target_resolution, rotation)) = self.last_request else {
            return Err(BindError::NeverOpened);
        };

        self.open(target_resolution, rotation)
    }

    /// Unbind all streams, invalidating every outstanding capture handle.
    pub fn close(&mut self) {
        let mut binding = self.binding.lock();
        binding.backend.unbind_all();
        binding.capture = None;
        binding.generation += 1;
        drop(binding);

        if self.state != SessionState::Closed {
            info!("[Camera Session] Closed");
        }
        self.state = SessionState::Closed;
    }

    /// The current state of the session.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// A handle to the current binding, if bound.
    pub fn capture_handle(&self) -> Option<CaptureHandle> {
        match self.state {
            SessionState::Bound { generation, .. } => Some(CaptureHandle {
                binding: Arc::clone(&self.binding),
                generation,
            }),
            _ => None,
        }
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        self.binding.lock().backend.unbind_all();
    }
}

/// A still capture trigger tied to one binding generation.
#[derive(Clone)]
pub struct CaptureHandle {
    binding: Arc<Mutex<Binding>>,
    generation: u64,
}

impl CaptureHandle {
    /// Take a still frame, fails if the session was rebound or closed since the handle was made.
    ///
    /// The session is not locked while the frame is taken, a rebind or close that lands during
    /// the capture discards its result.
    pub fn capture(&self) -> Result<RawFrame, CaptureError> {
        let capture = {
            let binding = self.binding.lock();

            if binding.generation != self.generation {
                return Err(CaptureError::StaleHandle);
            }

            match &binding.capture {
                Some(capture) => Arc::clone(capture),
                None => return Err(CaptureError::NotBound),
            }
        };

        let frame = capture.capture_still()?;

        if self.binding.lock().generation != self.generation {
            debug!("Discarding frame from replaced binding {}", self.generation);
            return Err(CaptureError::StaleHandle);
        }

        Ok(frame)
    }

    /// The binding generation this handle belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl core::fmt::Debug for CaptureHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CaptureHandle")
            .field("generation", &self.generation)
            .finish()
    }
}
