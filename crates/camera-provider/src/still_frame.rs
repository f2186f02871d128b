use std::{fs, path::PathBuf, sync::Arc};

use tracing::debug;
use utilities::DebugTime;

use crate::{
    AspectRatio, BindError, CameraBackend, CaptureError, FallbackRule, LensFacing, RawFrame,
    ResolutionSelector, StillCapture, StreamConfig,
};

#[derive(Debug, Clone)]
enum FrameSource {
    File(PathBuf),
    Memory(Arc<[u8]>),
}

/// A camera that returns the same encoded frame for every still capture.
///
/// Used where no camera hardware is available, the frame is read on each capture.
#[derive(Debug, Clone)]
pub struct StillFrameCamera {
    source: FrameSource,
    rotation_degrees: u32,
    lens_facing: LensFacing,
    aspect_ratios: Vec<AspectRatio>,
    bound: Option<StreamConfig>,
}

impl StillFrameCamera {
    /// A back facing camera reading its frame from a file.
    pub fn from_file(path: impl Into<PathBuf>, rotation_degrees: u32) -> Self {
        Self::new(FrameSource::File(path.into()), rotation_degrees)
    }

    /// A back facing camera returning already encoded bytes.
    pub fn from_bytes(data: impl Into<Arc<[u8]>>, rotation_degrees: u32) -> Self {
        Self::new(FrameSource::Memory(data.into()), rotation_degrees)
    }

    fn new(source: FrameSource, rotation_degrees: u32) -> Self {
        Self {
            source,
            rotation_degrees,
            lens_facing: LensFacing::Back,
            aspect_ratios: vec![AspectRatio::Ratio4x3, AspectRatio::Ratio16x9],
            bound: None,
        }
    }

    /// Change which lens the camera reports as available.
    pub fn with_lens_facing(mut self, lens_facing: LensFacing) -> Self {
        self.lens_facing = lens_facing;
        self
    }

    /// Limit the stream aspect ratios the camera offers.
    pub fn with_aspect_ratios(mut self, aspect_ratios: &[AspectRatio]) -> Self {
        self.aspect_ratios = aspect_ratios.to_vec();
        self
    }

    /// The config of the current binding, with the aspect ratio the camera settled on.
    pub fn bound_config(&self) -> Option<&StreamConfig> {
        self.bound.as_ref()
    }

    fn resolve_aspect_ratio(
        &self,
        selector: ResolutionSelector,
    ) -> Result<AspectRatio, BindError> {
        if self.aspect_ratios.contains(&selector.aspect_ratio) {
            return Ok(selector.aspect_ratio);
        }

        let unsupported = BindError::UnsupportedAspectRatio(selector.aspect_ratio);

        match selector.fallback {
            FallbackRule::None => Err(unsupported),
            FallbackRule::Auto => {
                let wanted = selector.aspect_ratio.value();
                self.aspect_ratios
                    .iter()
                    .copied()
                    .min_by(|a, b| {
                        (a.value() - wanted)
                            .abs()
                            .total_cmp(&(b.value() - wanted).abs())
                    })
                    .ok_or(unsupported)
            }
        }
    }
}

impl CameraBackend for StillFrameCamera {
    fn unbind_all(&mut self) {
        self.bound = None;
    }

    fn bind(&mut self, config: &StreamConfig) -> Result<Arc<dyn StillCapture>, BindError> {
        if config.lens_facing != self.lens_facing {
            return Err(BindError::NoMatchingCamera(config.lens_facing));
        }

        let aspect_ratio = self.resolve_aspect_ratio(config.resolution)?;
        if aspect_ratio != config.resolution.aspect_ratio {
            debug!(
                "Falling back from {} to {aspect_ratio}",
                config.resolution.aspect_ratio
            );
        }

        let mut bound = *config;
        bound.resolution.aspect_ratio = aspect_ratio;
        self.bound = Some(bound);

        Ok(Arc::new(StillFrameCapture {
            source: self.source.clone(),
            rotation_degrees: self.rotation_degrees,
        }))
    }
}

struct StillFrameCapture {
    source: FrameSource,
    rotation_degrees: u32,
}

impl StillCapture for StillFrameCapture {
    fn capture_still(&self) -> Result<RawFrame, CaptureError> {
        let _timer = DebugTime::start("Reading still frame");

        let data: Box<[u8]> = match &self.source {
            FrameSource::File(path) => fs::read(path)
                .map_err(CaptureError::ReadFrame)?
                .into_boxed_slice(),
            FrameSource::Memory(bytes) => Box::from(&bytes[..]),
        };

        debug!("Read {} byte still frame", data.len());

        Ok(RawFrame {
            data,
            rotation_degrees: self.rotation_degrees,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        AspectRatio, BindError, CameraBackend, CaptureError, FallbackRule, LensFacing, Rotation,
        StreamConfig, TargetResolution,
    };

    use super::StillFrameCamera;

    fn config() -> StreamConfig {
        StreamConfig::new(
            AspectRatio::Ratio16x9,
            Rotation::Rotation0,
            TargetResolution::new(400, 800),
        )
    }

    #[test]
    fn binding_returns_capture_trigger() {
        let mut camera = StillFrameCamera::from_bytes(vec![1, 2, 3], 90);
        assert!(camera.bound_config().is_none());

        let capture = camera.bind(&config()).unwrap();
        assert_eq!(camera.bound_config(), Some(&config()));

        let frame = capture.capture_still().unwrap();
        assert_eq!(&*frame.data, &[1, 2, 3]);
        assert_eq!(frame.rotation_degrees, 90);

        camera.unbind_all();
        assert!(camera.bound_config().is_none());
    }

    #[test]
    fn front_only_camera_rejects_back_binding() {
        let mut camera =
            StillFrameCamera::from_bytes(vec![0], 0).with_lens_facing(LensFacing::Front);

        assert!(matches!(
            camera.bind(&config()),
            Err(BindError::NoMatchingCamera(LensFacing::Back))
        ));
        assert!(camera.bound_config().is_none());
    }

    #[test]
    fn auto_fallback_picks_closest_ratio() {
        let mut camera = StillFrameCamera::from_bytes(vec![0], 0)
            .with_aspect_ratios(&[AspectRatio::Ratio4x3]);

        camera.bind(&config()).unwrap();

        let bound = camera.bound_config().unwrap();
        assert_eq!(bound.resolution.aspect_ratio, AspectRatio::Ratio4x3);
        assert_eq!(bound.resolution.fallback, FallbackRule::Auto);
    }

    #[test]
    fn no_fallback_rejects_unsupported_ratio() {
        let mut camera = StillFrameCamera::from_bytes(vec![0], 0)
            .with_aspect_ratios(&[AspectRatio::Ratio4x3]);

        let result = camera.bind(&config().with_fallback(FallbackRule::None));

        assert!(matches!(
            result,
            Err(BindError::UnsupportedAspectRatio(AspectRatio::Ratio16x9))
        ));
        assert!(camera.bound_config().is_none());
    }

    #[test]
    fn camera_without_streams_cannot_fall_back() {
        let mut camera = StillFrameCamera::from_bytes(vec![0], 0).with_aspect_ratios(&[]);

        assert!(matches!(
            camera.bind(&config()),
            Err(BindError::UnsupportedAspectRatio(AspectRatio::Ratio16x9))
        ));
    }

    #[test]
    fn missing_file_fails_capture() {
        let mut camera = StillFrameCamera::from_file("/definitely/not/a/frame.jpg", 0);
        let capture = camera.bind(&config()).unwrap();

        assert!(matches!(
            capture.capture_still(),
            Err(CaptureError::ReadFrame(_))
        ));
    }
}
