use std::sync::Arc;

use camera_provider::{
    BindError, CameraBackend, CameraSession, CaptureError, DisplayMetrics, LensFacing, RawFrame,
    Rotation, StaticPermission, StillCapture, StillFrameCamera, StreamConfig, TargetResolution,
};
use color_picker::{
    Color, EventProxy, Layout, LifecycleEvent, ScreenEvent, ScreenEventLoop, ScreenRegion,
    ScreenSetup,
    capture_taker::{BlockingCaptureTaker, CaptureTaker, CaptureTakerThread},
    presentation::ColorView,
    region_sampler::{PatchBounds, RegionSampler},
};
use parking_lot::Mutex;
use test_helper::{frames, logger::init_logger};

const VIVID: [u8; 3] = [0x20, 0x60, 0xE0];
const CROSS_MARK: ScreenRegion = ScreenRegion {
    left: 100,
    top: 200,
    right: 150,
    bottom: 250,
};

#[derive(Debug, Default)]
struct Record {
    fills: Vec<Color>,
    labels: Vec<String>,
    notices: Vec<String>,
    bounds: Vec<PatchBounds>,
}

struct RecordingView(Arc<Mutex<Record>>);

impl ColorView for RecordingView {
    fn set_fill(&mut self, color: Color) {
        self.0.lock().fills.push(color);
    }

    fn set_label(&mut self, label: &str) {
        self.0.lock().labels.push(label.to_string());
    }

    fn show_notice(&mut self, notice: &str) {
        self.0.lock().notices.push(notice.to_string());
    }

    fn sampled(&mut self, bounds: PatchBounds) {
        self.0.lock().bounds.push(bounds);
    }
}

#[derive(Debug, Default)]
struct CameraCalls {
    binds: Vec<StreamConfig>,
    captures: usize,
}

/// Forwards to a still frame camera, recording each call.
struct CountingCamera {
    inner: StillFrameCamera,
    calls: Arc<Mutex<CameraCalls>>,
}

impl CameraBackend for CountingCamera {
    fn unbind_all(&mut self) {
        self.inner.unbind_all();
    }

    fn bind(&mut self, config: &StreamConfig) -> Result<Arc<dyn StillCapture>, BindError> {
        let inner = self.inner.bind(config)?;
        self.calls.lock().binds.push(*config);
        Ok(Arc::new(CountingCapture {
            inner,
            calls: Arc::clone(&self.calls),
        }))
    }
}

struct CountingCapture {
    inner: Arc<dyn StillCapture>,
    calls: Arc<Mutex<CameraCalls>>,
}

impl StillCapture for CountingCapture {
    fn capture_still(&self) -> Result<RawFrame, CaptureError> {
        self.calls.lock().captures += 1;
        self.inner.capture_still()
    }
}

struct Harness {
    event_loop: ScreenEventLoop,
    proxy: EventProxy,
    record: Arc<Mutex<Record>>,
    camera: Arc<Mutex<CameraCalls>>,
}

impl Harness {
    fn new(camera: StillFrameCamera, permission: StaticPermission) -> Self {
        Self::with_capture_taker(camera, permission, Box::new(BlockingCaptureTaker::new()))
    }

    fn with_capture_taker(
        camera: StillFrameCamera,
        permission: StaticPermission,
        capture_taker: Box<dyn CaptureTaker>,
    ) -> Self {
        let metrics = DisplayMetrics {
            width_pixels: 400,
            height_pixels: 800,
            density: 2.0,
        };

        let record = Arc::new(Mutex::new(Record::default()));
        let calls = Arc::new(Mutex::new(CameraCalls::default()));

        let camera = CountingCamera {
            inner: camera,
            calls: Arc::clone(&calls),
        };

        let event_loop = ScreenEventLoop::new(ScreenSetup {
            session: CameraSession::new(camera, metrics),
            permission: Box::new(permission),
            capture_taker,
            view: Box::new(RecordingView(Arc::clone(&record))),
            sampler: RegionSampler::new(&metrics, 25),
            display_rotation: Rotation::Rotation0,
        });
        let proxy = event_loop.create_proxy();

        Self {
            event_loop,
            proxy,
            record,
            camera: calls,
        }
    }

    fn send(&mut self, event: impl Into<ScreenEvent>) {
        self.proxy.send_event(event).unwrap();
        self.event_loop.run_until_idle();
    }

    fn start(&mut self, indicator: ScreenRegion) {
        self.proxy.send_event(layout(indicator)).unwrap();
        self.send(LifecycleEvent::Started);
    }

    fn tap(&mut self) {
        self.send(ScreenEvent::CaptureTapped);
    }
}

fn layout(indicator: ScreenRegion) -> Layout {
    Layout {
        root: TargetResolution::new(400, 800),
        preview: TargetResolution::new(400, 800),
        indicator,
    }
}

fn frame() -> StillFrameCamera {
    let image = frames::boxed(400, 800, [255, 255, 255], VIVID, (100, 200, 150, 250));
    StillFrameCamera::from_bytes(frames::encode_png(&image), 0)
}

#[test]
fn picks_color_under_cross_mark() {
    init_logger();

    let mut harness = Harness::new(frame(), StaticPermission::granted());
    harness.start(CROSS_MARK);
    harness.tap();

    let record = harness.record.lock();
    assert_eq!(record.labels, ["#2060E0"]);
    assert_eq!(record.fills, [Color::from_rgb(0x20, 0x60, 0xE0)]);
    assert_eq!(
        record.bounds,
        [PatchBounds {
            left: 100,
            top: 200,
            right: 150,
            bottom: 250
        }]
    );
    assert!(record.notices.is_empty());

    let camera = harness.camera.lock();
    assert_eq!(camera.binds.len(), 1);
    assert_eq!(camera.binds[0].target_resolution, TargetResolution::new(400, 800));
    assert_eq!(camera.captures, 1);
}

#[test]
fn capture_taker_thread_delivers_result() {
    init_logger();

    let mut harness = Harness::with_capture_taker(
        frame(),
        StaticPermission::granted(),
        Box::new(CaptureTakerThread::new()),
    );
    harness.start(CROSS_MARK);
    harness.tap();
    harness.tap();

    assert_eq!(harness.record.lock().labels, ["#2060E0", "#2060E0"]);

    harness.send(LifecycleEvent::Destroyed);
    assert!(harness.event_loop.is_exited());
}

#[test]
fn permission_denied() {
    init_logger();

    let mut harness = Harness::new(frame(), StaticPermission::denied());
    harness.start(CROSS_MARK);
    harness.tap();

    let record = harness.record.lock();
    assert_eq!(record.notices, ["Permission denied"]);
    assert!(record.labels.is_empty());

    let camera = harness.camera.lock();
    assert!(camera.binds.is_empty());
    assert_eq!(camera.captures, 0);
}

#[test]
fn tap_before_start_is_ignored() {
    init_logger();

    let mut harness = Harness::new(frame(), StaticPermission::granted());
    harness.proxy.send_event(layout(CROSS_MARK)).unwrap();
    harness.tap();

    assert!(harness.record.lock().labels.is_empty());
    assert_eq!(harness.camera.lock().captures, 0);
}

#[test]
fn tap_while_capturing_is_ignored() {
    init_logger();

    let mut harness = Harness::new(frame(), StaticPermission::granted());
    harness.start(CROSS_MARK);

    // Both taps are queued before either is handled
    harness.proxy.send_event(ScreenEvent::CaptureTapped).unwrap();
    harness.tap();

    assert_eq!(harness.record.lock().labels, ["#2060E0"]);
    assert_eq!(harness.camera.lock().captures, 1);
}

#[test]
fn cross_mark_outside_image() {
    init_logger();

    let mut harness = Harness::new(frame(), StaticPermission::granted());
    harness.start(ScreenRegion::new(500, 900, 520, 920));
    harness.tap();

    let record = harness.record.lock();
    assert_eq!(record.notices, ["Cross mark is outside the captured image"]);
    assert!(record.labels.is_empty());
    assert!(record.bounds.is_empty());
}

#[test]
fn no_suitable_color_keeps_previous_label() {
    init_logger();

    let mut harness = Harness::new(frame(), StaticPermission::granted());
    harness.start(CROSS_MARK);
    harness.tap();

    harness.send(layout(ScreenRegion::new(300, 600, 350, 650)));
    harness.tap();

    let record = harness.record.lock();
    assert_eq!(record.labels, ["#2060E0"]);
    assert_eq!(record.fills, [Color::from_rgb(0x20, 0x60, 0xE0)]);
    assert_eq!(record.notices, ["No suitable color found"]);
    assert_eq!(record.bounds.len(), 2);
}

#[test]
fn sampling_uses_indicator_when_frame_arrives() {
    init_logger();

    let mut harness = Harness::new(frame(), StaticPermission::granted());
    harness.start(CROSS_MARK);

    // The frame is delivered after the layout change queued behind the tap
    harness.proxy.send_event(ScreenEvent::CaptureTapped).unwrap();
    harness
        .proxy
        .send_event(layout(ScreenRegion::new(300, 600, 350, 650)))
        .unwrap();
    harness.event_loop.run_until_idle();

    let record = harness.record.lock();
    assert_eq!(
        record.bounds,
        [PatchBounds {
            left: 300,
            top: 600,
            right: 350,
            bottom: 650
        }]
    );
    assert_eq!(record.notices, ["No suitable color found"]);
    assert!(record.labels.is_empty());
    drop(record);

    assert_eq!(harness.camera.lock().captures, 1);
}

#[test]
fn failed_bind_leaves_screen_usable() {
    init_logger();

    let camera = frame().with_lens_facing(LensFacing::Front);
    let mut harness = Harness::new(camera, StaticPermission::granted());
    harness.start(CROSS_MARK);
    harness.tap();

    let record = harness.record.lock();
    assert_eq!(record.notices, ["Camera setup failed"]);
    assert!(record.labels.is_empty());
    drop(record);

    assert_eq!(harness.camera.lock().captures, 0);
    assert!(!harness.event_loop.is_exited());
}

#[test]
fn capture_failure_is_not_fatal() {
    init_logger();

    let camera = StillFrameCamera::from_file("does-not-exist.png", 0);
    let mut harness = Harness::new(camera, StaticPermission::granted());
    harness.start(CROSS_MARK);
    harness.tap();
    harness.tap();

    let record = harness.record.lock();
    assert_eq!(record.notices, ["Photo capture failed", "Photo capture failed"]);
    assert!(record.labels.is_empty());
}

#[test]
fn paused_screen_does_not_capture() {
    init_logger();

    let mut harness = Harness::new(frame(), StaticPermission::granted());
    harness.start(CROSS_MARK);

    harness.send(LifecycleEvent::Paused);
    harness.tap();
    assert_eq!(harness.camera.lock().captures, 0);
    assert!(harness.record.lock().labels.is_empty());

    harness.send(LifecycleEvent::Resumed);
    harness.tap();
    assert_eq!(harness.camera.lock().captures, 1);
    assert_eq!(harness.record.lock().labels, ["#2060E0"]);
    assert_eq!(harness.camera.lock().binds.len(), 2);
}

#[test]
fn rotation_rebinds_session() {
    init_logger();

    let mut harness = Harness::new(frame(), StaticPermission::granted());
    harness.start(CROSS_MARK);
    harness.send(LifecycleEvent::DisplayRotated(Rotation::Rotation90));
    harness.tap();

    let camera = harness.camera.lock();
    assert_eq!(camera.binds.len(), 2);
    assert_eq!(camera.binds[1].target_rotation, Rotation::Rotation90);
    drop(camera);

    assert_eq!(harness.record.lock().labels, ["#2060E0"]);
}

#[test]
fn events_after_destroy_are_ignored() {
    init_logger();

    let mut harness = Harness::new(frame(), StaticPermission::granted());
    harness.start(CROSS_MARK);
    harness.send(LifecycleEvent::Destroyed);
    assert!(harness.event_loop.is_exited());

    harness.tap();
    harness.send(LifecycleEvent::Started);

    assert!(harness.record.lock().labels.is_empty());
    assert_eq!(harness.camera.lock().captures, 0);
    assert_eq!(harness.camera.lock().binds.len(), 1);
}

#[test]
fn dropping_loop_destroys_screen() {
    init_logger();

    let mut harness = Harness::new(frame(), StaticPermission::granted());
    harness.start(CROSS_MARK);

    let Harness {
        event_loop, proxy, ..
    } = harness;
    drop(event_loop);

    assert!(proxy.send_event(ScreenEvent::CaptureTapped).is_err());
}
