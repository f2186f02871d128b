//! # Color Picker
//! Picks the color under the cross mark of a still frame served in place of a camera.
//!

#![allow(clippy::std_instead_of_alloc)]

use std::path::PathBuf;

use camera_provider::{CameraSession, PermissionPrompt, StaticPermission, StillFrameCamera};
use color_picker::{
    LifecycleEvent, ScreenEvent, ScreenEventLoop, ScreenSetup,
    capture_taker::CaptureTakerThread,
    presentation::{ColorView, JsonView, TerminalView},
    region_sampler::RegionSampler,
};
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use config::{Config, ConfigError};
use logger::setup_logger;
use tracing::{info, info_span, warn};
use utilities::failure::{Failure, Ignore, log_and_panic};

mod config;
mod logger;

/// The Cargo package version.
#[cfg(not(debug_assertions))]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The Cargo package version or '0.0.0' if a non-release build.
#[cfg(debug_assertions)]
pub const VERSION: &str = "0.0.0";

/// If this instance should have debug enabled.
pub fn should_debug() -> bool {
    std::env::args().any(|arg| arg.eq("--debug"))
}

/// Command line options besides `--debug`.
struct Args {
    deny_camera: bool,
    json: bool,
    frame: Option<PathBuf>,
}

impl Args {
    fn from_env() -> Self {
        let mut args = Self {
            deny_camera: false,
            json: false,
            frame: None,
        };

        for arg in std::env::args().skip(1) {
            match arg.as_str() {
                "--deny-camera" => args.deny_camera = true,
                "--json" => args.json = true,
                "--debug" => {}
                flag if flag.starts_with("--") => warn!("Ignoring unknown flag '{flag}'"),
                path => args.frame = Some(PathBuf::from(path)),
            }
        }

        args
    }
}

fn main() {
    // Set up logger
    let _logger_guards = setup_logger(should_debug());

    // Log application start
    let _span = info_span!("[Main Thread]").entered();
    info!("Color Picker v{}", VERSION);

    let args = Args::from_env();

    // Load config
    let config = {
        let maybe_config = match Config::try_load_config() {
            Ok(maybe_config) => maybe_config,
            Err(ConfigError::Deserialize(error)) => {
                warn!("Could not deserialize config file:\n{error}");
                info!("Resetting config file.");
                None
            }
            Err(error) => log_and_panic(error, "Could not load the config file"),
        };

        match maybe_config {
            Some(config) => config,
            None => {
                let config = Config::default();
                config.save().report("Could not save the config file");
                config
            }
        }
    };

    let Some(frame_path) = args.frame.or_else(|| config.frame.path.clone()) else {
        warn!("Exiting: No frame to capture, pass a path or set frame.path in the config file.");
        return;
    };

    // Build the screen
    let mut event_loop = {
        let metrics = config.display_metrics();
        let camera = StillFrameCamera::from_file(frame_path, config.frame.rotation_degrees);

        let permission: Box<dyn PermissionPrompt> = if args.deny_camera {
            Box::new(StaticPermission::denied())
        } else {
            Box::new(StaticPermission::granted())
        };

        let view: Box<dyn ColorView> = if args.json {
            Box::new(JsonView::stdout())
        } else {
            Box::new(TerminalView::stdout())
        };

        ScreenEventLoop::new(ScreenSetup {
            session: CameraSession::new(camera, metrics),
            permission,
            capture_taker: Box::new(CaptureTakerThread::new()),
            view,
            sampler: RegionSampler::new(&metrics, config.patch_dp),
            display_rotation: config.display_rotation(),
        })
    };

    // Drive one session: start, capture, destroy
    let proxy = event_loop.create_proxy();

    proxy.send_event(config.layout()).ignore();
    proxy.send_event(LifecycleEvent::Started).ignore();
    event_loop.run_until_idle();

    proxy.send_event(ScreenEvent::CaptureTapped).ignore();
    event_loop.run_until_idle();

    proxy.send_event(LifecycleEvent::Destroyed).ignore();
    event_loop.run();
}
