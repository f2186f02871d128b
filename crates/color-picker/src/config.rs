use std::{
    fs, io,
    path::{Path, PathBuf},
};

use camera_provider::{DisplayMetrics, Rotation, TargetResolution};
use color_picker::{Layout, ScreenRegion, region_sampler::DEFAULT_PATCH_DP};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use utilities::directories::config_dir;

const FILE_NAME: &str = "color-picker.toml";

/// Settings read from `color-picker.toml` in the config directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The display the screen is shown on.
    pub display: DisplayConfig,
    /// Where the views sit on the display.
    pub layout: LayoutConfig,
    /// Edge length of the sampled patch in density-independent units.
    pub patch_dp: u32,
    /// The frame the stand-in camera returns.
    pub frame: FrameConfig,
}

/// Display size in pixels and its rotation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixels per density-independent unit.
    pub density: f32,
    /// Clockwise rotation, one of 0, 90, 180 or 270.
    pub rotation_degrees: u32,
}

/// Sizes are `[width, height]`, the indicator is `[left, top, right, bottom]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Size of the root view.
    pub root: [u32; 2],
    /// Size of the camera preview.
    pub preview: [u32; 2],
    /// Cross mark bounds in root view coordinates.
    pub indicator: [i32; 4],
}

/// The still frame served in place of a camera.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FrameConfig {
    /// Encoded image to serve, the command line path takes precedence.
    pub path: Option<PathBuf>,
    /// Clockwise rotation needed to show the frame upright.
    pub rotation_degrees: u32,
}

impl Config {
    pub fn try_load_config() -> Result<Option<Self>, ConfigError> {
        Self::load_from(&Self::file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) => {
                if error.kind() == io::ErrorKind::NotFound {
                    return Ok(None);
                }

                return Err(ConfigError::Read(error));
            }
        };

        let config: Self = toml::from_str(&contents)?;

        Ok(Some(config))
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)?;

        fs::write(path, toml_string.as_bytes()).map_err(ConfigError::Write)
    }

    pub fn file_path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir().map_err(ConfigError::Directory)?.join(FILE_NAME))
    }

    pub fn display_metrics(&self) -> DisplayMetrics {
        DisplayMetrics {
            width_pixels: self.display.width,
            height_pixels: self.display.height,
            density: self.display.density,
        }
    }

    pub fn display_rotation(&self) -> Rotation {
        Rotation::from_degrees(self.display.rotation_degrees).unwrap_or_else(|| {
            warn!(
                "Display rotation of {}° is not a multiple of 90, using 0°",
                self.display.rotation_degrees
            );
            Rotation::Rotation0
        })
    }

    pub fn layout(&self) -> Layout {
        let [root_width, root_height] = self.layout.root;
        let [preview_width, preview_height] = self.layout.preview;
        let [left, top, right, bottom] = self.layout.indicator;

        Layout {
            root: TargetResolution::new(root_width, root_height),
            preview: TargetResolution::new(preview_width, preview_height),
            indicator: ScreenRegion::new(left, top, right, bottom),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            layout: LayoutConfig::default(),
            patch_dp: DEFAULT_PATCH_DP,
            frame: FrameConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let metrics = DisplayMetrics::default();

        Self {
            width: metrics.width_pixels,
            height: metrics.height_pixels,
            density: metrics.density,
            rotation_degrees: 0,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        // A 4:3 preview across the top of a 1080x2340 display with the cross mark centered
        Self {
            root: [1080, 2340],
            preview: [1080, 1440],
            indicator: [474, 654, 606, 786],
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to find the config directory:\n{0}")]
    Directory(#[source] io::Error),

    #[error("Failed to read the config file:\n{0}")]
    Read(#[source] io::Error),

    #[error("Failed to deserialize the config file:\n{0}")]
    Deserialize(#[from] toml::de::Error),

    #[error("Failed to serialize the config:\n{0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write the config file:\n{0}")]
    Write(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use std::{env, fs, path::PathBuf};

    use camera_provider::{Rotation, TargetResolution};
    use color_picker::ScreenRegion;

    use super::{Config, ConfigError};

    fn scratch_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("color-picker-{}-{name}.toml", std::process::id()))
    }

    #[test]
    fn save_then_load() {
        let path = scratch_path("save-then-load");

        let mut config = Config::default();
        config.patch_dp = 30;
        config.frame.path = Some(PathBuf::from("frame.jpg"));
        config.frame.rotation_degrees = 90;

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, Some(config));
    }

    #[test]
    fn missing_file() {
        let path = scratch_path("missing");
        assert!(matches!(Config::load_from(&path), Ok(None)));
    }

    #[test]
    fn partial_file_uses_defaults() {
        let config: Config = toml::from_str("patch_dp = 10\n[display]\ndensity = 2.0\n").unwrap();

        assert_eq!(config.patch_dp, 10);
        assert_eq!(config.display.density, 2.0);
        assert_eq!(config.display.width, 1080);
        assert_eq!(config.layout, Config::default().layout);
        assert_eq!(config.frame.path, None);
    }

    #[test]
    fn invalid_file() {
        let path = scratch_path("invalid");
        fs::write(&path, "patch_dp = \"large\"").unwrap();

        let result = Config::load_from(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn conversions() {
        let mut config = Config::default();
        config.display.rotation_degrees = 450;
        config.layout.indicator = [100, 200, 150, 250];

        assert_eq!(config.display_rotation(), Rotation::Rotation90);

        let layout = config.layout();
        assert_eq!(layout.root, TargetResolution::new(1080, 2340));
        assert_eq!(layout.indicator, ScreenRegion::new(100, 200, 150, 250));

        config.display.rotation_degrees = 45;
        assert_eq!(config.display_rotation(), Rotation::Rotation0);
    }
}
