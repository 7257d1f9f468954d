// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file in the config directory.
//!
//! # Configuration Sections
//!
//! - `[canvas]` - Live preview size
//! - `[zoom]` - Zoom slider bounds and steps
//! - `[export]` - Quality presets and output directory
//! - `[frame]` - Custom frame overlay
//! - `[face]` - Face detection model
//!
//! Every field is optional; the accessors on [`Config`] apply the defaults
//! from [`defaults`] and repair out-of-range values. The file is read-only
//! from the application's point of view.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass a directory to `load_with_override()` (the `--config-dir` flag)
//! 3. Set `DP_FRAMER_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use dp_framer::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("canvas is {} px", config.canvas_size());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::view::ZoomRange;
use crate::error::Result;
use crate::media::ExportResolution;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Live canvas settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CanvasConfig {
    /// Side of the square preview, in pixels.
    pub size: Option<u32>,
}

/// Zoom control settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ZoomConfig {
    pub min: Option<f32>,
    pub max: Option<f32>,
    pub step: Option<f32>,
    pub touch_step: Option<f32>,
    /// Use the coarser `touch_step` for the slider.
    pub touch_input: Option<bool>,
}

/// One selectable export resolution.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct QualityPreset {
    pub label: String,
    pub size: u32,
}

impl QualityPreset {
    #[must_use]
    pub fn new(label: impl Into<String>, size: u32) -> Self {
        Self {
            label: label.into(),
            size,
        }
    }

    /// The preset as an export resolution, `None` for a zero size.
    #[must_use]
    pub fn resolution(&self) -> Option<ExportResolution> {
        ExportResolution::new(self.size)
    }
}

/// Export settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    pub qualities: Option<Vec<QualityPreset>>,
    /// Size of the preset selected at startup.
    pub default_size: Option<u32>,
    /// Where exports are written.
    pub directory: Option<PathBuf>,
}

/// Frame overlay settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FrameConfig {
    /// Raster or SVG frame; the built-in ring is used when unset.
    pub path: Option<PathBuf>,
}

/// Face detection settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FaceConfig {
    pub enabled: Option<bool>,
    /// UltraFace-style ONNX model.
    pub model_path: Option<PathBuf>,
}

/// Application configuration with sectioned structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasConfig,
    pub zoom: ZoomConfig,
    pub export: ExportConfig,
    pub frame: FrameConfig,
    pub face: FaceConfig,
}

impl Config {
    /// Canvas side, clamped to a usable range.
    #[must_use]
    pub fn canvas_size(&self) -> u32 {
        self.canvas
            .size
            .unwrap_or(DEFAULT_CANVAS_SIZE)
            .clamp(MIN_CANVAS_SIZE, MAX_CANVAS_SIZE)
    }

    /// Zoom slider range, with the touch step when touch input is on.
    #[must_use]
    pub fn zoom_range(&self) -> ZoomRange {
        let zoom = &self.zoom;
        let range = ZoomRange::new(
            zoom.min.unwrap_or(DEFAULT_ZOOM_MIN),
            zoom.max.unwrap_or(DEFAULT_ZOOM_MAX),
            zoom.step.unwrap_or(DEFAULT_ZOOM_STEP),
            DEFAULT_ZOOM_RANGE,
        );
        if zoom.touch_input.unwrap_or(false) {
            range.with_step(zoom.touch_step.unwrap_or(DEFAULT_ZOOM_TOUCH_STEP))
        } else {
            range
        }
    }

    /// Usable quality presets.
    ///
    /// Presets with a zero or oversized side are dropped; an empty result
    /// falls back to the built-in HD and Ultra HD presets.
    #[must_use]
    pub fn quality_presets(&self) -> Vec<QualityPreset> {
        let presets: Vec<QualityPreset> = self
            .export
            .qualities
            .iter()
            .flatten()
            .filter(|preset| (1..=MAX_EXPORT_SIZE).contains(&preset.size))
            .cloned()
            .collect();

        if presets.is_empty() {
            default_quality_presets()
        } else {
            presets
        }
    }

    /// Resolution selected at startup.
    ///
    /// The configured default when it matches a preset, otherwise the first
    /// preset.
    #[must_use]
    pub fn default_resolution(&self) -> ExportResolution {
        let presets = self.quality_presets();
        let wanted = self.export.default_size.unwrap_or(DEFAULT_EXPORT_SIZE);
        presets
            .iter()
            .find(|preset| preset.size == wanted)
            .or_else(|| presets.first())
            .and_then(QualityPreset::resolution)
            .unwrap_or(ExportResolution::HD)
    }

    /// Directory exports are written to.
    #[must_use]
    pub fn export_directory(&self) -> PathBuf {
        self.export
            .directory
            .clone()
            .unwrap_or_else(paths::default_export_dir)
    }

    #[must_use]
    pub fn frame_path(&self) -> Option<&Path> {
        self.frame.path.as_deref()
    }

    /// Model to load, `None` when detection is disabled or unconfigured.
    #[must_use]
    pub fn face_model_path(&self) -> Option<&Path> {
        if self.face.enabled.unwrap_or(DEFAULT_FACE_ENABLED) {
            self.face.model_path.as_deref()
        } else {
            None
        }
    }

    /// Resolves relative paths against `base`.
    fn resolve_relative_paths(&mut self, base: &Path) {
        for path in [
            self.frame.path.as_mut(),
            self.face.model_path.as_mut(),
            self.export.directory.as_mut(),
        ]
        .into_iter()
        .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// The built-in HD and Ultra HD presets.
#[must_use]
pub fn default_quality_presets() -> Vec<QualityPreset> {
    vec![
        QualityPreset::new(HD_LABEL, HD_SIZE),
        QualityPreset::new(ULTRA_HD_LABEL, ULTRA_HD_SIZE),
    ]
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "Ignoring {}: {err}; using default settings",
                            path.display()
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// Relative paths inside the file are resolved against its directory.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML for
/// the expected sections.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let mut config: Config = toml::from_str(&content)?;
    if let Some(base) = path.parent() {
        config.resolve_relative_paths(base);
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    fn write_settings(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, content).expect("write settings");
        path
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.canvas_size(), 500);

        let zoom = config.zoom_range();
        assert_abs_diff_eq!(zoom.min(), 1.0);
        assert_abs_diff_eq!(zoom.max(), 3.0);
        assert_abs_diff_eq!(zoom.step(), 0.01);

        let presets = config.quality_presets();
        assert_eq!(presets, default_quality_presets());
        assert_eq!(config.default_resolution().pixels(), 1080);
        assert!(config.frame_path().is_none());
        assert!(config.face_model_path().is_none());
    }

    #[test]
    fn load_from_path_reads_all_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(
            temp_dir.path(),
            r#"
[canvas]
size = 400

[zoom]
min = 0.5
max = 4.0
step = 0.05

[export]
qualities = [{ label = "Small", size = 512 }, { label = "Print", size = 4096 }]
default_size = 4096
directory = "/tmp/exports"

[frame]
path = "/opt/frames/club.png"

[face]
enabled = true
model_path = "/opt/models/face.onnx"
"#,
        );

        let config = load_from_path(&path).expect("valid config");
        assert_eq!(config.canvas_size(), 400);
        assert_abs_diff_eq!(config.zoom_range().min(), 0.5);
        assert_abs_diff_eq!(config.zoom_range().max(), 4.0);
        assert_abs_diff_eq!(config.zoom_range().step(), 0.05);
        assert_eq!(config.quality_presets()[1], QualityPreset::new("Print", 4096));
        assert_eq!(config.default_resolution().pixels(), 4096);
        assert_eq!(config.export_directory(), PathBuf::from("/tmp/exports"));
        assert_eq!(config.frame_path(), Some(Path::new("/opt/frames/club.png")));
        assert_eq!(
            config.face_model_path(),
            Some(Path::new("/opt/models/face.onnx"))
        );
    }

    #[test]
    fn touch_input_uses_touch_step() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(temp_dir.path(), "[zoom]\ntouch_input = true\n");

        let config = load_from_path(&path).expect("valid config");
        assert_abs_diff_eq!(config.zoom_range().step(), 0.02);
    }

    #[test]
    fn disabled_face_detection_hides_model() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(
            temp_dir.path(),
            "[face]\nenabled = false\nmodel_path = \"/opt/face.onnx\"\n",
        );

        let config = load_from_path(&path).expect("valid config");
        assert!(config.face_model_path().is_none());
    }

    #[test]
    fn relative_paths_resolve_against_config_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(
            temp_dir.path(),
            "[frame]\npath = \"frame.svg\"\n[face]\nmodel_path = \"models/rfb.onnx\"\n",
        );

        let config = load_from_path(&path).expect("valid config");
        assert_eq!(config.frame_path(), Some(temp_dir.path().join("frame.svg").as_path()));
        assert_eq!(
            config.face_model_path(),
            Some(temp_dir.path().join("models/rfb.onnx").as_path())
        );
    }

    #[test]
    fn invalid_values_are_repaired() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(
            temp_dir.path(),
            r#"
[canvas]
size = 5

[zoom]
min = -2.0
max = 3.0

[export]
qualities = [{ label = "Broken", size = 0 }]
default_size = 333
"#,
        );

        let config = load_from_path(&path).expect("valid config");
        assert_eq!(config.canvas_size(), MIN_CANVAS_SIZE);
        assert_eq!(config.zoom_range(), DEFAULT_ZOOM_RANGE);
        assert_eq!(config.quality_presets(), default_quality_presets());
        assert_eq!(config.default_resolution().pixels(), 1080);
    }

    #[test]
    fn unknown_default_size_selects_first_preset() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(
            temp_dir.path(),
            "[export]\nqualities = [{ label = \"A\", size = 720 }]\ndefault_size = 9\n",
        );
        let config = load_from_path(&path).expect("valid config");
        assert_eq!(config.default_resolution().pixels(), 720);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_settings(temp_dir.path(), "[canvas]\nsize = \"big\"\n");
        assert!(matches!(load_from_path(&path), Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_settings(temp_dir.path(), "not = valid = toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_some(), "should warn about parse error");
        assert_eq!(config, Config::default());
    }
}
