// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::media::FaceBox;
use crate::domain::view::Generation;
use crate::error::Error;
use crate::media::SourceImage;
use crate::ui::pointer::PointerMessage;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show the open file dialog.
    OpenFileDialog,
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A background decode finished.
    ImageLoaded {
        path: PathBuf,
        result: Result<SourceImage, Error>,
    },
    /// Face detection for the load tagged `generation` finished.
    FacesDetected {
        generation: Generation,
        /// Empty when detection is unavailable or failed.
        faces: Vec<FaceBox>,
    },
    ZoomChanged(f32),
    /// A quality preset was picked; carries its side in pixels.
    QualitySelected(u32),
    ExportRequested,
    ExportCompleted(Result<Option<PathBuf>, Error>),
    /// Pointer input on the preview.
    Pointer(PointerMessage),
    ResetView,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `DP_FRAMER_CONFIG_DIR` environment variable.
    pub config_dir: Option<PathBuf>,
    /// Frame overlay replacing the configured one.
    pub frame: Option<PathBuf>,
    /// Face model replacing the configured one.
    pub face_model: Option<PathBuf>,
    /// Optional image path to load on startup.
    pub file_path: Option<PathBuf>,
}
