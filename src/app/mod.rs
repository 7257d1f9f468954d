// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the editor surface to the window: it turns widget
//! and pointer messages into editor operations and runs decoding, face
//! detection and export as background tasks whose results come back as
//! messages. Only the update loop mutates the editor.

mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::SharedFaceDetector;
use crate::config::defaults::DEFAULT_CANVAS_SIZE;
use crate::config::{self, QualityPreset};
use crate::editor::Editor;
use crate::infrastructure;
use crate::media::frame::resolve_frame;
use crate::media::image::pixmap_to_rgba;
use crate::media::ExportResolution;
use crate::ui::design_tokens::spacing;
use iced::widget::image;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Height of everything around the preview: toolbar, zoom row, presets,
/// download button, status line and the gaps between them.
const CONTROLS_HEIGHT: f32 = 220.0;

pub const WINDOW_DEFAULT_HEIGHT: f32 = 820.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 640.0;
/// The default preview plus the window padding on both sides.
pub const MIN_WINDOW_WIDTH: f32 = DEFAULT_CANVAS_SIZE as f32 + 2.0 * spacing::LG;
pub const MIN_WINDOW_HEIGHT: f32 = DEFAULT_CANVAS_SIZE as f32 + 2.0 * spacing::LG + CONTROLS_HEIGHT;

/// Status line shown under the controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// Root Iced application state.
pub struct App {
    editor: Editor,
    detector: SharedFaceDetector,
    presets: Vec<QualityPreset>,
    resolution: ExportResolution,
    export_dir: PathBuf,
    /// Rendered preview, refreshed after every editor change.
    preview: Option<image::Handle>,
    status: Option<Status>,
    loading: bool,
    exporting: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("loaded", &self.editor.is_loaded())
            .field("resolution", &self.resolution)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings
#[must_use]
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state from configuration and CLI flags and
    /// optionally kicks off loading the image named on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        if let Some(warning) = &config_warning {
            tracing::warn!("{warning}");
        }

        let canvas_size = config.canvas_size();
        let presets = config.quality_presets();
        let raster_size = presets
            .iter()
            .map(|preset| preset.size)
            .max()
            .unwrap_or(canvas_size)
            .max(canvas_size);

        let frame_path = flags.frame.as_deref().or_else(|| config.frame_path());
        let frame = resolve_frame(frame_path, raster_size);

        let model_path = flags.face_model.as_deref().or_else(|| config.face_model_path());
        let detector = infrastructure::face_detector(model_path);

        let mut app = App {
            editor: Editor::new(canvas_size, config.zoom_range(), frame),
            detector,
            presets,
            resolution: config.default_resolution(),
            export_dir: config.export_directory(),
            preview: None,
            status: config_warning.map(Status::Error),
            loading: false,
            exporting: false,
        };
        app.refresh_preview();

        tracing::info!(
            canvas = canvas_size,
            export_dir = %app.export_dir.display(),
            face_detector = app.detector.name(),
            "editor ready"
        );

        let task = match flags.file_path {
            Some(path) => update::load_image(&mut app, path),
            None => Task::none(),
        };
        (app, task)
    }

    fn title(&self) -> String {
        "DP Framer".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Re-renders the preview from the editor state.
    fn refresh_preview(&mut self) {
        match self.editor.preview() {
            Ok(pixmap) => {
                self.preview = Some(image::Handle::from_rgba(
                    pixmap.width(),
                    pixmap.height(),
                    pixmap_to_rgba(&pixmap),
                ));
            }
            Err(err) => {
                tracing::error!(error = %err, "preview render failed");
                self.preview = None;
            }
        }
    }

    #[must_use]
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    #[must_use]
    pub fn resolution(&self) -> ExportResolution {
        self.resolution
    }

    #[must_use]
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }
}

#[cfg(test)]
mod tests;
