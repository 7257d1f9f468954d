// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Decoding, face detection and export run on the blocking thread pool via
//! `Task::perform`; everything else mutates the editor directly.

use super::{App, Message, Status};
use crate::domain::media::FaceBox;
use crate::domain::view::Generation;
use crate::error::Error;
use crate::media::image::{load_source_image, SUPPORTED_EXTENSIONS};
use crate::editor::detect_faces;
use crate::media::{ExportResolution, SourceImage};
use crate::ui::pointer::PointerMessage;
use iced::Task;
use std::path::PathBuf;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::OpenFileDialog => open_file_dialog(),
        Message::OpenFileDialogResult(Some(path)) => load_image(app, path),
        Message::OpenFileDialogResult(None) => Task::none(),
        Message::ImageLoaded { path, result } => handle_image_loaded(app, path, result),
        Message::FacesDetected { generation, faces } => {
            handle_faces_detected(app, generation, &faces);
            Task::none()
        }
        Message::ZoomChanged(value) => {
            if app.editor.is_loaded() {
                app.editor.set_zoom(value);
                app.refresh_preview();
            }
            Task::none()
        }
        Message::QualitySelected(size) => {
            handle_quality_selected(app, size);
            Task::none()
        }
        Message::ExportRequested => start_export(app),
        Message::ExportCompleted(result) => {
            handle_export_completed(app, result);
            Task::none()
        }
        Message::Pointer(pointer) => {
            handle_pointer(app, pointer);
            Task::none()
        }
        Message::ResetView => {
            if app.editor.is_loaded() {
                app.editor.reset_view();
                app.refresh_preview();
            }
            Task::none()
        }
    }
}

fn open_file_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title("Open image")
                .add_filter("Images", SUPPORTED_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Decodes `path` off the UI thread.
pub(super) fn load_image(app: &mut App, path: PathBuf) -> Task<Message> {
    app.loading = true;
    app.status = Some(Status::Info(format!("Loading {}…", path.display())));

    Task::perform(
        async move {
            let decode_path = path.clone();
            let result = tokio::task::spawn_blocking(move || load_source_image(&decode_path))
                .await
                .map_err(|e| Error::Io(format!("Loading task failed: {e}")))
                .and_then(|result| result);
            (path, result)
        },
        |(path, result)| Message::ImageLoaded { path, result },
    )
}

fn handle_image_loaded(
    app: &mut App,
    path: PathBuf,
    result: Result<SourceImage, Error>,
) -> Task<Message> {
    app.loading = false;
    let source = match result {
        Ok(source) => source,
        Err(err) => {
            // Silent in the UI: the previous image, if any, stays on screen.
            tracing::warn!(path = %path.display(), error = %err, "failed to load image");
            app.status = None;
            return Task::none();
        }
    };

    tracing::info!(
        path = %path.display(),
        width = source.width(),
        height = source.height(),
        "image loaded"
    );
    let raw = source.raw().clone();
    let generation = app.editor.load(source);
    app.status = None;
    app.refresh_preview();

    if !app.detector.is_available() {
        return Task::none();
    }

    let detector = app.detector.clone();
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || detect_faces(&*detector, &raw))
                .await
                .unwrap_or_else(|err| {
                    tracing::debug!(error = %err, "face detection task failed");
                    Vec::new()
                })
        },
        move |faces| Message::FacesDetected { generation, faces },
    )
}

fn handle_faces_detected(app: &mut App, generation: Generation, faces: &[FaceBox]) {
    tracing::debug!(count = faces.len(), "faces detected");
    if app.editor.apply_faces(generation, faces) {
        app.refresh_preview();
    }
}

fn handle_quality_selected(app: &mut App, size: u32) {
    let known = app.presets.iter().any(|preset| preset.size == size);
    match ExportResolution::new(size) {
        Some(resolution) if known => app.resolution = resolution,
        _ => tracing::debug!(size, "ignoring unknown quality preset"),
    }
}

fn start_export(app: &mut App) -> Task<Message> {
    if app.exporting {
        return Task::none();
    }
    if !app.editor.is_loaded() {
        app.status = Some(Status::Info("Open an image first".to_string()));
        return Task::none();
    }

    app.exporting = true;
    app.status = Some(Status::Info(format!(
        "Exporting {}…",
        app.resolution.file_name()
    )));

    // Image and frame pixels are shared, so the clone only copies the view.
    let editor = app.editor.clone();
    let resolution = app.resolution;
    let directory = app.export_dir.clone();
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || editor.export(resolution, &directory))
            .await
            .map_err(|e| Error::Io(format!("Export task failed: {e}")))
            .and_then(|result| result)
        },
        Message::ExportCompleted,
    )
}

fn handle_export_completed(app: &mut App, result: Result<Option<PathBuf>, Error>) {
    app.exporting = false;
    app.status = match result {
        Ok(Some(path)) => Some(Status::Info(format!("Saved {}", path.display()))),
        Ok(None) => None,
        Err(err) => {
            tracing::error!(error = %err, "export failed");
            Some(Status::Error(format!("Export failed: {err}")))
        }
    };
}

fn handle_pointer(app: &mut App, pointer: PointerMessage) {
    match pointer {
        PointerMessage::Pressed { x, y } => app.editor.begin_drag(x, y),
        PointerMessage::Moved { x, y } => {
            if app.editor.continue_drag(x, y) {
                app.refresh_preview();
            }
        }
        PointerMessage::Released => app.editor.end_drag(),
    }
}
