// SPDX-License-Identifier: MPL-2.0
//! The editor surface.
//!
//! Owns the loaded image and its [`ViewState`] and answers every user
//! operation: load, zoom, drag, face centering, preview and export. The
//! editor is either empty or holds exactly one image; operations that need
//! an image are no-ops while empty.
//!
//! Rendering goes through [`Composition`], an owned snapshot, so the UI can
//! hand exports to a worker thread without sharing mutable state.

use std::path::{Path, PathBuf};

use crate::application::port::FaceDetector;
use crate::domain::geometry::{self, Point};
use crate::domain::media::{FaceBox, RawImage};
use crate::domain::view::{DragSession, Generation, ViewState, ZoomRange};
use crate::error::Result;
use crate::media::compose::{blank_surface, Composition};
use crate::media::export::{export_to_directory, ExportResolution};
use crate::media::frame::FrameOverlay;
use crate::media::image::{load_source_image, SourceImage};
use tiny_skia::Pixmap;

#[derive(Debug, Clone)]
struct Loaded {
    source: SourceImage,
    view: ViewState,
    /// Set once the user zooms or pans this image.
    adjusted: bool,
}

/// Editor state: an optional image, its view transform and drag tracking.
#[derive(Debug, Clone)]
pub struct Editor {
    canvas_size: u32,
    zoom_range: ZoomRange,
    frame: Option<FrameOverlay>,
    content: Option<Loaded>,
    drag: DragSession,
    generation: Generation,
}

impl Editor {
    /// Empty editor for a square canvas of `canvas_size` pixels.
    #[must_use]
    pub fn new(canvas_size: u32, zoom_range: ZoomRange, frame: Option<FrameOverlay>) -> Self {
        Self {
            canvas_size: canvas_size.max(1),
            zoom_range,
            frame,
            content: None,
            drag: DragSession::default(),
            generation: Generation::INITIAL,
        }
    }

    #[must_use]
    pub fn canvas_size(&self) -> u32 {
        self.canvas_size
    }

    #[must_use]
    pub fn zoom_range(&self) -> ZoomRange {
        self.zoom_range
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.content.is_some()
    }

    /// View transform of the loaded image.
    #[must_use]
    pub fn view_state(&self) -> Option<&ViewState> {
        self.content.as_ref().map(|loaded| &loaded.view)
    }

    /// The loaded image.
    #[must_use]
    pub fn source(&self) -> Option<&SourceImage> {
        self.content.as_ref().map(|loaded| &loaded.source)
    }

    /// Token of the most recent load.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Current zoom multiplier, 1 while empty.
    #[must_use]
    pub fn user_scale(&self) -> f32 {
        self.view_state()
            .map_or(crate::domain::view::zoom::DEFAULT_USER_SCALE, |view| {
                view.user_scale
            })
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    /// Replaces the current image and resets the view.
    ///
    /// Returns the generation face-detection results must carry to be applied.
    pub fn load(&mut self, source: SourceImage) -> Generation {
        let view = ViewState::for_image(self.canvas_size, source.width(), source.height());
        self.content = Some(Loaded {
            source,
            view,
            adjusted: false,
        });
        self.drag.stop();
        self.generation = self.generation.next();
        tracing::debug!(
            generation = self.generation.value(),
            base_scale = view.base_scale,
            "image loaded into editor"
        );
        self.generation
    }

    /// Decodes `path` and loads it.
    ///
    /// # Errors
    ///
    /// Returns the decode error; the editor keeps its previous image.
    pub fn load_file(&mut self, path: &Path) -> Result<Generation> {
        let source = load_source_image(path)?;
        Ok(self.load(source))
    }

    /// Sets the zoom multiplier, clamped to the configured range.
    pub fn set_zoom(&mut self, value: f32) {
        let clamped = self.zoom_range.clamp(value);
        if let Some(loaded) = self.content.as_mut() {
            loaded.view.user_scale = clamped;
            loaded.adjusted = true;
        }
    }

    /// Starts a pan at canvas position `(x, y)`.
    pub fn begin_drag(&mut self, x: f32, y: f32) {
        if self.content.is_some() {
            self.drag.start(Point::new(x, y));
        }
    }

    /// Continues a pan; returns whether the offsets moved.
    pub fn continue_drag(&mut self, x: f32, y: f32) -> bool {
        let Some(loaded) = self.content.as_mut() else {
            return false;
        };
        match self.drag.advance(Point::new(x, y)) {
            Some(delta) => {
                loaded.view.pan_by(delta.x, delta.y);
                loaded.adjusted = true;
                true
            }
            None => false,
        }
    }

    pub fn end_drag(&mut self) {
        self.drag.stop();
    }

    /// Centers the viewport on the first face found in the image loaded as
    /// `generation`.
    ///
    /// Returns `false` and changes nothing when the generation is stale,
    /// the editor is empty, `faces` is empty, or the user already zoomed or
    /// panned this image.
    pub fn apply_faces(&mut self, generation: Generation, faces: &[FaceBox]) -> bool {
        if generation != self.generation {
            tracing::debug!(
                stale = generation.value(),
                current = self.generation.value(),
                "discarding stale face detection"
            );
            return false;
        }
        let (Some(loaded), Some(face)) = (self.content.as_mut(), faces.first()) else {
            return false;
        };
        if loaded.adjusted {
            tracing::debug!("view already adjusted, keeping user offsets");
            return false;
        }

        let offset = geometry::face_center_offset(
            face,
            loaded.source.width(),
            loaded.source.height(),
            loaded.view.base_scale,
        );
        loaded.view.set_offset(offset);
        true
    }

    /// Runs `detector` synchronously and applies its first face.
    ///
    /// Detection failures are swallowed; offsets stay where they were.
    pub fn auto_center_with(&mut self, detector: &dyn FaceDetector) -> bool {
        let Some(loaded) = self.content.as_ref() else {
            return false;
        };
        let faces = detect_faces(detector, loaded.source.raw());
        self.apply_faces(self.generation, &faces)
    }

    /// Back to the centered cover fit at zoom 1.
    pub fn reset_view(&mut self) {
        if let Some(loaded) = self.content.as_mut() {
            loaded.view.reset_transform();
        }
        self.drag.stop();
    }

    /// Owned snapshot for rendering off the UI thread.
    #[must_use]
    pub fn snapshot(&self) -> Option<Composition> {
        self.content.as_ref().map(|loaded| Composition {
            source: loaded.source.clone(),
            frame: self.frame.clone(),
            view: loaded.view,
            canvas_size: self.canvas_size,
        })
    }

    /// Renders onto a `target_size` square; cleared only while empty.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero-sized target.
    pub fn render(&self, target_size: u32) -> Result<Pixmap> {
        match self.snapshot() {
            Some(composition) => composition.render(target_size),
            None => blank_surface(target_size),
        }
    }

    /// Renders at canvas size.
    ///
    /// # Errors
    ///
    /// See [`Editor::render`].
    pub fn preview(&self) -> Result<Pixmap> {
        self.render(self.canvas_size)
    }

    /// Writes `uiu-app-forum-dp-<resolution>.png` into `directory`.
    ///
    /// Returns `Ok(None)` without touching the filesystem while empty.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering, encoding or writing fails.
    pub fn export(&self, resolution: ExportResolution, directory: &Path) -> Result<Option<PathBuf>> {
        match self.snapshot() {
            Some(composition) => export_to_directory(&composition, resolution, directory).map(Some),
            None => {
                tracing::debug!("export ignored, no image loaded");
                Ok(None)
            }
        }
    }
}

/// Best-effort detection: an unavailable or failing detector finds no faces.
///
/// Safe to call off the UI thread; pair the result with
/// [`Editor::apply_faces`] and the generation it was started for.
#[must_use]
pub fn detect_faces(detector: &dyn FaceDetector, image: &RawImage) -> Vec<FaceBox> {
    if !detector.is_available() {
        return Vec::new();
    }
    detector.detect(image).unwrap_or_else(|err| {
        tracing::debug!(detector = detector.name(), error = %err, "face detection failed");
        Vec::new()
    })
}
