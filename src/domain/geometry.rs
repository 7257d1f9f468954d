// SPDX-License-Identifier: MPL-2.0
//! Pure geometry for the circular viewport.
//!
//! Every function here is plain arithmetic over `f32` so the preview and
//! the export path share one set of numbers. Drawing happens elsewhere
//! (see `media::compose`); nothing in this module touches pixels.
#![allow(clippy::cast_precision_loss)]

use super::media::FaceBox;
use super::view::ViewState;

/// A point in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle where the source image lands on a target surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl DrawRect {
    /// Returns the rectangle scaled uniformly about the surface origin.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Circle inscribed in a square target surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Minimum uniform scale so an image of `width`×`height` covers a square of
/// side `canvas_size` with no empty margin.
///
/// At least one dimension matches the canvas exactly; the other overflows.
#[must_use]
pub fn cover_scale(canvas_size: u32, width: u32, height: u32) -> f32 {
    let canvas = canvas_size as f32;
    (canvas / width as f32).max(canvas / height as f32)
}

/// Ratio between a render target and the live canvas.
#[must_use]
pub fn target_ratio(canvas_size: u32, target_size: u32) -> f32 {
    target_size as f32 / canvas_size as f32
}

/// The circular viewport inscribed in a square target.
#[must_use]
pub fn viewport_circle(target_size: u32) -> Circle {
    let half = target_size as f32 / 2.0;
    Circle {
        center: Point::new(half, half),
        radius: half,
    }
}

/// Where the source image is drawn on a `target_size` square.
///
/// Offsets in `view` are canvas pixels; they are rescaled with the same
/// ratio as the image so an export is the preview magnified uniformly.
#[must_use]
pub fn draw_rect(
    view: &ViewState,
    image_width: u32,
    image_height: u32,
    canvas_size: u32,
    target_size: u32,
) -> DrawRect {
    let ratio = target_ratio(canvas_size, target_size);
    let scale = view.effective_scale() * ratio;
    let width = image_width as f32 * scale;
    let height = image_height as f32 * scale;
    let center = target_size as f32 / 2.0;

    DrawRect {
        x: center + view.offset_x * ratio - width / 2.0,
        y: center + view.offset_y * ratio - height / 2.0,
        width,
        height,
    }
}

/// Offsets that bring the center of `face` to the viewport center.
///
/// The face box is in source pixels; only the cover scale is applied, which
/// matches the state right after a load (user scale is 1 then).
#[must_use]
pub fn face_center_offset(
    face: &FaceBox,
    image_width: u32,
    image_height: u32,
    base_scale: f32,
) -> Point {
    let face_center = face.center();
    Point::new(
        -(face_center.x - image_width as f32 / 2.0) * base_scale,
        -(face_center.y - image_height as f32 / 2.0) * base_scale,
    )
}
