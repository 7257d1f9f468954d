// SPDX-License-Identifier: MPL-2.0
//! Compositing of the framed picture.
//!
//! A [`Composition`] is an owned snapshot of everything a render needs, so
//! the same value drives the live preview on the UI thread and a
//! high-resolution export on a worker thread.
#![allow(clippy::cast_precision_loss)]

use super::frame::FrameOverlay;
use super::image::SourceImage;
use crate::domain::geometry;
use crate::domain::view::ViewState;
use crate::error::{Error, Result};
use tiny_skia::{FillRule, FilterQuality, Mask, PathBuilder, Pixmap, PixmapPaint, Transform};

/// Snapshot of the editor surface.
#[derive(Debug, Clone)]
pub struct Composition {
    pub source: SourceImage,
    pub frame: Option<FrameOverlay>,
    pub view: ViewState,
    /// Side of the live canvas the offsets are expressed in.
    pub canvas_size: u32,
}

impl Composition {
    /// Renders the composition onto a fresh `target_size` square.
    ///
    /// The image is clipped to the inscribed circle; the frame is drawn
    /// unclipped over the whole square.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] for a zero-sized target.
    pub fn render(&self, target_size: u32) -> Result<Pixmap> {
        let mut pixmap = blank_surface(target_size)?;
        let mask = viewport_mask(target_size)?;

        let rect = geometry::draw_rect(
            &self.view,
            self.source.width(),
            self.source.height(),
            self.canvas_size,
            target_size,
        );
        let image_transform = Transform::from_row(
            rect.width / self.source.width() as f32,
            0.0,
            0.0,
            rect.height / self.source.height() as f32,
            rect.x,
            rect.y,
        );
        pixmap.draw_pixmap(
            0,
            0,
            self.source.pixmap().as_ref(),
            &PixmapPaint {
                quality: FilterQuality::Bicubic,
                ..PixmapPaint::default()
            },
            image_transform,
            Some(&mask),
        );

        if let Some(frame) = &self.frame {
            draw_frame(&mut pixmap, frame, target_size);
        }

        Ok(pixmap)
    }
}

/// Cleared, fully transparent square surface.
///
/// # Errors
///
/// Returns [`Error::Render`] for a zero-sized target.
pub fn blank_surface(target_size: u32) -> Result<Pixmap> {
    Pixmap::new(target_size, target_size)
        .ok_or_else(|| Error::Render(format!("cannot allocate {target_size}x{target_size} surface")))
}

fn viewport_mask(target_size: u32) -> Result<Mask> {
    let circle = geometry::viewport_circle(target_size);
    let path = PathBuilder::from_circle(circle.center.x, circle.center.y, circle.radius)
        .ok_or_else(|| Error::Render("invalid viewport circle".into()))?;

    let mut mask = Mask::new(target_size, target_size)
        .ok_or_else(|| Error::Render(format!("cannot allocate {target_size}x{target_size} mask")))?;
    mask.fill_path(&path, FillRule::Winding, true, Transform::identity());
    Ok(mask)
}

fn draw_frame(pixmap: &mut Pixmap, frame: &FrameOverlay, target_size: u32) {
    let side = target_size as f32;
    let transform = Transform::from_scale(
        side / frame.width() as f32,
        side / frame.height() as f32,
    );
    pixmap.draw_pixmap(
        0,
        0,
        frame.pixmap().as_ref(),
        &PixmapPaint {
            quality: FilterQuality::Bicubic,
            ..PixmapPaint::default()
        },
        transform,
        None,
    );
}
