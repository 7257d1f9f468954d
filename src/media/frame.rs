// SPDX-License-Identifier: MPL-2.0
//! Decorative frame drawn over every render.
//!
//! The frame is loaded once at startup and shared read-only afterwards.
//! A built-in ring frame is compiled into the binary; a configured file
//! (raster or SVG) replaces it.

use super::image::{decode_upright, is_svg_path, premultiplied_pixmap, rasterize_svg};
use crate::error::{Error, Result};
use image_rs::GenericImageView;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tiny_skia::Pixmap;

#[derive(RustEmbed)]
#[folder = "assets/frames/"]
struct FrameAssets;

/// File name of the built-in frame inside the embedded assets.
pub const DEFAULT_FRAME_FILE: &str = "ring.svg";

/// Immutable frame overlay, cheap to clone.
#[derive(Debug, Clone)]
pub struct FrameOverlay {
    pixmap: Arc<Pixmap>,
}

impl FrameOverlay {
    #[must_use]
    pub fn from_pixmap(pixmap: Pixmap) -> Self {
        Self {
            pixmap: Arc::new(pixmap),
        }
    }

    /// The built-in frame rasterized at `raster_size`×`raster_size`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Svg`] if the embedded asset is missing or invalid.
    pub fn embedded(raster_size: u32) -> Result<Self> {
        let data = embedded_frame_svg()
            .ok_or_else(|| Error::Svg(format!("embedded frame {DEFAULT_FRAME_FILE} missing")))?;
        Ok(Self::from_pixmap(rasterize_svg(&data, Some(raster_size))?))
    }

    /// Loads a frame from disk.
    ///
    /// SVG frames are rasterized at `raster_size` so large exports stay
    /// sharp; raster frames keep their own resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn load(path: &Path, raster_size: u32) -> Result<Self> {
        let bytes = fs::read(path)?;
        if is_svg_path(path) {
            return Ok(Self::from_pixmap(rasterize_svg(&bytes, Some(raster_size))?));
        }

        let image = decode_upright(&bytes)?;
        let (width, height) = image.dimensions();
        let pixmap = premultiplied_pixmap(width, height, image.to_rgba8().as_raw())?;
        Ok(Self::from_pixmap(pixmap))
    }

    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }
}

/// Raw bytes of the built-in frame SVG.
#[must_use]
pub fn embedded_frame_svg() -> Option<Cow<'static, [u8]>> {
    FrameAssets::get(DEFAULT_FRAME_FILE).map(|file| file.data)
}

/// Resolves the startup frame.
///
/// `None` selects the built-in frame. A configured frame that fails to load
/// degrades to no frame at all; the failure is logged and never fatal.
#[must_use]
pub fn resolve_frame(path: Option<&Path>, raster_size: u32) -> Option<FrameOverlay> {
    let result = match path {
        Some(path) => FrameOverlay::load(path, raster_size),
        None => FrameOverlay::embedded(raster_size),
    };

    match result {
        Ok(frame) => {
            tracing::debug!(
                width = frame.width(),
                height = frame.height(),
                "frame overlay loaded"
            );
            Some(frame)
        }
        Err(err) => {
            tracing::warn!(path = ?path, error = %err, "frame overlay unavailable, exports will have no frame");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn embedded_frame_rasterizes_at_requested_size() {
        let frame = FrameOverlay::embedded(256).expect("embedded frame");
        assert_eq!(frame.width(), 256);
        assert_eq!(frame.height(), 256);
        // The ring sits on the edge; the middle is transparent.
        let center = frame.pixmap().pixel(128, 128).expect("pixel");
        assert_eq!(center.alpha(), 0);
    }

    #[test]
    fn raster_frame_keeps_native_size() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("frame.png");
        RgbaImage::from_pixel(40, 30, Rgba([0, 255, 0, 255]))
            .save(&path)
            .expect("write frame");

        let frame = FrameOverlay::load(&path, 1024).expect("frame");
        assert_eq!((frame.width(), frame.height()), (40, 30));
    }

    #[test]
    fn svg_frame_is_stretched_to_square() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("frame.svg");
        fs::write(
            &path,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10"><rect width="20" height="10" fill="red"/></svg>"#,
        )
        .expect("write svg");

        let frame = FrameOverlay::load(&path, 64).expect("frame");
        assert_eq!((frame.width(), frame.height()), (64, 64));
    }

    #[test]
    fn missing_configured_frame_degrades_to_none() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("nope.png");
        assert!(resolve_frame(Some(&missing), 128).is_none());
    }

    #[test]
    fn no_configured_frame_uses_embedded() {
        assert!(resolve_frame(None, 64).is_some());
    }
}
