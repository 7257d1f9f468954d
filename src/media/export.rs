// SPDX-License-Identifier: MPL-2.0
//! Export of the framed picture.
//!
//! This module renders a [`Composition`] at the requested resolution and
//! writes it as a lossless PNG using the `image` crate.

use super::compose::Composition;
use super::image::pixmap_to_rgba;
use crate::error::{Error, Result};
use image_rs::{ImageFormat, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tiny_skia::Pixmap;

/// Prefix of every exported file name.
pub const EXPORT_FILE_PREFIX: &str = "uiu-app-forum-dp-";

/// Side length of an exported square, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExportResolution(u32);

impl ExportResolution {
    /// 1080×1080, the default preset.
    pub const HD: Self = Self(1080);

    /// Returns `None` for a zero resolution.
    #[must_use]
    pub fn new(pixels: u32) -> Option<Self> {
        (pixels > 0).then_some(Self(pixels))
    }

    #[must_use]
    pub fn pixels(self) -> u32 {
        self.0
    }

    /// Deterministic file name: `uiu-app-forum-dp-<resolution>.png`.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{EXPORT_FILE_PREFIX}{}.png", self.0)
    }
}

/// Encodes a rendered surface as PNG.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the pixel buffer is inconsistent or the
/// encoder fails.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>> {
    let image = to_rgba_image(pixmap)?;
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Renders and writes the export into `directory`.
///
/// Returns the path of the written file. An existing file with the same
/// name is replaced.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, or if rendering,
/// encoding or writing fails.
pub fn export_to_directory(
    composition: &Composition,
    resolution: ExportResolution,
    directory: &Path,
) -> Result<PathBuf> {
    fs::create_dir_all(directory)?;
    let path = directory.join(resolution.file_name());

    let pixmap = composition.render(resolution.pixels())?;
    let bytes = encode_png(&pixmap)?;
    fs::write(&path, bytes).map_err(|e| Error::Io(format!("Failed to save export: {e}")))?;

    tracing::info!(path = %path.display(), resolution = resolution.pixels(), "export written");
    Ok(path)
}

fn to_rgba_image(pixmap: &Pixmap) -> Result<RgbaImage> {
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), pixmap_to_rgba(pixmap))
        .ok_or_else(|| Error::Encode("Failed to create image buffer from surface".to_string()))
}
