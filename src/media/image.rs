// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding from various formats (PNG, JPEG, GIF, SVG, etc.).

use crate::domain::media::RawImage;
use crate::error::{Error, Result};
use image_rs::{DynamicImage, GenericImageView, ImageDecoder, ImageReader};
use resvg::usvg;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use tiny_skia::{ColorU8, IntSize, Pixmap, Transform};

/// Extensions offered by the open dialog.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "ico", "svg",
];

/// The image being framed.
///
/// Keeps the straight RGBA pixels (for face detection) next to a
/// premultiplied pixmap (for compositing). Both are shared, so cloning a
/// `SourceImage` into a background task does not copy pixels.
#[derive(Debug, Clone)]
pub struct SourceImage {
    raw: RawImage,
    pixmap: Arc<Pixmap>,
}

impl SourceImage {
    /// Wraps decoded RGBA pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] when the pixmap cannot be allocated.
    pub fn from_raw(raw: RawImage) -> Result<Self> {
        let pixmap = premultiplied_pixmap(raw.width(), raw.height(), raw.rgba_bytes())?;
        Ok(Self {
            raw,
            pixmap: Arc::new(pixmap),
        })
    }

    /// Creates a source image from straight RGBA pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] for empty dimensions or a buffer of the wrong size.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let raw = RawImage::from_rgba(width, height, pixels).ok_or_else(|| {
            Error::Decode(format!("invalid RGBA buffer for {width}x{height} image"))
        })?;
        Self::from_raw(raw)
    }

    /// Creates a source image from a decoded `image` crate buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] for images with an empty dimension.
    pub fn from_dynamic(image: &DynamicImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        Self::from_rgba(width, height, image.to_rgba8().into_vec())
    }

    /// Creates a source image from an already premultiplied pixmap.
    fn from_pixmap(pixmap: Pixmap) -> Result<Self> {
        let raw = RawImage::from_rgba(pixmap.width(), pixmap.height(), pixmap_to_rgba(&pixmap))
            .ok_or_else(|| Error::Decode("pixmap has empty dimensions".into()))?;
        Ok(Self {
            raw,
            pixmap: Arc::new(pixmap),
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.raw.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.raw.height()
    }

    /// Straight RGBA pixels.
    #[must_use]
    pub fn raw(&self) -> &RawImage {
        &self.raw
    }

    /// Premultiplied pixmap used for drawing.
    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

/// Load an image from the given path.
///
/// Supports common raster formats (PNG, JPEG, GIF, etc.) as well as SVG.
/// SVG files are rasterized at their intrinsic size using resvg.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The image format is invalid or unsupported ([`Error::Decode`])
/// - For SVG files: parsing fails or dimensions are zero ([`Error::Svg`])
pub fn load_source_image<P: AsRef<Path>>(path: P) -> Result<SourceImage> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;

    if is_svg_path(path) {
        SourceImage::from_pixmap(rasterize_svg(&bytes, None)?)
    } else {
        decode_source_image(&bytes)
    }
}

/// Decodes raster image bytes (PNG, JPEG, ...), upright.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the bytes are not a supported image.
pub fn decode_source_image(bytes: &[u8]) -> Result<SourceImage> {
    SourceImage::from_dynamic(&decode_upright(bytes)?)
}

/// Decodes raster bytes and applies the EXIF orientation, so camera
/// photos come out the way viewers display them.
pub(crate) fn decode_upright(bytes: &[u8]) -> Result<DynamicImage> {
    let mut decoder = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_decoder()?;
    let orientation = decoder.orientation()?;
    let mut image = DynamicImage::from_decoder(decoder)?;
    image.apply_orientation(orientation);
    Ok(image)
}

pub(crate) fn is_svg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Rasterizes SVG data.
///
/// With `square` set, the drawing is stretched onto a `square`×`square`
/// pixmap; otherwise the intrinsic size is used.
pub(crate) fn rasterize_svg(data: &[u8], square: Option<u32>) -> Result<Pixmap> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let intrinsic = tree.size();
    let (width, height, transform) = match square {
        Some(side) => (
            side,
            side,
            Transform::from_scale(
                side as f32 / intrinsic.width(),
                side as f32 / intrinsic.height(),
            ),
        ),
        None => {
            let size = intrinsic.to_int_size();
            (size.width(), size.height(), Transform::default())
        }
    };
    if width == 0 || height == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap)
}

/// Converts straight RGBA into a premultiplied pixmap.
pub(crate) fn premultiplied_pixmap(width: u32, height: u32, rgba: &[u8]) -> Result<Pixmap> {
    let size = IntSize::from_wh(width, height)
        .ok_or_else(|| Error::Decode(format!("invalid image size {width}x{height}")))?;

    let mut data = Vec::with_capacity(rgba.len());
    for px in rgba.chunks_exact(4) {
        let color = ColorU8::from_rgba(px[0], px[1], px[2], px[3]).premultiply();
        data.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    Pixmap::from_vec(data, size)
        .ok_or_else(|| Error::Decode(format!("pixel buffer does not match {width}x{height}")))
}

/// Converts a premultiplied pixmap back to straight RGBA.
#[must_use]
pub fn pixmap_to_rgba(pixmap: &Pixmap) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let color = px.demultiply();
        rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }
    rgba
}
