// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use crate::domain::geometry::Point;
use std::sync::Arc;

/// Raw image data without presentation dependencies.
///
/// Straight (non-premultiplied) RGBA, 4 bytes per pixel. The pixel buffer
/// is shared so clones are cheap enough to hand to background tasks.
///
/// # Example
///
/// ```
/// use dp_framer::domain::media::RawImage;
///
/// let image = RawImage::from_rgba(100, 100, vec![255u8; 100 * 100 * 4]).unwrap();
///
/// assert_eq!(image.width(), 100);
/// assert_eq!(image.height(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct RawImage {
    /// Image width in pixels.
    width: u32,
    /// Image height in pixels.
    height: u32,
    /// RGBA pixel data (4 bytes per pixel).
    rgba_bytes: Arc<Vec<u8>>,
}

impl RawImage {
    /// Creates a new `RawImage` from dimensions and shared RGBA pixel data.
    ///
    /// Returns `None` for empty dimensions or when the buffer length is not
    /// `width * height * 4`.
    #[must_use]
    pub fn new(width: u32, height: u32, rgba_bytes: Arc<Vec<u8>>) -> Option<Self> {
        let expected_len = (width as usize) * (height as usize) * 4;
        if width == 0 || height == 0 || rgba_bytes.len() != expected_len {
            return None;
        }

        Some(Self {
            width,
            height,
            rgba_bytes,
        })
    }

    /// Creates a new `RawImage` from dimensions and owned RGBA pixel data.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Option<Self> {
        Self::new(width, height, Arc::new(rgba_bytes))
    }

    /// Returns the image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns a reference to the RGBA pixel data.
    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }
}

impl PartialEq for RawImage {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.rgba_bytes == other.rgba_bytes
    }
}

impl Eq for RawImage {}

/// Face bounding box in source image pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Detector confidence in `0.0..=1.0`.
    pub score: f32,
}

impl FaceBox {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32, score: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            score,
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Intersection over union with another box.
    #[must_use]
    pub fn iou(&self, other: &FaceBox) -> f32 {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = (self.x + self.width).min(other.x + other.width);
        let bottom = (self.y + self.height).min(other.y + other.height);

        let intersection = (right - left).max(0.0) * (bottom - top).max(0.0);
        let union = self.area() + other.area() - intersection;
        if union <= 0.0 {
            0.0
        } else {
            intersection / union
        }
    }
}
