// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the built-in frame SVG at runtime to produce an RGBA icon for
//! the window title bar. Falls back to `None` if rendering fails.

use crate::media::frame::embedded_frame_svg;
use crate::media::image::{pixmap_to_rgba, rasterize_svg};
use iced::window::{icon, Icon};

/// Side of the rasterized icon.
pub const ICON_SIZE: u32 = 128;

/// Rasterize the embedded frame to straight RGBA icon pixels.
#[must_use]
pub fn window_icon_rgba() -> Option<Vec<u8>> {
    let svg = embedded_frame_svg()?;
    let pixmap = rasterize_svg(&svg, Some(ICON_SIZE)).ok()?;
    Some(pixmap_to_rgba(&pixmap))
}

/// The window icon, or `None` if the embedded SVG cannot be rendered.
#[must_use]
pub fn load_window_icon() -> Option<Icon> {
    let rgba = window_icon_rgba()?;
    icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).ok()
}
