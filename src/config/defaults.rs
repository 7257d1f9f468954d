// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Canvas**: live preview size
//! - **Zoom**: zoom control bounds and steps
//! - **Export**: quality presets
//! - **Face**: detection toggle

use crate::domain::view::ZoomRange;

// ==========================================================================
// Canvas Defaults
// ==========================================================================

/// Side of the square live canvas, in pixels.
pub const DEFAULT_CANVAS_SIZE: u32 = 500;

/// Smallest canvas accepted from configuration.
pub const MIN_CANVAS_SIZE: u32 = 100;

/// Largest canvas accepted from configuration.
pub const MAX_CANVAS_SIZE: u32 = 2000;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

pub const DEFAULT_ZOOM_MIN: f32 = 1.0;
pub const DEFAULT_ZOOM_MAX: f32 = 3.0;

/// Slider step for mouse input.
pub const DEFAULT_ZOOM_STEP: f32 = 0.01;

/// Coarser slider step used with `touch_input = true`.
pub const DEFAULT_ZOOM_TOUCH_STEP: f32 = 0.02;

/// Zoom range used when the configured one is unusable.
pub const DEFAULT_ZOOM_RANGE: ZoomRange =
    ZoomRange::from_bounds(DEFAULT_ZOOM_MIN, DEFAULT_ZOOM_MAX, DEFAULT_ZOOM_STEP);

// ==========================================================================
// Export Defaults
// ==========================================================================

pub const HD_LABEL: &str = "HD";
pub const HD_SIZE: u32 = 1080;
pub const ULTRA_HD_LABEL: &str = "Ultra HD";
pub const ULTRA_HD_SIZE: u32 = 2048;

/// Preset selected at startup.
pub const DEFAULT_EXPORT_SIZE: u32 = HD_SIZE;

/// Largest export side accepted from configuration.
pub const MAX_EXPORT_SIZE: u32 = 8192;

// ==========================================================================
// Face Detection Defaults
// ==========================================================================

/// Face detection runs whenever a model is configured.
pub const DEFAULT_FACE_ENABLED: bool = true;
