// SPDX-License-Identifier: MPL-2.0
//! Transform applied to the loaded image.

use crate::domain::geometry::{self, Point};

/// Cover scale, user zoom and pan for the current image.
///
/// Offsets are canvas pixels relative to the canvas center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Cover-fit factor for the loaded image on the canvas.
    pub base_scale: f32,
    /// User zoom multiplier, 1.0 after every load.
    pub user_scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            base_scale: 1.0,
            user_scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl ViewState {
    /// Fresh state for an image of the given size on a square canvas.
    #[must_use]
    pub fn for_image(canvas_size: u32, width: u32, height: u32) -> Self {
        Self {
            base_scale: geometry::cover_scale(canvas_size, width, height),
            ..Self::default()
        }
    }

    /// `base_scale × user_scale`.
    #[must_use]
    pub fn effective_scale(&self) -> f32 {
        self.base_scale * self.user_scale
    }

    #[must_use]
    pub fn offset(&self) -> Point {
        Point::new(self.offset_x, self.offset_y)
    }

    pub fn set_offset(&mut self, offset: Point) {
        self.offset_x = offset.x;
        self.offset_y = offset.y;
    }

    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Back to user scale 1 and a centered image; the cover scale stays.
    pub fn reset_transform(&mut self) {
        self.user_scale = 1.0;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn for_image_resets_user_transform() {
        let state = ViewState::for_image(500, 1000, 500);
        assert_abs_diff_eq!(state.base_scale, 1.0);
        assert_abs_diff_eq!(state.user_scale, 1.0);
        assert_eq!(state.offset(), Point::new(0.0, 0.0));
    }

    #[test]
    fn effective_scale_multiplies() {
        let state = ViewState {
            base_scale: 0.25,
            user_scale: 2.0,
            ..ViewState::default()
        };
        assert_abs_diff_eq!(state.effective_scale(), 0.5);
    }

    #[test]
    fn pan_accumulates() {
        let mut state = ViewState::default();
        state.pan_by(30.0, 15.0);
        state.pan_by(-10.0, 5.0);
        assert_eq!(state.offset(), Point::new(20.0, 20.0));
    }

    #[test]
    fn reset_keeps_base_scale() {
        let mut state = ViewState::for_image(500, 250, 250);
        state.user_scale = 2.5;
        state.pan_by(12.0, -4.0);
        state.reset_transform();

        assert_abs_diff_eq!(state.base_scale, 2.0);
        assert_abs_diff_eq!(state.user_scale, 1.0);
        assert_eq!(state.offset(), Point::default());
    }
}
