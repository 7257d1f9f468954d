// SPDX-License-Identifier: MPL-2.0
//! Zoom control bounds.
//!
//! The zoom slider exposes a user multiplier on top of the cover scale.
//! Its range and step come from configuration; values arriving from the
//! control are clamped here so the view never sees an out-of-range scale.

/// Default zoom multiplier after a load.
pub const DEFAULT_USER_SCALE: f32 = 1.0;

/// Inclusive zoom range with a slider step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomRange {
    min: f32,
    max: f32,
    step: f32,
}

impl ZoomRange {
    /// Builds a range, repairing nonsensical input.
    ///
    /// Non-positive or non-finite bounds fall back to `fallback`; swapped
    /// bounds are reordered; the step is forced positive.
    #[must_use]
    pub fn new(min: f32, max: f32, step: f32, fallback: ZoomRange) -> Self {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        let (min, max) = match (valid(min), valid(max)) {
            (true, true) if min <= max => (min, max),
            (true, true) => (max, min),
            _ => (fallback.min, fallback.max),
        };
        let step = if valid(step) { step } else { fallback.step };
        Self { min, max, step }
    }

    /// Range without validation; callers pass constants.
    #[must_use]
    pub const fn from_bounds(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    #[must_use]
    pub fn min(self) -> f32 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }

    #[must_use]
    pub fn step(self) -> f32 {
        self.step
    }

    /// Same bounds with a different slider step.
    #[must_use]
    pub fn with_step(self, step: f32) -> Self {
        if step.is_finite() && step > 0.0 {
            Self { step, ..self }
        } else {
            self
        }
    }

    /// Clamps a control value into the range.
    #[must_use]
    pub fn clamp(self, value: f32) -> f32 {
        if value.is_nan() {
            return DEFAULT_USER_SCALE.clamp(self.min, self.max);
        }
        value.clamp(self.min, self.max)
    }
}
