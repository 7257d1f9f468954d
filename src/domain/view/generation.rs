// SPDX-License-Identifier: MPL-2.0
//! Load generation tokens.

/// Monotonic marker issued by each successful load.
///
/// Background work started for a load carries the generation it was started
/// with; results whose generation is no longer current are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    /// Generation before any load.
    pub const INITIAL: Generation = Generation(0);

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}
