// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the editor window.
//!
//! - **Palette**: base and semantic colors
//! - **Spacing**: spacing scale (8px grid)
//! - **Typography**: font size scale

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_grid() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::SM * 2.0);
    }

    #[test]
    fn status_colors_are_distinct() {
        assert_ne!(palette::ERROR_500, palette::GRAY_200);
    }
}
