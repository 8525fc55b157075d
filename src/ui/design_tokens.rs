// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: base colors, spacing, sizing, radii, shadows.
//!
//! Tokens are deliberately plain `const` values so styles can be resolved
//! without allocation. Sizing constants double as layout math inputs for the
//! sidebar (popover positioning depends on them), so keep them in sync with
//! the view code in `ui::sidebar`.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_800: Color = Color::from_rgb(0.17, 0.17, 0.17);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.45);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.88, 0.88);

    // Brand blue used for selected navigation entries.
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 5.0; // sidebar item gap, matches the menu layout grid
    pub const SM: f32 = 10.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    /// Sidebar width when expanded.
    pub const SIDEBAR_EXPANDED: f32 = 220.0;
    /// Sidebar width when collapsed.
    pub const SIDEBAR_COLLAPSED: f32 = 50.0;

    /// Uniform nav button footprint.
    pub const NAV_BUTTON: f32 = 40.0;

    /// Icon edge length inside nav buttons while expanded.
    pub const ICON_EXPANDED: u32 = 24;
    /// Icon edge length while collapsed (icons grow when text disappears).
    pub const ICON_COLLAPSED: u32 = 32;
    /// Submenu arrow indicator edge length.
    pub const ICON_ARROW: u32 = 16;

    /// Height of the sidebar top bar when its buttons sit in a row.
    pub const TOP_BAR_HORIZONTAL: f32 = 50.0;
    /// Height of the top bar when collapsed stacks the buttons vertically.
    pub const TOP_BAR_VERTICAL: f32 = 95.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

/// Duration of the sidebar expand/collapse width animation.
pub const SIDEBAR_ANIMATION_MS: u64 = 80;

const _: () = {
    assert!(sizing::SIDEBAR_EXPANDED > sizing::SIDEBAR_COLLAPSED);
    assert!(sizing::ICON_COLLAPSED > sizing::ICON_EXPANDED);
    assert!(sizing::NAV_BUTTON as u32 >= sizing::ICON_COLLAPSED);
    assert!(spacing::SM > spacing::XS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_sidebar_fits_a_nav_button() {
        assert!(sizing::SIDEBAR_COLLAPSED >= sizing::NAV_BUTTON);
    }
}
