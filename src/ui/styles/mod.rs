// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the shell's widgets.
//!
//! Style functions never consult global state: callers resolve a
//! [`ShellPalette`] from the theme store first and pass it in, so every
//! color a widget renders with is also observable by the code that re-tints
//! icons to match.

pub mod button;
pub mod container;

use crate::theme::ThemeStore;
use crate::ui::design_tokens::palette;
use iced::Color;

/// Concrete colors for the current mode, after stylesheet overrides.
#[derive(Debug, Clone, Copy)]
pub struct ShellPalette {
    pub sidebar_bg: Color,
    pub content_bg: Color,
    pub nav_fg: Color,
    pub nav_fg_selected: Color,
    pub nav_bg_hover: Color,
    pub nav_bg_selected: Color,
    pub popover_bg: Color,
    pub popover_border: Color,
}

impl ShellPalette {
    /// Resolves the palette for the store's active mode. Stylesheet custom
    /// properties win over the built-in defaults.
    pub fn resolve(theme: &ThemeStore) -> Self {
        let sheet = theme.stylesheet();
        let pick = |name: &str, fallback: Color| sheet.color(name).unwrap_or(fallback);

        if theme.dark_mode() {
            Self {
                sidebar_bg: pick("sidebar-bg", palette::GRAY_900),
                content_bg: pick("content-bg", palette::GRAY_800),
                nav_fg: pick("nav-fg", palette::WHITE),
                nav_fg_selected: pick("nav-fg-selected", palette::WHITE),
                nav_bg_hover: pick("nav-bg-hover", palette::GRAY_700),
                nav_bg_selected: pick("nav-bg-selected", palette::PRIMARY_600),
                popover_bg: pick("popover-bg", palette::GRAY_800),
                popover_border: pick("popover-border", palette::GRAY_700),
            }
        } else {
            Self {
                sidebar_bg: pick("sidebar-bg", palette::GRAY_100),
                content_bg: pick("content-bg", palette::WHITE),
                nav_fg: pick("nav-fg", palette::GRAY_900),
                nav_fg_selected: pick("nav-fg-selected", palette::WHITE),
                nav_bg_hover: pick("nav-bg-hover", palette::GRAY_200),
                nav_bg_selected: pick("nav-bg-selected", palette::PRIMARY_500),
                popover_bg: pick("popover-bg", palette::WHITE),
                popover_border: pick("popover-border", palette::GRAY_200),
            }
        }
    }

    /// Foreground color a nav button currently renders its content with.
    /// Icon re-tints read this instead of a statically computed theme color
    /// so stylesheet overrides for the selected state are respected.
    pub fn nav_foreground(&self, selected: bool) -> Color {
        if selected {
            self.nav_fg_selected
        } else {
            self.nav_fg
        }
    }
}
