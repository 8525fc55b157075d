// SPDX-License-Identifier: MPL-2.0
//! Button styles for the sidebar and popover.

use super::ShellPalette;
use crate::ui::design_tokens::{radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Square icon-only buttons in the sidebar top bar (hamburger, theme
/// toggle). Transparent at rest, subtle surface on hover.
pub fn icon(palette: ShellPalette) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(palette.nav_bg_hover))
            }
            _ => None,
        };
        button::Style {
            background,
            text_color: palette.nav_fg,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            ..button::Style::default()
        }
    }
}

/// Navigation buttons, both top-level and submenu children. The selected
/// entry gets the brand background and the selected foreground.
pub fn nav(selected: bool, palette: ShellPalette) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let (background, text_color) = if selected {
            (Some(palette.nav_bg_selected), palette.nav_fg_selected)
        } else {
            match status {
                button::Status::Hovered => (Some(palette.nav_bg_hover), palette.nav_fg),
                _ => (None, palette.nav_fg),
            }
        };
        button::Style {
            background: background.map(Background::Color),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            ..button::Style::default()
        }
    }
}

/// Submenu holder buttons while expanded: disabled as click targets, shown
/// slightly muted so they read as section headers.
pub fn submenu_title(palette: ShellPalette) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, _status| button::Style {
        background: None,
        text_color: Color {
            a: 0.8,
            ..palette.nav_fg
        },
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}

/// Entries inside the collapsed-sidebar submenu popover.
pub fn popover_item(
    active: bool,
    palette: ShellPalette,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let (background, text_color) = if active {
            (Some(palette.nav_bg_selected), palette.nav_fg_selected)
        } else {
            match status {
                button::Status::Hovered => (Some(palette.nav_bg_hover), palette.nav_fg),
                _ => (Some(palette.popover_bg), palette.nav_fg),
            }
        };
        button::Style {
            background: background.map(Background::Color),
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            ..button::Style::default()
        }
    }
}
