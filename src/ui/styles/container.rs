// SPDX-License-Identifier: MPL-2.0
//! Container styles: sidebar surface, content pane, popover chrome, cards.

use super::ShellPalette;
use crate::ui::design_tokens::{radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Shadow, Theme};

pub fn sidebar(palette: ShellPalette) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(palette.sidebar_bg)),
        ..container::Style::default()
    }
}

/// The main content pane, carrying the theme's drop shadow toward the
/// sidebar edge.
pub fn content_pane(
    palette: ShellPalette,
    pane_shadow: Shadow,
) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(palette.content_bg)),
        shadow: pane_shadow,
        ..container::Style::default()
    }
}

/// Borderless-window look for the submenu popover: flat surface, thin
/// border, floating shadow.
pub fn popover(palette: ShellPalette) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(palette.popover_bg)),
        border: Border {
            color: palette.popover_border,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        ..container::Style::default()
    }
}

/// Card surface used by the home view.
pub fn card(palette: ShellPalette) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(palette.sidebar_bg)),
        border: Border {
            color: palette.popover_border,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..container::Style::default()
    }
}
