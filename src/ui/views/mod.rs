// SPDX-License-Identifier: MPL-2.0
//! The view registry.
//!
//! A fixed mapping of string keys to resident view state. Views are
//! constructed once at startup and kept alive for instant switching; exactly
//! one is rendered at a time. There is no dynamic registration: the sidebar
//! menu and this registry name the same keys.

pub mod home;

use crate::ui::styles::ShellPalette;
use iced::widget::{Column, Text};
use iced::Element;

pub const HOME: &str = "home";
pub const EXAMPLE1: &str = "example1";
pub const EXAMPLE2: &str = "example2";
pub const EXAMPLE3: &str = "example3";

/// Every valid view key, in menu order.
pub const ALL: &[&str] = &[HOME, EXAMPLE1, EXAMPLE2, EXAMPLE3];

/// Maps an arbitrary key onto its canonical static form, or `None` for
/// unknown keys.
pub fn canonical(key: &str) -> Option<&'static str> {
    ALL.iter().find(|k| **k == key).copied()
}

/// Resident state for all views.
#[derive(Debug, Default)]
pub struct Views {
    pub home: home::State,
}

impl Views {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the view behind `key`. The caller guarantees the key came
    /// through [`canonical`], but an unknown key still renders an empty
    /// column rather than panicking.
    pub fn view<'a, M: 'a>(&'a self, key: &str, palette: ShellPalette) -> Element<'a, M> {
        match key {
            HOME => self.home.view(palette),
            EXAMPLE1 => placeholder("Example Page 1"),
            EXAMPLE2 => placeholder("Example Page 2"),
            EXAMPLE3 => placeholder("Example Page 3"),
            _ => Column::new().into(),
        }
    }
}

fn placeholder<'a, M: 'a>(title: &'a str) -> Element<'a, M> {
    Column::new()
        .padding(10)
        .push(Text::new(title).size(16))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_accepts_every_registered_key() {
        for key in ALL {
            assert_eq!(canonical(key), Some(*key));
        }
    }

    #[test]
    fn canonical_rejects_unknown_keys() {
        assert_eq!(canonical("settings"), None);
        assert_eq!(canonical(""), None);
    }
}
