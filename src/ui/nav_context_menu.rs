// SPDX-License-Identifier: MPL-2.0
//! Submenu popover for the collapsed sidebar.
//!
//! A borderless floating panel with one button per submenu entry. Selecting
//! an entry navigates and becomes the sole active entry inside the panel;
//! siblings are deselected. Opening registers an icon slot per entry and
//! closing unregisters them again, so the icon registry never accumulates
//! stale popover slots.

use crate::icons::{IconSlot, IconStore};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::menu::{self, EntryId};
use crate::ui::styles::{self, ShellPalette};
use iced::widget::{button, image, Column, Container, Row, Text};
use iced::{Element, Length};

/// Width of the popover panel.
pub const WIDTH: f32 = 160.0;
/// Height of one entry button.
pub const ITEM_HEIGHT: f32 = 36.0;

#[derive(Debug, Clone)]
pub enum Message {
    Select(EntryId),
}

#[derive(Debug, Clone)]
pub struct Popover {
    parent: EntryId,
    active: Option<EntryId>,
}

impl Popover {
    /// Opens a popover for `parent`, registering icons for its submenu
    /// entries and pre-marking the entry that matches the active view.
    pub fn open(
        parent: EntryId,
        active_view: Option<&str>,
        icons: &mut IconStore,
        dark_mode: bool,
        palette: ShellPalette,
    ) -> Self {
        let mut active = None;
        for (j, sub) in submenu(parent).iter().enumerate() {
            let id = EntryId::Sub(parent.top(), j);
            icons.register(
                IconSlot::PopoverItem(id),
                sub.icon,
                None,
                sizing::ICON_EXPANDED,
                dark_mode,
            );
            if let (Some(key), Some(current)) = (sub.view_key, active_view) {
                if key == current {
                    active = Some(id);
                }
            }
        }
        let popover = Self { parent, active };
        popover.retint(icons, palette);
        popover
    }

    pub fn parent(&self) -> EntryId {
        self.parent
    }

    pub fn active(&self) -> Option<EntryId> {
        self.active
    }

    /// Marks `id` the sole active entry and re-tints every entry icon with
    /// the foreground its style now resolves to.
    pub fn select(&mut self, id: EntryId, icons: &mut IconStore, palette: ShellPalette) {
        self.active = Some(id);
        self.retint(icons, palette);
    }

    fn retint(&self, icons: &mut IconStore, palette: ShellPalette) {
        for (j, _) in submenu(self.parent).iter().enumerate() {
            let id = EntryId::Sub(self.parent.top(), j);
            let fg = palette.nav_foreground(self.active == Some(id));
            icons.update_icon_color(IconSlot::PopoverItem(id), || fg);
        }
    }

    /// Releases the icon slots this popover registered.
    pub fn close(&self, icons: &mut IconStore) {
        for (j, _) in submenu(self.parent).iter().enumerate() {
            icons.unregister(IconSlot::PopoverItem(EntryId::Sub(self.parent.top(), j)));
        }
    }

    pub fn view<'a>(&self, icons: &IconStore, palette: ShellPalette) -> Element<'a, Message> {
        let mut column = Column::new();
        for (j, sub) in submenu(self.parent).iter().enumerate() {
            let id = EntryId::Sub(self.parent.top(), j);
            let is_active = self.active == Some(id);
            let row = Row::new()
                .spacing(spacing::SM)
                .align_y(iced::alignment::Vertical::Center)
                .push(
                    image(icons.handle(IconSlot::PopoverItem(id)))
                        .width(Length::Fixed(sizing::ICON_EXPANDED as f32))
                        .height(Length::Fixed(sizing::ICON_EXPANDED as f32)),
                )
                .push(Text::new(sub.title).size(14));
            column = column.push(
                button(row)
                    .on_press(Message::Select(id))
                    .width(Length::Fill)
                    .height(Length::Fixed(ITEM_HEIGHT))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::popover_item(is_active, palette)),
            );
        }

        Container::new(column)
            .width(Length::Fixed(WIDTH))
            .style(styles::container::popover(palette))
            .into()
    }
}

fn submenu(parent: EntryId) -> &'static [menu::MenuEntry] {
    menu::entry(parent).map(|e| e.submenu).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ThemeMode, ThemeStore};
    use tempfile::tempdir;

    fn palette() -> ShellPalette {
        let dir = tempdir().expect("tempdir");
        ShellPalette::resolve(&ThemeStore::from_dir(dir.path(), ThemeMode::Light))
    }

    #[test]
    fn open_registers_an_icon_slot_per_entry() {
        let mut icons = IconStore::new();
        let popover = Popover::open(EntryId::Top(1), None, &mut icons, false, palette());
        assert!(icons.is_registered(IconSlot::PopoverItem(EntryId::Sub(1, 0))));
        assert!(icons.is_registered(IconSlot::PopoverItem(EntryId::Sub(1, 1))));
        popover.close(&mut icons);
        assert!(!icons.is_registered(IconSlot::PopoverItem(EntryId::Sub(1, 0))));
    }

    #[test]
    fn open_marks_the_current_view_active() {
        let mut icons = IconStore::new();
        let popover = Popover::open(
            EntryId::Top(1),
            Some("example2"),
            &mut icons,
            false,
            palette(),
        );
        assert_eq!(popover.active(), Some(EntryId::Sub(1, 1)));
    }

    #[test]
    fn selecting_replaces_the_active_entry() {
        let mut icons = IconStore::new();
        let mut popover = Popover::open(EntryId::Top(1), None, &mut icons, false, palette());
        popover.select(EntryId::Sub(1, 0), &mut icons, palette());
        assert_eq!(popover.active(), Some(EntryId::Sub(1, 0)));
        popover.select(EntryId::Sub(1, 1), &mut icons, palette());
        assert_eq!(popover.active(), Some(EntryId::Sub(1, 1)));
    }
}
