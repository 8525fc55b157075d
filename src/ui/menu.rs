// SPDX-License-Identifier: MPL-2.0
//! Static navigation menu definition.
//!
//! The menu tree is fixed at compile time. Entries either navigate to a view
//! (`view_key` is set) or act as submenu holders (`view_key` is `None`); a
//! submenu holder is never directly navigable.

use crate::ui::views;

#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub title: &'static str,
    pub view_key: Option<&'static str>,
    pub icon: &'static str,
    pub submenu: &'static [MenuEntry],
}

impl MenuEntry {
    pub fn has_submenu(&self) -> bool {
        !self.submenu.is_empty()
    }
}

/// Stable identifier for a nav button, independent of any widget lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryId {
    Top(usize),
    Sub(usize, usize),
}

impl EntryId {
    /// The top-level entry this id belongs to.
    pub fn top(self) -> usize {
        match self {
            EntryId::Top(i) | EntryId::Sub(i, _) => i,
        }
    }
}

pub const MENU: &[MenuEntry] = &[
    MenuEntry {
        title: "Home",
        view_key: Some(views::HOME),
        icon: "workschedule_generator",
        submenu: &[],
    },
    MenuEntry {
        title: "Settings",
        view_key: None,
        icon: "settings",
        submenu: &[
            MenuEntry {
                title: "Example 2",
                view_key: Some(views::EXAMPLE1),
                icon: "template",
                submenu: &[],
            },
            MenuEntry {
                title: "Example 3",
                view_key: Some(views::EXAMPLE2),
                icon: "workschedule_generator",
                submenu: &[],
            },
        ],
    },
    MenuEntry {
        title: "Example 4",
        view_key: Some(views::EXAMPLE3),
        icon: "template",
        submenu: &[],
    },
];

/// Looks up a menu entry by id. Out-of-range ids yield `None`.
pub fn entry(id: EntryId) -> Option<&'static MenuEntry> {
    match id {
        EntryId::Top(i) => MENU.get(i),
        EntryId::Sub(i, j) => MENU.get(i).and_then(|e| e.submenu.get(j)),
    }
}

/// Iterates over every id in the tree, parents before their children.
pub fn ids() -> impl Iterator<Item = EntryId> {
    MENU.iter().enumerate().flat_map(|(i, e)| {
        std::iter::once(EntryId::Top(i)).chain((0..e.submenu.len()).map(move |j| EntryId::Sub(i, j)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submenu_holders_have_no_view_key() {
        for e in MENU {
            if e.has_submenu() {
                assert!(e.view_key.is_none(), "{} holds a submenu", e.title);
            }
        }
    }

    #[test]
    fn every_view_key_is_registered() {
        for id in ids() {
            if let Some(key) = entry(id).and_then(|e| e.view_key) {
                assert!(views::ALL.contains(&key), "unknown view key {key}");
            }
        }
    }

    #[test]
    fn ids_cover_the_whole_tree() {
        let count = ids().count();
        let expected = MENU.len() + MENU.iter().map(|e| e.submenu.len()).sum::<usize>();
        assert_eq!(count, expected);
    }

    #[test]
    fn entry_lookup_rejects_out_of_range() {
        assert!(entry(EntryId::Top(99)).is_none());
        assert!(entry(EntryId::Sub(0, 99)).is_none());
    }
}
