// SPDX-License-Identifier: MPL-2.0
//! Integration tests wiring the stores together the way the application does.

use iced_shell::app::config::{self, Config};
use iced_shell::icons::{IconSlot, IconStore};
use iced_shell::theme::{ThemeMode, ThemeStore};
use iced_shell::ui::design_tokens::{sizing, SIDEBAR_ANIMATION_MS};
use iced_shell::ui::menu::EntryId;
use iced_shell::ui::sidebar::{self, UpdateContext};
use iced_shell::ui::styles::ShellPalette;
use iced_shell::ui::{nav_context_menu, views};
use std::fs;
use std::time::{Duration, Instant};
use tempfile::tempdir;

const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16"><rect width="16" height="16" fill="#000"/></svg>"##;

const ICON_NAMES: &[&str] = &[
    "menu",
    "moon",
    "sun",
    "settings",
    "template",
    "workschedule_generator",
    "arrow_menu_open",
];

struct Shell {
    _icon_dir: tempfile::TempDir,
    _style_dir: tempfile::TempDir,
    icons: IconStore,
    theme: ThemeStore,
    sidebar: sidebar::State,
    current_view: Option<&'static str>,
}

impl Shell {
    /// Builds the same store wiring `App::new` performs, rooted in temp
    /// directories.
    fn new(mode: ThemeMode, expanded: bool) -> Self {
        let icon_dir = tempdir().expect("icon dir");
        for name in ICON_NAMES {
            fs::write(icon_dir.path().join(format!("{name}.svg")), ICON_SVG)
                .expect("write svg");
        }
        let style_dir = tempdir().expect("style dir");
        fs::write(
            style_dir.path().join("style--light.css"),
            "--nav-fg: #111111;\n--nav-bg-selected: #4d94e0;\n",
        )
        .expect("light css");
        fs::write(
            style_dir.path().join("style--dark.css"),
            "--nav-fg: #eeeeee;\n--nav-bg-selected: #3373b8;\n",
        )
        .expect("dark css");

        let mut icons = IconStore::with_asset_dir(icon_dir.path().to_path_buf());
        let theme = ThemeStore::from_dir(style_dir.path(), mode);
        let palette = ShellPalette::resolve(&theme);
        let mut ctx = UpdateContext {
            icons: &mut icons,
            dark_mode: theme.dark_mode(),
            palette,
        };
        let sidebar = sidebar::State::new(&mut ctx, expanded);

        Self {
            _icon_dir: icon_dir,
            _style_dir: style_dir,
            icons,
            theme,
            sidebar,
            current_view: None,
        }
    }

    fn update(&mut self, message: sidebar::Message) -> sidebar::Event {
        let palette = ShellPalette::resolve(&self.theme);
        let mut ctx = UpdateContext {
            icons: &mut self.icons,
            dark_mode: self.theme.dark_mode(),
            palette,
        };
        let event = self.sidebar.update(message, &mut ctx);
        if let sidebar::Event::Navigate(key) = event {
            self.set_view(key);
        }
        event
    }

    fn set_view(&mut self, key: &str) {
        let Some(canonical) = views::canonical(key) else {
            return;
        };
        if self.current_view == Some(canonical) {
            return;
        }
        self.current_view = Some(canonical);
        let palette = ShellPalette::resolve(&self.theme);
        let mut ctx = UpdateContext {
            icons: &mut self.icons,
            dark_mode: self.theme.dark_mode(),
            palette,
        };
        self.sidebar.highlight(Some(canonical), &mut ctx);
    }

    fn toggle_theme(&mut self) {
        self.theme.toggle(&mut self.icons);
        let palette = ShellPalette::resolve(&self.theme);
        let mut ctx = UpdateContext {
            icons: &mut self.icons,
            dark_mode: self.theme.dark_mode(),
            palette,
        };
        self.sidebar.retint(&mut ctx);
    }

    fn settle_animation(&mut self) {
        let palette = ShellPalette::resolve(&self.theme);
        let mut ctx = UpdateContext {
            icons: &mut self.icons,
            dark_mode: self.theme.dark_mode(),
            palette,
        };
        self.sidebar.tick_at(
            Instant::now() + Duration::from_millis(SIDEBAR_ANIMATION_MS + 20),
            &mut ctx,
        );
    }
}

#[test]
fn navigation_updates_view_and_highlight() {
    let mut shell = Shell::new(ThemeMode::Light, true);

    let event = shell.update(sidebar::Message::NavPressed(EntryId::Top(0)));
    assert_eq!(event, sidebar::Event::Navigate("home"));
    assert_eq!(shell.current_view, Some("home"));
    assert!(shell.sidebar.button_state(EntryId::Top(0)).selected);

    let event = shell.update(sidebar::Message::NavPressed(EntryId::Sub(1, 1)));
    assert_eq!(event, sidebar::Event::Navigate("example2"));
    assert_eq!(shell.current_view, Some("example2"));
    assert!(!shell.sidebar.button_state(EntryId::Top(0)).selected);
    assert!(shell.sidebar.button_state(EntryId::Sub(1, 1)).selected);
}

#[test]
fn switching_to_the_active_view_is_a_no_op() {
    let mut shell = Shell::new(ThemeMode::Light, true);
    shell.set_view("example3");
    let before = shell.current_view;
    shell.set_view("example3");
    assert_eq!(shell.current_view, before);
}

#[test]
fn unknown_view_keys_are_ignored() {
    let mut shell = Shell::new(ThemeMode::Light, true);
    shell.set_view("home");
    shell.set_view("nonexistent");
    assert_eq!(shell.current_view, Some("home"));
}

#[test]
fn collapse_moves_highlight_to_the_parent() {
    let mut shell = Shell::new(ThemeMode::Light, true);
    shell.set_view("example1");
    assert!(!shell.sidebar.button_state(EntryId::Top(1)).selected);
    assert!(shell.sidebar.button_state(EntryId::Sub(1, 0)).selected);

    shell.update(sidebar::Message::ToggleSidebar);
    shell.settle_animation();
    assert!(shell.sidebar.button_state(EntryId::Top(1)).selected);
}

#[test]
fn sidebar_toggle_round_trip_restores_width() {
    let mut shell = Shell::new(ThemeMode::Light, true);
    assert_eq!(shell.sidebar.width(), sizing::SIDEBAR_EXPANDED);

    shell.update(sidebar::Message::ToggleSidebar);
    shell.settle_animation();
    assert_eq!(shell.sidebar.width(), sizing::SIDEBAR_COLLAPSED);

    shell.update(sidebar::Message::ToggleSidebar);
    shell.settle_animation();
    assert_eq!(shell.sidebar.width(), sizing::SIDEBAR_EXPANDED);
    assert!(shell.sidebar.expanded());
}

#[test]
fn theme_toggle_round_trip_restores_palette() {
    let mut shell = Shell::new(ThemeMode::Light, true);
    let original = ShellPalette::resolve(&shell.theme);

    shell.toggle_theme();
    assert!(shell.theme.dark_mode());
    let dark = ShellPalette::resolve(&shell.theme);
    assert_ne!(dark.nav_fg, original.nav_fg);

    shell.toggle_theme();
    assert!(!shell.theme.dark_mode());
    let restored = ShellPalette::resolve(&shell.theme);
    assert_eq!(restored.nav_fg, original.nav_fg);
}

#[test]
fn theme_toggle_keeps_the_selection() {
    let mut shell = Shell::new(ThemeMode::Light, true);
    shell.set_view("example3");
    shell.toggle_theme();
    assert!(shell.sidebar.button_state(EntryId::Top(2)).selected);
}

#[test]
fn popover_flow_opens_selects_and_closes() {
    let mut shell = Shell::new(ThemeMode::Light, false);
    shell.set_view("home");

    shell.update(sidebar::Message::SubmenuHovered(EntryId::Top(1)));
    assert!(shell.sidebar.context_is_open(Some(EntryId::Top(1))));
    assert!(shell
        .icons
        .is_registered(IconSlot::PopoverItem(EntryId::Sub(1, 0))));

    let event = shell.update(sidebar::Message::Popover(
        nav_context_menu::Message::Select(EntryId::Sub(1, 0)),
    ));
    assert_eq!(event, sidebar::Event::Navigate("example1"));
    assert_eq!(shell.current_view, Some("example1"));

    shell.update(sidebar::Message::PopoverRegionExited);
    assert!(!shell.sidebar.context_is_open(None));
    assert!(!shell
        .icons
        .is_registered(IconSlot::PopoverItem(EntryId::Sub(1, 0))));
}

#[test]
fn startup_view_persists_across_a_restart() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");

    let saved = Config {
        theme_mode: ThemeMode::Dark,
        sidebar_expanded: false,
        startup_view: Some("example2".to_string()),
    };
    config::save_to_path(&saved, &path).expect("save");

    let restored = config::load_from_path(&path).expect("load");
    assert_eq!(restored, saved);

    let mut shell = Shell::new(restored.theme_mode, restored.sidebar_expanded);
    shell.set_view(restored.startup_view.as_deref().unwrap_or(views::HOME));
    assert_eq!(shell.current_view, Some("example2"));
    assert!(shell.theme.dark_mode());
    assert!(!shell.sidebar.expanded());
}

#[test]
fn every_view_key_renders() {
    let shell = Shell::new(ThemeMode::Light, true);
    let palette = ShellPalette::resolve(&shell.theme);
    let registry = views::Views::new();
    for key in views::ALL {
        let _: iced::Element<'_, ()> = registry.view(key, palette);
    }
}
