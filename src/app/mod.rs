// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the sidebar, the theme
//! store, and the view registry.
//!
//! The `App` struct owns every store as a plain field and translates sidebar
//! events into side effects like view switches, theme toggles, and config
//! persistence. Policy decisions (window size, persistence timing, startup
//! view resolution) live here so user-facing behavior is easy to audit.

pub mod config;
mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::icons::{self, IconStore};
use crate::theme::{ThemeMode, ThemeStore};
use crate::ui::sidebar::{self, UpdateContext};
use crate::ui::styles::ShellPalette;
use crate::ui::views::{self, Views};
use iced::{window, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;

/// Root Iced application state.
pub struct App {
    theme: ThemeStore,
    icons: IconStore,
    sidebar: sidebar::State,
    views: Views,
    current_view: Option<&'static str>,
    config: config::Config,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_view", &self.current_view)
            .field("dark_mode", &self.theme.dark_mode())
            .field("sidebar_expanded", &self.sidebar.expanded())
            .finish()
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        icon: icons::window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a Fn boot closure; the RefCell lets it consume the
    // flags exactly once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from persisted config, with command
    /// line flags taking precedence.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        if let Some(warning) = warning {
            eprintln!("Warning: {warning}");
        }

        let mode = match flags.theme.as_deref() {
            Some(raw) => match raw.parse::<ThemeMode>() {
                Ok(mode) => mode,
                Err(err) => {
                    eprintln!("Warning: {err}; using configured theme");
                    config.theme_mode
                }
            },
            None => config.theme_mode,
        };

        let theme = ThemeStore::new(mode);
        let mut icons = IconStore::new();
        let palette = ShellPalette::resolve(&theme);
        let mut ctx = UpdateContext {
            icons: &mut icons,
            dark_mode: theme.dark_mode(),
            palette,
        };
        let sidebar = sidebar::State::new(&mut ctx, config.sidebar_expanded);

        let mut app = App {
            theme,
            icons,
            sidebar,
            views: Views::new(),
            current_view: None,
            config,
        };

        let startup = flags
            .view
            .as_deref()
            .or(app.config.startup_view.as_deref())
            .unwrap_or(views::HOME)
            .to_string();
        app.set_view(&startup);

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Modern Sidebar")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    /// Switches the content pane to `key`. Unknown keys are reported and
    /// ignored; switching to the already-active view is a no-op.
    fn set_view(&mut self, key: &str) {
        let Some(canonical) = views::canonical(key) else {
            eprintln!("Warning: unknown view key: {key}");
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

        self.config.startup_view = Some(canonical.to_string());
        self.persist();
    }

    fn toggle_theme(&mut self) {
        self.theme.toggle(&mut self.icons);

        // The blanket re-tint above painted everything in the new theme
        // color; selected entries get their highlight foreground back here.
        let palette = ShellPalette::resolve(&self.theme);
        let mut ctx = UpdateContext {
            icons: &mut self.icons,
            dark_mode: self.theme.dark_mode(),
            palette,
        };
        self.sidebar.retint(&mut ctx);

        self.config.theme_mode = if self.theme.dark_mode() {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        };
        self.persist();
    }

    fn persist(&self) {
        if let Err(err) = config::save(&self.config) {
            eprintln!("Warning: failed to save settings: {err}");
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Sidebar(msg) => {
                let palette = ShellPalette::resolve(&self.theme);
                let mut ctx = UpdateContext {
                    icons: &mut self.icons,
                    dark_mode: self.theme.dark_mode(),
                    palette,
                };
                let event = self.sidebar.update(msg, &mut ctx);

                if self.config.sidebar_expanded != self.sidebar.expanded() {
                    self.config.sidebar_expanded = self.sidebar.expanded();
                    self.persist();
                }

                match event {
                    sidebar::Event::Navigate(key) => self.set_view(key),
                    sidebar::Event::ThemeToggled => self.toggle_theme(),
                    sidebar::Event::None => {}
                }
            }
            Message::Tick(now) => {
                let palette = ShellPalette::resolve(&self.theme);
                let mut ctx = UpdateContext {
                    icons: &mut self.icons,
                    dark_mode: self.theme.dark_mode(),
                    palette,
                };
                self.sidebar.tick_at(now, &mut ctx);
            }
        }
        Task::none()
    }
}
