// SPDX-License-Identifier: MPL-2.0
//! The navigation sidebar.
//!
//! State machine: the sidebar is `Expanded` or `Collapsed`, with a transient
//! width animation between the two. The logical `expanded` flag flips the
//! moment the user toggles; the interpolated width catches up over a fixed
//! 80 ms, and the text/icon-size/submenu visibility rules are finalized only
//! once the animation completes. Toggling again mid-flight simply replaces
//! the animation, starting from the current interpolated width.
//!
//! While collapsed, hovering a submenu holder opens a floating popover with
//! its entries. The popover lifecycle is an explicit Closed → Open → Closed
//! machine: the popover and a ghost region covering its trigger button are
//! wrapped in a single pointer area, so "the pointer left both bounds" is one
//! exit event with no sampling gaps.

use crate::icons::{IconSlot, IconStore};
use crate::ui::design_tokens::{sizing, spacing, SIDEBAR_ANIMATION_MS};
use crate::ui::menu::{self, EntryId, MENU};
use crate::ui::nav_context_menu::{self, Popover};
use crate::ui::styles::{self, ShellPalette};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, mouse_area, Column, Container, Row, Space, Stack, Text};
use iced::{Element, Length};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Per-button state, keyed by [`EntryId`] instead of widget properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavButtonState {
    pub selected: bool,
    pub submenu_open: bool,
}

/// Width interpolation between the two sidebar widths. Linear, fixed
/// duration, fire-and-forget.
#[derive(Debug, Clone, Copy)]
struct Animation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl Animation {
    fn width_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }

    fn finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// Popover lifecycle. One popover at most, tied to one submenu holder.
#[derive(Debug, Clone)]
enum PopoverLifecycle {
    Closed,
    Open(Popover),
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleSidebar,
    ToggleTheme,
    NavPressed(EntryId),
    SubmenuHovered(EntryId),
    PopoverRegionExited,
    Popover(nav_context_menu::Message),
}

/// Events propagated to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(&'static str),
    ThemeToggled,
}

/// Mutable context the sidebar needs while updating: the icon registry and
/// the colors the current theme resolves to.
pub struct UpdateContext<'a> {
    pub icons: &'a mut IconStore,
    pub dark_mode: bool,
    pub palette: ShellPalette,
}

#[derive(Debug)]
pub struct State {
    expanded: bool,
    width: f32,
    animation: Option<Animation>,
    buttons: BTreeMap<EntryId, NavButtonState>,
    popover: PopoverLifecycle,
    active_view: Option<&'static str>,
}

impl State {
    pub fn new(ctx: &mut UpdateContext<'_>, expanded: bool) -> Self {
        ctx.icons.register(
            IconSlot::SidebarToggle,
            "menu",
            None,
            sizing::ICON_EXPANDED,
            ctx.dark_mode,
        );
        ctx.icons.register(
            IconSlot::ThemeToggle,
            "moon",
            Some("sun"),
            sizing::ICON_EXPANDED,
            ctx.dark_mode,
        );
        for (i, entry) in MENU.iter().enumerate() {
            if entry.has_submenu() {
                ctx.icons.register(
                    IconSlot::Arrow(EntryId::Top(i)),
                    "arrow_menu_open",
                    None,
                    sizing::ICON_ARROW,
                    ctx.dark_mode,
                );
            }
        }

        let mut state = Self {
            expanded,
            width: target_width(expanded),
            animation: None,
            buttons: menu::ids().map(|id| (id, NavButtonState::default())).collect(),
            popover: PopoverLifecycle::Closed,
            active_view: None,
        };
        state.update_menu_visibility(ctx);
        state
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn active_view(&self) -> Option<&'static str> {
        self.active_view
    }

    pub fn button_state(&self, id: EntryId) -> NavButtonState {
        self.buttons.get(&id).copied().unwrap_or_default()
    }

    /// Whether a submenu popover is currently open (for `id`, if given).
    pub fn context_is_open(&self, id: Option<EntryId>) -> bool {
        match (&self.popover, id) {
            (PopoverLifecycle::Open(p), Some(id)) => p.parent() == id,
            (PopoverLifecycle::Open(_), None) => true,
            (PopoverLifecycle::Closed, _) => false,
        }
    }

    pub fn update(&mut self, message: Message, ctx: &mut UpdateContext<'_>) -> Event {
        match message {
            Message::ToggleSidebar => {
                self.toggle(ctx);
                Event::None
            }
            Message::ToggleTheme => Event::ThemeToggled,
            Message::NavPressed(id) => menu::entry(id)
                .and_then(|e| e.view_key)
                .map(Event::Navigate)
                .unwrap_or(Event::None),
            Message::SubmenuHovered(id) => {
                self.open_popover(id, ctx);
                Event::None
            }
            Message::PopoverRegionExited => {
                self.close_popover(ctx.icons);
                Event::None
            }
            Message::Popover(nav_context_menu::Message::Select(id)) => {
                if let PopoverLifecycle::Open(popover) = &mut self.popover {
                    popover.select(id, ctx.icons, ctx.palette);
                }
                menu::entry(id)
                    .and_then(|e| e.view_key)
                    .map(Event::Navigate)
                    .unwrap_or(Event::None)
            }
        }
    }

    /// Flips the logical state immediately and (re)starts the width
    /// animation from the current width. Last toggle wins.
    pub fn toggle(&mut self, ctx: &mut UpdateContext<'_>) {
        self.expanded = !self.expanded;
        self.close_popover(ctx.icons);
        self.animation = Some(Animation {
            from: self.width,
            to: target_width(self.expanded),
            started: Instant::now(),
            duration: Duration::from_millis(SIDEBAR_ANIMATION_MS),
        });
    }

    /// Advances the width animation. On completion the layout rules for the
    /// new state are finalized.
    pub fn tick_at(&mut self, now: Instant, ctx: &mut UpdateContext<'_>) {
        let Some(animation) = self.animation else {
            return;
        };
        self.width = animation.width_at(now);
        if animation.finished(now) {
            self.width = animation.to;
            self.animation = None;
            self.update_menu_visibility(ctx);
        }
    }

    /// Records the active view and refreshes selection state and icon tints.
    pub fn highlight(&mut self, active_view: Option<&'static str>, ctx: &mut UpdateContext<'_>) {
        self.active_view = active_view;
        self.apply_highlight(ctx);
    }

    /// Re-applies selection tints with the current palette; called after a
    /// theme toggle re-tinted all icons to the plain theme color.
    pub fn retint(&mut self, ctx: &mut UpdateContext<'_>) {
        self.apply_highlight(ctx);
    }

    /// Finalizes text/icon-size/submenu visibility for the current state.
    /// Expanded: full text, 24 px icons, permanent submenu panels, arrows
    /// hidden. Collapsed: no text, 32 px icons, submenu panels hidden,
    /// arrows shown. The view derives all of that from `expanded`; what has
    /// to happen here is the icon re-registration at the new size.
    fn update_menu_visibility(&mut self, ctx: &mut UpdateContext<'_>) {
        let size = if self.expanded {
            sizing::ICON_EXPANDED
        } else {
            sizing::ICON_COLLAPSED
        };
        for id in menu::ids() {
            if let Some(entry) = menu::entry(id) {
                ctx.icons
                    .register(IconSlot::Nav(id), entry.icon, None, size, ctx.dark_mode);
            }
        }
        ctx.icons.update_icons(ctx.dark_mode);
        self.apply_highlight(ctx);
    }

    fn apply_highlight(&mut self, ctx: &mut UpdateContext<'_>) {
        for (i, entry) in MENU.iter().enumerate() {
            let id = EntryId::Top(i);
            let own_active = matches!(
                (entry.view_key, self.active_view),
                (Some(key), Some(current)) if key == current
            );
            let submenu_active = entry.submenu.iter().any(|sub| {
                matches!(
                    (sub.view_key, self.active_view),
                    (Some(key), Some(current)) if key == current
                )
            });
            // A parent lights up for its children only while collapsed; the
            // visible submenu panel takes over that job when expanded.
            let selected = own_active || (submenu_active && !self.expanded);
            if let Some(state) = self.buttons.get_mut(&id) {
                state.selected = selected;
            }

            let fg = ctx.palette.nav_foreground(selected);
            ctx.icons.update_icon_color(IconSlot::Nav(id), || fg);
            if entry.has_submenu() {
                ctx.icons.update_icon_color(IconSlot::Arrow(id), || fg);
            }

            if self.expanded {
                for (j, sub) in entry.submenu.iter().enumerate() {
                    let sub_id = EntryId::Sub(i, j);
                    let sub_selected = matches!(
                        (sub.view_key, self.active_view),
                        (Some(key), Some(current)) if key == current
                    );
                    if let Some(state) = self.buttons.get_mut(&sub_id) {
                        state.selected = sub_selected;
                    }
                    let sub_fg = ctx.palette.nav_foreground(sub_selected);
                    ctx.icons.update_icon_color(IconSlot::Nav(sub_id), || sub_fg);
                }
            }
        }
    }

    fn open_popover(&mut self, id: EntryId, ctx: &mut UpdateContext<'_>) {
        if self.expanded {
            return;
        }
        let Some(entry) = menu::entry(id) else {
            return;
        };
        if !entry.has_submenu() {
            return;
        }
        // context_is_open guard: hovering the same trigger again is a no-op.
        if self.context_is_open(Some(id)) {
            return;
        }
        self.close_popover(ctx.icons);
        let popover = Popover::open(id, self.active_view, ctx.icons, ctx.dark_mode, ctx.palette);
        if let Some(state) = self.buttons.get_mut(&id) {
            state.submenu_open = true;
        }
        self.popover = PopoverLifecycle::Open(popover);
    }

    fn close_popover(&mut self, icons: &mut IconStore) {
        if let PopoverLifecycle::Open(popover) = &self.popover {
            popover.close(icons);
            if let Some(state) = self.buttons.get_mut(&popover.parent()) {
                state.submenu_open = false;
            }
        }
        self.popover = PopoverLifecycle::Closed;
    }

    // ------------------------------------------------------------------
    // View
    // ------------------------------------------------------------------

    pub fn view<'a>(&'a self, icons: &IconStore, palette: ShellPalette) -> Element<'a, Message> {
        let mut column = Column::new()
            .spacing(spacing::XS)
            .push(self.top_bar(icons, palette));

        for (i, entry) in MENU.iter().enumerate() {
            let id = EntryId::Top(i);
            column = column.push(self.nav_button(id, entry, icons, palette));

            // The nested submenu panel is permanently visible while expanded
            // and hidden entirely while collapsed.
            if entry.has_submenu() && self.expanded {
                let mut submenu = Column::new().spacing(spacing::XS);
                for (j, sub) in entry.submenu.iter().enumerate() {
                    let sub_id = EntryId::Sub(i, j);
                    let selected = self.button_state(sub_id).selected;
                    let row = Row::new()
                        .spacing(spacing::SM)
                        .align_y(Vertical::Center)
                        .push(sized_icon(icons, IconSlot::Nav(sub_id), sizing::ICON_EXPANDED))
                        .push(Text::new(sub.title).size(14));
                    submenu = submenu.push(
                        button(row)
                            .on_press(Message::NavPressed(sub_id))
                            .width(Length::Fill)
                            .style(styles::button::nav(selected, palette)),
                    );
                }
                column = column.push(
                    Container::new(submenu).padding(iced::Padding {
                        left: spacing::SM,
                        ..iced::Padding::ZERO
                    }),
                );
            }
        }

        column
            .push(Space::new().width(Length::Fill).height(Length::Fill))
            .into()
    }

    fn top_bar<'a>(&self, icons: &IconStore, palette: ShellPalette) -> Element<'a, Message> {
        let toggle = button(sized_icon(
            icons,
            IconSlot::SidebarToggle,
            sizing::ICON_EXPANDED,
        ))
        .on_press(Message::ToggleSidebar)
        .width(Length::Fixed(sizing::NAV_BUTTON))
        .height(Length::Fixed(sizing::NAV_BUTTON))
        .style(styles::button::icon(palette));

        let theme = button(sized_icon(
            icons,
            IconSlot::ThemeToggle,
            sizing::ICON_EXPANDED,
        ))
        .on_press(Message::ToggleTheme)
        .width(Length::Fixed(sizing::NAV_BUTTON))
        .height(Length::Fixed(sizing::NAV_BUTTON))
        .style(styles::button::icon(palette));

        // Horizontal while expanded, stacked while collapsed.
        if self.expanded {
            Row::new()
                .spacing(spacing::XS)
                .padding(spacing::XS)
                .push(toggle)
                .push(theme)
                .into()
        } else {
            Column::new()
                .spacing(spacing::XS)
                .padding(spacing::XS)
                .push(toggle)
                .push(theme)
                .into()
        }
    }

    fn nav_button<'a>(
        &self,
        id: EntryId,
        entry: &'static menu::MenuEntry,
        icons: &IconStore,
        palette: ShellPalette,
    ) -> Element<'a, Message> {
        let selected = self.button_state(id).selected;

        let nav = if self.expanded {
            let row = Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(sized_icon(icons, IconSlot::Nav(id), sizing::ICON_EXPANDED))
                .push(Text::new(entry.title).size(14));
            let styled = button(row).width(Length::Fill);
            if entry.has_submenu() {
                // The visible submenu panel replaces the holder's own
                // navigational function, so it is not a click target.
                styled.style(styles::button::submenu_title(palette))
            } else {
                styled
                    .on_press(Message::NavPressed(id))
                    .style(styles::button::nav(selected, palette))
            }
        } else {
            let icon = sized_icon(icons, IconSlot::Nav(id), sizing::ICON_COLLAPSED);
            let content: Element<'a, Message> = if entry.has_submenu() {
                // Arrow indicator in the corner, only shown while collapsed.
                Stack::new()
                    .push(
                        Container::new(icon)
                            .width(Length::Fill)
                            .height(Length::Fill)
                            .align_x(Horizontal::Center)
                            .align_y(Vertical::Center),
                    )
                    .push(
                        Container::new(sized_icon(
                            icons,
                            IconSlot::Arrow(id),
                            sizing::ICON_ARROW,
                        ))
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .align_x(Horizontal::Right)
                        .align_y(Vertical::Bottom),
                    )
                    .into()
            } else {
                Container::new(icon)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center)
                    .into()
            };
            // Collapsed holders are clickable again; pressing one is a no-op
            // because they carry no view key.
            button(content)
                .on_press(Message::NavPressed(id))
                .width(Length::Fixed(sizing::NAV_BUTTON))
                .height(Length::Fixed(sizing::NAV_BUTTON))
                .style(styles::button::nav(selected, palette))
        };

        if entry.has_submenu() && !self.expanded {
            mouse_area(nav)
                .on_enter(Message::SubmenuHovered(id))
                .into()
        } else {
            nav.into()
        }
    }

    /// Floating popover overlay, positioned at the trigger button's
    /// top-right corner. The ghost space in front of the panel covers the
    /// trigger, so the wrapping pointer area spans both bounds; leaving that
    /// combined region is the close signal.
    pub fn popover_overlay<'a>(
        &'a self,
        icons: &IconStore,
        palette: ShellPalette,
    ) -> Option<Element<'a, Message>> {
        let PopoverLifecycle::Open(popover) = &self.popover else {
            return None;
        };

        let panel = popover.view(icons, palette).map(Message::Popover);
        let region = Row::new()
            .push(
                Space::new()
                    .width(Length::Fixed(sizing::SIDEBAR_COLLAPSED + 1.0))
                    .height(Length::Fixed(sizing::NAV_BUTTON)),
            )
            .push(panel);

        let overlay = Column::new()
            .push(
                Space::new()
                    .width(Length::Shrink)
                    .height(Length::Fixed(self.entry_y(popover.parent()))),
            )
            .push(mouse_area(region).on_exit(Message::PopoverRegionExited));

        Some(overlay.into())
    }

    /// Vertical offset of a top-level button within the sidebar, derived
    /// from the layout constants the view uses.
    fn entry_y(&self, id: EntryId) -> f32 {
        let top_bar = if self.expanded {
            sizing::TOP_BAR_HORIZONTAL
        } else {
            sizing::TOP_BAR_VERTICAL
        };
        top_bar + spacing::XS + id.top() as f32 * (sizing::NAV_BUTTON + spacing::XS)
    }
}

fn target_width(expanded: bool) -> f32 {
    if expanded {
        sizing::SIDEBAR_EXPANDED
    } else {
        sizing::SIDEBAR_COLLAPSED
    }
}

fn sized_icon<'a, M: 'a>(icons: &IconStore, slot: IconSlot, size: u32) -> Element<'a, M> {
    image(icons.handle(slot))
        .width(Length::Fixed(size as f32))
        .height(Length::Fixed(size as f32))
        .into()
}
