// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a sidebar pane next to the content pane. The sidebar column
//! takes the animated width, so every subscription tick re-lays-out the row
//! and the content pane reflows with it. The submenu popover, when open, is
//! stacked on top of both panes at the trigger button's position.

use super::{App, Message};
use crate::ui::styles;
use iced::widget::{Container, Row, Stack};
use iced::{Element, Length};

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let palette = styles::ShellPalette::resolve(&self.theme);

        let sidebar = Container::new(
            self.sidebar
                .view(&self.icons, palette)
                .map(Message::Sidebar),
        )
        .width(Length::Fixed(self.sidebar.width()))
        .height(Length::Fill)
        .style(styles::container::sidebar(palette));

        let content = Container::new(match self.current_view {
            Some(key) => self.views.view(key, palette),
            None => iced::widget::Column::new().into(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::content_pane(
            palette,
            self.theme.content_shadow(),
        ));

        let panes = Row::new().push(sidebar).push(content);

        match self.sidebar.popover_overlay(&self.icons, palette) {
            Some(overlay) => Stack::new()
                .push(panes)
                .push(overlay.map(Message::Sidebar))
                .into(),
            None => panes.into(),
        }
    }
}
