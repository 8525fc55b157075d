// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only periodic work is the sidebar width animation, so the tick
//! subscription exists exactly while an animation is in flight and the app
//! goes fully idle otherwise.

use super::{App, Message};
use iced::{time, Subscription};
use std::time::Duration;

/// Frame interval for the sidebar width animation, roughly 60 Hz.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

impl App {
    pub(super) fn subscription(&self) -> Subscription<Message> {
        if self.sidebar.is_animating() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }
}
