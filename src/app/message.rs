// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::sidebar;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Sidebar messages are
/// forwarded wholesale so the sidebar keeps a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Sidebar(sidebar::Message),
    /// Animation frame while the sidebar width is in flight.
    Tick(Instant),
}

/// Launch options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// View key to open with, overriding the persisted startup view.
    pub view: Option<String>,
    /// Theme mode override ("light", "dark", "system").
    pub theme: Option<String>,
}
