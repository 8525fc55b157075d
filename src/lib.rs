// SPDX-License-Identifier: MPL-2.0
//! `iced_shell` is a sidebar-navigated desktop application shell built with
//! the Iced GUI framework.
//!
//! It provides a collapsible navigation sidebar with nested submenus, a
//! light/dark theme system backed by stylesheet files, and SVG icons that are
//! rasterized and re-tinted at runtime to follow the active theme.

pub mod app;
pub mod error;
pub mod icons;
pub mod theme;
pub mod ui;
