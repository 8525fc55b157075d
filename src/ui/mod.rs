// SPDX-License-Identifier: MPL-2.0
//! User interface building blocks: the navigation sidebar, the view
//! registry, and the shared design tokens and styles they render with.

pub mod design_tokens;
pub mod menu;
pub mod nav_context_menu;
pub mod sidebar;
pub mod styles;
pub mod views;
