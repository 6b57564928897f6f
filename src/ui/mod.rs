//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`layout`]: Window regions and hit-testing geometry
//! - rendering of the menu bar, toolbar, tab strip, editor and status bar
//! - modal overlays (File menu, path prompt, notices, help)

pub mod layout;

mod overlays;
mod render;
mod status;

use ratatui::style::Color;

pub use layout::{Chrome, EditorView, chrome, editor_position_at, editor_view};
pub use render::render;

/// Text centered in the header bar.
pub const HEADER_TITLE: &str = "My Notes";
pub const HEADER_BG: Color = Color::Rgb(0x4a, 0x90, 0xe2);

#[cfg(test)]
mod tests;
