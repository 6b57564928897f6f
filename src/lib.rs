// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. notebook::NotebookError)
    clippy::module_name_repetitions
)]

//! # Diarynotes
//!
//! A tabbed note-taking app for the terminal.
//!
//! Every edit in the selected tab is written to an autosave file, and the
//! first tab is restored from it on the next launch. Notes can also be
//! opened from and saved to arbitrary text files.
//!
//! ## Architecture
//!
//! Diarynotes uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`notebook`]: Tabs, autosave slot and note files
//! - [`editor`]: Text buffer and cursor for a single note
//! - [`ui`]: Terminal UI components
//! - [`config`]: Persistent command-line defaults
//! - [`logging`]: Tracing subscriber setup

pub mod app;
pub mod config;
pub mod editor;
pub mod logging;
pub mod notebook;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::EditorBuffer;
    pub use crate::notebook::{Autosave, Notebook};
}
