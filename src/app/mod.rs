//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering
//!
//! File I/O (autosave, open, save) runs in a side-effect pass after each
//! `update`, never inside it.

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{
    FILE_MENU, MenuItem, Model, Notice, Prompt, PromptKind, Severity, TOOLBAR, ToolbarAction,
};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::notebook::{Autosave, DEFAULT_AUTOSAVE_FILE};

/// Title written to the terminal window.
pub const WINDOW_TITLE: &str = "My Diary Notes";

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    autosave_path: PathBuf,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    /// Create an application autosaving to the default path.
    pub fn new() -> Self {
        Self {
            autosave_path: PathBuf::from(DEFAULT_AUTOSAVE_FILE),
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Autosave to `path` instead of the default.
    pub fn with_autosave_path(mut self, path: PathBuf) -> Self {
        self.autosave_path = path;
        self
    }

    /// Set config paths to show in help.
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }

    /// The autosave slot this app writes to.
    pub fn autosave_slot(&self) -> Autosave {
        Autosave::new(self.autosave_path.clone())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
