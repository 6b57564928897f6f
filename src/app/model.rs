use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::notebook::{Notebook, Tab};

/// How serious a notice or toast is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

#[derive(Debug, Clone)]
struct Toast {
    severity: Severity,
    message: String,
    expires_at: Instant,
}

/// A modal message box. Any key or click dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Open,
    Save,
}

impl PromptKind {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Open => "Open note",
            Self::Save => "Save note as",
        }
    }
}

/// In-terminal stand-in for a native open/save dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

/// Entries of the File menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Open,
    Save,
    Exit,
}

pub const FILE_MENU: [MenuItem; 3] = [MenuItem::Open, MenuItem::Save, MenuItem::Exit];

impl MenuItem {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Save => "Save",
            Self::Exit => "Exit",
        }
    }

    pub const fn shortcut(self) -> &'static str {
        match self {
            Self::Open => "Ctrl+O",
            Self::Save => "Ctrl+S",
            Self::Exit => "Ctrl+Q",
        }
    }
}

/// Buttons on the toolbar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    NewTab,
    CloseTab,
    Delete,
}

pub const TOOLBAR: [ToolbarAction; 3] = [
    ToolbarAction::NewTab,
    ToolbarAction::CloseTab,
    ToolbarAction::Delete,
];

impl ToolbarAction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewTab => "+ New Tab",
            Self::CloseTab => "Close Tab",
            Self::Delete => "Delete",
        }
    }
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
pub struct Model {
    pub notebook: Notebook,
    /// Terminal size in cells.
    pub width: u16,
    pub height: u16,
    /// Whether the File menu dropdown is open
    pub menu_open: bool,
    /// Highlighted index into [`FILE_MENU`]
    pub menu_selected: usize,
    /// Active open/save path prompt
    pub prompt: Option<Prompt>,
    /// Active modal notice
    pub notice: Option<Notice>,
    /// Whether help overlay is visible
    pub help_visible: bool,
    toast: Option<Toast>,
    /// Set while autosave writes keep failing, so the failure is logged once
    pub(super) autosave_failing: bool,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("tabs", &self.notebook.len())
            .field("selected", &self.notebook.selected_index())
            .field("menu_open", &self.menu_open)
            .field("prompt", &self.prompt)
            .field("notice", &self.notice)
            .finish_non_exhaustive()
    }
}

impl Model {
    pub fn new(notebook: Notebook, terminal_size: (u16, u16)) -> Self {
        Self {
            notebook,
            width: terminal_size.0,
            height: terminal_size.1,
            menu_open: false,
            menu_selected: 0,
            prompt: None,
            notice: None,
            help_visible: false,
            toast: None,
            autosave_failing: false,
            config_global_path: None,
            config_local_path: None,
            should_quit: false,
        }
    }

    /// The whole terminal as a rect.
    pub const fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Rows available to the editor for the current terminal size.
    pub fn editor_height(&self) -> usize {
        usize::from(crate::ui::chrome(self.area()).editor.height)
    }

    pub fn selected_tab(&self) -> &Tab {
        self.notebook.selected_tab()
    }

    /// Whether a modal overlay currently captures input.
    pub const fn overlay_active(&self) -> bool {
        self.notice.is_some() || self.prompt.is_some() || self.help_visible
    }

    pub(super) fn show_notice(&mut self, severity: Severity, message: impl Into<String>) {
        self.notice = Some(Notice {
            severity,
            message: message.into(),
        });
    }

    pub(super) fn show_toast(&mut self, severity: Severity, message: impl Into<String>) {
        self.toast = Some(Toast {
            severity,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, Severity)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.severity))
    }

    /// Scroll the selected tab so its cursor line is on screen.
    pub(super) fn ensure_cursor_visible(&mut self) {
        let height = self.editor_height();
        let tab = self.notebook.selected_tab_mut();
        let line = tab.buffer.cursor().line;
        if height == 0 || line < tab.scroll_offset {
            tab.scroll_offset = line;
        } else if line >= tab.scroll_offset + height {
            tab.scroll_offset = line + 1 - height;
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Notebook::default(), (80, 24))
    }
}
