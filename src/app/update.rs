use std::path::PathBuf;

use crate::app::Model;
use crate::app::model::{FILE_MENU, MenuItem, Prompt, PromptKind, Severity, ToolbarAction};
use crate::editor::Direction;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editing the selected tab
    /// Insert a character at the cursor
    InsertChar(char),
    /// Insert pasted text at the cursor
    Paste(String),
    /// Split line at cursor (Enter)
    SplitLine,
    /// Delete character before cursor (Backspace)
    DeleteBack,
    /// Delete character at cursor (Delete)
    DeleteForward,
    /// Move cursor in a direction
    MoveCursor(Direction),
    /// Move cursor to beginning of line (Home)
    MoveHome,
    /// Move cursor to end of line (End)
    MoveEnd,
    /// Move cursor to start of buffer (Ctrl+Home)
    MoveToStart,
    /// Move cursor to end of buffer (Ctrl+End)
    MoveToEnd,
    /// Move cursor one editor page up
    PageUp,
    /// Move cursor one editor page down
    PageDown,
    /// Move cursor to absolute position (line, col), e.g. from a mouse click
    MoveTo(usize, usize),
    /// Scroll editor view up by n lines
    ScrollUp(usize),
    /// Scroll editor view down by n lines
    ScrollDown(usize),

    // Tabs
    /// Append a new empty tab and select it
    NewTab,
    /// Close the selected tab (refused for the last one)
    CloseTab,
    /// Select tab by index
    SelectTab(usize),
    /// Select the next tab (wraps)
    NextTab,
    /// Select the previous tab (wraps)
    PrevTab,

    // Notes
    /// Clear the selected tab and autosave the empty text
    DeleteNote,
    /// Ask for a path to open into the selected tab
    OpenNote,
    /// Ask for a path to save the selected tab to
    SaveNote,
    /// Load a file into the selected tab
    OpenFile(PathBuf),
    /// Write the selected tab to a file
    SaveFile(PathBuf),

    // Prompt
    /// Replace the prompt input
    PromptInput(String),
    /// Close the prompt without doing anything
    PromptCancel,

    // Menu
    /// Open or close the File menu
    ToggleMenu,
    /// Close the File menu
    CloseMenu,
    /// Move menu highlight up
    MenuUp,
    /// Move menu highlight down
    MenuDown,

    // Overlays
    /// Close the modal notice
    DismissNotice,
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,

    // Window
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Quit the application
    Quit,
}

impl Message {
    /// Whether this message may change the selected tab's text, which
    /// triggers an autosave write.
    pub const fn edits_text(&self) -> bool {
        matches!(
            self,
            Self::InsertChar(_)
                | Self::Paste(_)
                | Self::SplitLine
                | Self::DeleteBack
                | Self::DeleteForward
                | Self::DeleteNote
        )
    }
}

impl From<MenuItem> for Message {
    fn from(item: MenuItem) -> Self {
        match item {
            MenuItem::Open => Self::OpenNote,
            MenuItem::Save => Self::SaveNote,
            MenuItem::Exit => Self::Quit,
        }
    }
}

impl From<ToolbarAction> for Message {
    fn from(action: ToolbarAction) -> Self {
        match action {
            ToolbarAction::NewTab => Self::NewTab,
            ToolbarAction::CloseTab => Self::CloseTab,
            ToolbarAction::Delete => Self::DeleteNote,
        }
    }
}

/// Pure function that updates the model based on a message.
///
/// File I/O happens afterwards in the side-effect pass.
pub fn update(mut model: Model, msg: Message) -> Model {
    if !matches!(
        msg,
        Message::ToggleMenu | Message::MenuUp | Message::MenuDown | Message::Resize(_, _)
    ) {
        model.menu_open = false;
    }

    match msg {
        // Editing
        Message::InsertChar(ch) => {
            model.notebook.selected_tab_mut().buffer.insert_char(ch);
            model.ensure_cursor_visible();
        }
        Message::Paste(text) => {
            model.notebook.selected_tab_mut().buffer.insert_str(&text);
            model.ensure_cursor_visible();
        }
        Message::SplitLine => {
            model.notebook.selected_tab_mut().buffer.split_line();
            model.ensure_cursor_visible();
        }
        Message::DeleteBack => {
            model.notebook.selected_tab_mut().buffer.delete_back();
            model.ensure_cursor_visible();
        }
        Message::DeleteForward => {
            model.notebook.selected_tab_mut().buffer.delete_forward();
        }
        Message::MoveCursor(dir) => {
            model.notebook.selected_tab_mut().buffer.move_cursor(dir);
            model.ensure_cursor_visible();
        }
        Message::MoveHome => {
            model.notebook.selected_tab_mut().buffer.move_home();
        }
        Message::MoveEnd => {
            model.notebook.selected_tab_mut().buffer.move_end();
        }
        Message::MoveToStart => {
            model.notebook.selected_tab_mut().buffer.move_to_start();
            model.ensure_cursor_visible();
        }
        Message::MoveToEnd => {
            model.notebook.selected_tab_mut().buffer.move_to_end();
            model.ensure_cursor_visible();
        }
        Message::PageUp => move_page(&mut model, Direction::Up),
        Message::PageDown => move_page(&mut model, Direction::Down),
        Message::MoveTo(line, col) => {
            model.notebook.selected_tab_mut().buffer.move_to(line, col);
            model.ensure_cursor_visible();
        }
        Message::ScrollUp(n) => {
            let tab = model.notebook.selected_tab_mut();
            tab.scroll_offset = tab.scroll_offset.saturating_sub(n);
        }
        Message::ScrollDown(n) => {
            let tab = model.notebook.selected_tab_mut();
            let max = tab.buffer.line_count().saturating_sub(1);
            tab.scroll_offset = (tab.scroll_offset + n).min(max);
        }

        // Tabs
        Message::NewTab => {
            model.notebook.create_tab();
        }
        Message::CloseTab => {
            if let Err(err) = model.notebook.close_selected() {
                model.show_notice(Severity::Warning, err.to_string());
            }
        }
        Message::SelectTab(idx) => {
            model.notebook.select(idx);
        }
        Message::NextTab => model.notebook.select_next(),
        Message::PrevTab => model.notebook.select_prev(),

        // Notes
        Message::DeleteNote => {
            let tab = model.notebook.selected_tab_mut();
            tab.buffer.clear();
            tab.scroll_offset = 0;
        }
        Message::OpenNote => {
            model.prompt = Some(Prompt {
                kind: PromptKind::Open,
                input: String::new(),
            });
        }
        Message::SaveNote => {
            model.prompt = Some(Prompt {
                kind: PromptKind::Save,
                input: String::new(),
            });
        }
        // OpenFile/SaveFile: the I/O runs in the side-effect pass
        Message::OpenFile(_) | Message::SaveFile(_) | Message::PromptCancel => {
            model.prompt = None;
        }
        Message::PromptInput(input) => {
            if let Some(prompt) = &mut model.prompt {
                prompt.input = input;
            }
        }

        // Menu
        Message::ToggleMenu => {
            model.menu_open = !model.menu_open;
            model.menu_selected = 0;
        }
        // Already closed above
        Message::CloseMenu => {}
        Message::MenuUp => {
            model.menu_selected = model
                .menu_selected
                .checked_sub(1)
                .unwrap_or(FILE_MENU.len() - 1);
        }
        Message::MenuDown => {
            model.menu_selected = (model.menu_selected + 1) % FILE_MENU.len();
        }

        // Overlays
        Message::DismissNotice => {
            model.notice = None;
        }
        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
        }
        Message::HideHelp => {
            model.help_visible = false;
        }

        // Window
        Message::Resize(width, height) => {
            model.width = width;
            model.height = height;
            model.ensure_cursor_visible();
        }

        // Application
        Message::Quit => {
            model.should_quit = true;
        }
    }
    model
}

fn move_page(model: &mut Model, direction: Direction) {
    let rows = model.editor_height().max(1);
    model
        .notebook
        .selected_tab_mut()
        .buffer
        .move_lines(rows, direction);
    model.ensure_cursor_visible();
}
