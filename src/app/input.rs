use std::path::PathBuf;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{App, FILE_MENU, Message, Model, PromptKind};
use crate::editor::Direction;
use crate::ui::layout;

impl App {
    pub(super) fn handle_event(event: Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(key, model),
            Event::Mouse(mouse) => Self::handle_mouse(mouse, model),
            Event::Paste(text) if !model.overlay_active() => Some(Message::Paste(text)),
            Event::Paste(text) => model.prompt.as_ref().map(|prompt| {
                let mut next = prompt.input.clone();
                next.push_str(text.lines().next().unwrap_or_default());
                Message::PromptInput(next)
            }),
            Event::Resize(w, h) => Some(Message::Resize(w, h)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if model.notice.is_some() {
            return Some(Message::DismissNotice);
        }
        if model.help_visible {
            return Some(Message::HideHelp);
        }

        if let Some(prompt) = &model.prompt {
            return match key.code {
                KeyCode::Esc => Some(Message::PromptCancel),
                KeyCode::Enter => {
                    // An empty path is a cancelled dialog.
                    let input = prompt.input.trim();
                    if input.is_empty() {
                        return Some(Message::PromptCancel);
                    }
                    let path = PathBuf::from(input);
                    Some(match prompt.kind {
                        PromptKind::Open => Message::OpenFile(path),
                        PromptKind::Save => Message::SaveFile(path),
                    })
                }
                KeyCode::Backspace => {
                    let mut next = prompt.input.clone();
                    next.pop();
                    Some(Message::PromptInput(next))
                }
                KeyCode::Char(c)
                    if !key.modifiers.contains(KeyModifiers::CONTROL)
                        && !key.modifiers.contains(KeyModifiers::ALT) =>
                {
                    let mut next = prompt.input.clone();
                    next.push(c);
                    Some(Message::PromptInput(next))
                }
                _ => None,
            };
        }

        if model.menu_open {
            return match key.code {
                KeyCode::Up => Some(Message::MenuUp),
                KeyCode::Down => Some(Message::MenuDown),
                KeyCode::Enter => FILE_MENU
                    .get(model.menu_selected)
                    .map(|item| Message::from(*item)),
                KeyCode::F(10) => Some(Message::ToggleMenu),
                _ => Some(Message::CloseMenu),
            };
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        if ctrl {
            return match key.code {
                KeyCode::Char('t') => Some(Message::NewTab),
                KeyCode::Char('w') => Some(Message::CloseTab),
                KeyCode::Char('d') => Some(Message::DeleteNote),
                KeyCode::Char('o') => Some(Message::OpenNote),
                KeyCode::Char('s') => Some(Message::SaveNote),
                KeyCode::Char('q' | 'c') => Some(Message::Quit),
                KeyCode::PageDown => Some(Message::NextTab),
                KeyCode::PageUp => Some(Message::PrevTab),
                KeyCode::Home => Some(Message::MoveToStart),
                KeyCode::End => Some(Message::MoveToEnd),
                _ => None,
            };
        }

        if alt {
            return match key.code {
                KeyCode::Char('f') => Some(Message::ToggleMenu),
                KeyCode::Right => Some(Message::NextTab),
                KeyCode::Left => Some(Message::PrevTab),
                _ => None,
            };
        }

        match key.code {
            KeyCode::F(1) => Some(Message::ToggleHelp),
            KeyCode::F(10) => Some(Message::ToggleMenu),
            KeyCode::Char(c) => Some(Message::InsertChar(c)),
            KeyCode::Tab => Some(Message::InsertChar('\t')),
            KeyCode::Enter => Some(Message::SplitLine),
            KeyCode::Backspace => Some(Message::DeleteBack),
            KeyCode::Delete => Some(Message::DeleteForward),
            KeyCode::Up => Some(Message::MoveCursor(Direction::Up)),
            KeyCode::Down => Some(Message::MoveCursor(Direction::Down)),
            KeyCode::Left => Some(Message::MoveCursor(Direction::Left)),
            KeyCode::Right => Some(Message::MoveCursor(Direction::Right)),
            KeyCode::Home => Some(Message::MoveHome),
            KeyCode::End => Some(Message::MoveEnd),
            KeyCode::PageUp => Some(Message::PageUp),
            KeyCode::PageDown => Some(Message::PageDown),
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        let clicked = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left));

        if model.notice.is_some() {
            return clicked.then_some(Message::DismissNotice);
        }
        if model.help_visible {
            return clicked.then_some(Message::HideHelp);
        }
        if model.prompt.is_some() {
            return None;
        }

        let area = model.area();
        let chrome = crate::ui::chrome(area);
        let (col, row) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::ScrollUp if !model.menu_open => return Some(Message::ScrollUp(3)),
            MouseEventKind::ScrollDown if !model.menu_open => {
                return Some(Message::ScrollDown(3));
            }
            _ if !clicked => return None,
            _ => {}
        }

        if point_in_rect(col, row, layout::file_menu_title_rect(chrome.menu_bar)) {
            return Some(Message::ToggleMenu);
        }
        if model.menu_open {
            let menu = layout::file_menu_rect(area, chrome.menu_bar);
            if let Some(item) = layout::file_menu_item_at(menu, col, row) {
                return Some(item.into());
            }
            if point_in_rect(col, row, menu) {
                // Border or separator
                return None;
            }
            return Some(Message::CloseMenu);
        }

        if let Some((action, _)) = layout::toolbar_buttons(chrome.toolbar)
            .into_iter()
            .find(|(_, rect)| point_in_rect(col, row, *rect))
        {
            return Some(action.into());
        }

        if let Some((idx, _)) = layout::visible_tabs(
            chrome.tabs,
            model.notebook.len(),
            model.notebook.selected_index(),
        )
        .into_iter()
        .find(|(_, rect)| point_in_rect(col, row, *rect))
        {
            return Some(Message::SelectTab(idx));
        }

        crate::ui::editor_position_at(model, col, row)
            .map(|(line, col)| Message::MoveTo(line, col))
    }
}

const fn point_in_rect(col: u16, row: u16, rect: ratatui::layout::Rect) -> bool {
    col >= rect.x
        && col < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}
