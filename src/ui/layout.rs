//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::UnicodeWidthChar;

use crate::app::{FILE_MENU, MenuItem, Model, TOOLBAR, ToolbarAction};
use crate::notebook::tab_label;

/// Columns a tab character occupies in the editor.
pub const TAB_WIDTH: usize = 4;

pub const FILE_MENU_TITLE: &str = " File ";
const FILE_MENU_WIDTH: u16 = 22;

/// The fixed regions of the window, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub menu_bar: Rect,
    pub toolbar: Rect,
    pub tabs: Rect,
    pub editor: Rect,
    pub status: Rect,
}

pub fn chrome(area: Rect) -> Chrome {
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);
    Chrome {
        menu_bar: rows[0],
        toolbar: rows[1],
        tabs: rows[2],
        editor: rows[3],
        status: rows[4],
    }
}

/// Rows of the File dropdown; `None` is the separator.
pub const fn file_menu_rows() -> [Option<MenuItem>; 4] {
    [Some(FILE_MENU[0]), Some(FILE_MENU[1]), None, Some(FILE_MENU[2])]
}

pub fn file_menu_title_rect(menu_bar: Rect) -> Rect {
    #[allow(clippy::cast_possible_truncation)]
    let width = (FILE_MENU_TITLE.len() as u16).min(menu_bar.width);
    Rect::new(menu_bar.x, menu_bar.y, width, menu_bar.height.min(1))
}

/// Dropdown below the `File` title, clipped to `area`.
pub fn file_menu_rect(area: Rect, menu_bar: Rect) -> Rect {
    #[allow(clippy::cast_possible_truncation)]
    let height = file_menu_rows().len() as u16 + 2;
    let y = menu_bar.y + 1;
    Rect::new(
        menu_bar.x,
        y,
        FILE_MENU_WIDTH.min(area.width),
        height.min(area.bottom().saturating_sub(y)),
    )
}

pub fn file_menu_item_at(menu: Rect, col: u16, row: u16) -> Option<MenuItem> {
    if col <= menu.x || col + 1 >= menu.right() || row <= menu.y || row + 1 >= menu.bottom() {
        return None;
    }
    let idx = usize::from(row - menu.y - 1);
    file_menu_rows().get(idx).copied().flatten()
}

/// Clickable rects of the toolbar buttons that fit on screen.
pub fn toolbar_buttons(toolbar: Rect) -> Vec<(ToolbarAction, Rect)> {
    let mut buttons = Vec::new();
    let mut x = toolbar.x + 1;
    for action in TOOLBAR {
        let width = text_width(action.label()) + 2;
        if x + width > toolbar.right() {
            break;
        }
        buttons.push((action, Rect::new(x, toolbar.y, width, 1)));
        x += width + 1;
    }
    buttons
}

/// Tabs that fit in the strip, scrolled so `selected` is always shown.
pub fn visible_tabs(area: Rect, count: usize, selected: usize) -> Vec<(usize, Rect)> {
    let widths: Vec<u16> = (0..count)
        .map(|i| text_width(&tab_label(i)) + 2)
        .collect();
    let span = |from: usize, to: usize| -> u16 {
        widths[from..=to].iter().sum::<u16>() + u16::try_from(to - from).unwrap_or(u16::MAX)
    };

    let selected = selected.min(count.saturating_sub(1));
    let mut start = 0;
    while start < selected && span(start, selected) > area.width {
        start += 1;
    }

    let mut tabs = Vec::new();
    let mut x = area.x;
    for (idx, width) in widths.iter().enumerate().skip(start) {
        if x + width > area.right() {
            break;
        }
        tabs.push((idx, Rect::new(x, area.y, *width, 1)));
        x += width + 1;
    }
    tabs
}

/// Where the selected tab's text lands inside the editor region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorView {
    /// Width of the line-number gutter, including its trailing space.
    pub gutter: u16,
    /// Region the note text is drawn in.
    pub text: Rect,
    /// Display columns hidden on the left so the cursor stays visible.
    pub h_offset: usize,
}

pub fn editor_view(model: &Model, editor: Rect) -> EditorView {
    let buffer = &model.selected_tab().buffer;
    let gutter = (line_number_width(buffer.line_count()) + 1).min(editor.width);
    let text = Rect {
        x: editor.x + gutter,
        width: editor.width - gutter,
        ..editor
    };
    let cursor = buffer.cursor();
    let line = buffer.line_at(cursor.line).unwrap_or_default();
    let cursor_col = display_width(&line.chars().take(cursor.col).collect::<String>());
    let visible = usize::from(text.width);
    let h_offset = if visible == 0 || cursor_col < visible {
        0
    } else {
        cursor_col + 1 - visible
    };
    EditorView {
        gutter,
        text,
        h_offset,
    }
}

/// Buffer position `(line, col)` under a screen cell in the editor.
pub fn editor_position_at(model: &Model, col: u16, row: u16) -> Option<(usize, usize)> {
    let editor = chrome(model.area()).editor;
    if row < editor.y || row >= editor.bottom() || col < editor.x || col >= editor.right() {
        return None;
    }
    let view = editor_view(model, editor);
    let tab = model.selected_tab();
    let last_line = tab.buffer.line_count().saturating_sub(1);
    let line = (tab.scroll_offset + usize::from(row - editor.y)).min(last_line);
    let display_col = view.h_offset + usize::from(col.saturating_sub(view.text.x));
    let text = tab.buffer.line_at(line).unwrap_or_default();
    Some((line, char_col_for_display(&text, display_col)))
}

/// Calculate the width needed for line numbers.
pub const fn line_number_width(total_lines: usize) -> u16 {
    if total_lines < 10 {
        1
    } else if total_lines < 100 {
        2
    } else if total_lines < 1_000 {
        3
    } else if total_lines < 10_000 {
        4
    } else if total_lines < 100_000 {
        5
    } else {
        6
    }
}

fn char_width(ch: char) -> usize {
    if ch == '\t' {
        TAB_WIDTH
    } else {
        ch.width().unwrap_or(0)
    }
}

/// Terminal columns `text` occupies in the editor.
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

fn text_width(text: &str) -> u16 {
    u16::try_from(display_width(text)).unwrap_or(u16::MAX)
}

/// Char index in `line` whose cell covers `display_col`, or the line end.
pub fn char_col_for_display(line: &str, display_col: usize) -> usize {
    let mut col = 0;
    for (idx, ch) in line.chars().enumerate() {
        let width = char_width(ch);
        if display_col < col + width.max(1) {
            return idx;
        }
        col += width;
    }
    line.chars().count()
}

/// The part of `line` visible between display columns
/// `h_offset..h_offset + width`, with tabs expanded to spaces.
pub fn visible_slice(line: &str, h_offset: usize, width: usize) -> String {
    let mut out = String::new();
    let mut col = 0;
    for ch in line.chars() {
        let w = char_width(ch);
        if col >= h_offset && col + w <= h_offset + width {
            if ch == '\t' {
                out.extend(std::iter::repeat_n(' ', TAB_WIDTH));
            } else {
                out.push(ch);
            }
        }
        col += w;
        if col >= h_offset + width {
            break;
        }
    }
    out
}
