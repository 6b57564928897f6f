use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::app::Model;
use crate::notebook::tab_label;

use super::layout::{self, Chrome};
use super::{HEADER_BG, HEADER_TITLE, overlays, status};

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let chrome = layout::chrome(area);

    render_menu_bar(model, frame, chrome.menu_bar);
    render_toolbar(frame, chrome.toolbar);
    render_tab_strip(model, frame, chrome.tabs);
    render_editor(model, frame, chrome);
    status::render_status_bar(model, frame, chrome.status);

    if model.menu_open {
        overlays::render_file_menu(model, frame, area, chrome.menu_bar);
    }
    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    } else if let Some(prompt) = &model.prompt {
        overlays::render_prompt(prompt, frame, area);
    }
    if let Some(notice) = &model.notice {
        overlays::render_notice(notice, frame, area);
    }
}

fn render_menu_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let bar_style = Style::default().bg(HEADER_BG).fg(Color::White);
    frame.render_widget(
        Paragraph::new(Line::styled(HEADER_TITLE, bar_style.add_modifier(Modifier::BOLD)))
            .centered()
            .style(bar_style),
        area,
    );

    let title_style = if model.menu_open {
        Style::default().bg(Color::White).fg(HEADER_BG)
    } else {
        bar_style
    };
    frame.render_widget(
        Paragraph::new(layout::FILE_MENU_TITLE).style(title_style),
        layout::file_menu_title_rect(area),
    );
}

fn render_toolbar(frame: &mut Frame, area: Rect) {
    let button_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    for (action, rect) in layout::toolbar_buttons(area) {
        frame.render_widget(
            Paragraph::new(format!(" {} ", action.label())).style(button_style),
            rect,
        );
    }
}

fn render_tab_strip(model: &Model, frame: &mut Frame, area: Rect) {
    let selected = model.notebook.selected_index();
    let divider = Style::default().fg(Color::DarkGray);
    for (idx, rect) in layout::visible_tabs(area, model.notebook.len(), selected) {
        let style = if idx == selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(
            Paragraph::new(format!(" {} ", tab_label(idx))).style(style),
            rect,
        );
        if rect.right() < area.right() {
            frame.render_widget(
                Paragraph::new("\u{2502}").style(divider),
                Rect::new(rect.right(), rect.y, 1, 1),
            );
        }
    }
}

fn render_editor(model: &Model, frame: &mut Frame, chrome: Chrome) {
    let area = chrome.editor;
    let tab = model.selected_tab();
    let buf = &tab.buffer;
    let view = layout::editor_view(model, area);

    let total_lines = buf.line_count();
    let number_width = usize::from(view.gutter.saturating_sub(1));
    let start = tab.scroll_offset.min(total_lines.saturating_sub(1));
    let end = (start + usize::from(area.height)).min(total_lines);

    let mut content: Vec<Line> = Vec::new();
    for line_idx in start..end {
        let text = buf.line_at(line_idx).unwrap_or_default();
        let number = format!("{:>number_width$} ", line_idx + 1);
        content.push(Line::from(vec![
            Span::styled(number, Style::default().fg(Color::DarkGray)),
            Span::raw(layout::visible_slice(
                &text,
                view.h_offset,
                usize::from(view.text.width),
            )),
        ]));
    }

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content), area);

    if model.overlay_active() || model.menu_open {
        return;
    }
    let cursor = buf.cursor();
    if cursor.line < start || cursor.line >= end {
        return;
    }
    let line = buf.line_at(cursor.line).unwrap_or_default();
    let before: String = line.chars().take(cursor.col).collect();
    let col = layout::display_width(&before).saturating_sub(view.h_offset);
    let x = view.text.x.saturating_add(u16::try_from(col).unwrap_or(u16::MAX));
    let y = area.y.saturating_add(u16::try_from(cursor.line - start).unwrap_or(u16::MAX));
    if x < area.right() && y < area.bottom() {
        frame.set_cursor_position((x, y));
    }
}
