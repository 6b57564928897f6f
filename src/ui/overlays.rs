use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::app::{Model, Notice, Prompt, PromptKind, Severity};
use crate::notebook::files;

use super::layout;

pub fn render_file_menu(model: &Model, frame: &mut Frame, area: Rect, menu_bar: Rect) {
    let popup = layout::file_menu_rect(area, menu_bar);
    let inner_width = usize::from(popup.width.saturating_sub(2));

    let mut lines: Vec<Line> = Vec::new();
    let mut item_idx = 0;
    for row in layout::file_menu_rows() {
        let Some(item) = row else {
            lines.push(Line::styled(
                "\u{2500}".repeat(inner_width),
                Style::default().fg(Color::DarkGray),
            ));
            continue;
        };
        let label = item.label();
        let shortcut = item.shortcut();
        let gap = inner_width.saturating_sub(label.len() + shortcut.len() + 2);
        let text = format!(" {label}{}{shortcut} ", " ".repeat(gap));
        let style = if item_idx == model.menu_selected {
            Style::default().bg(Color::White).fg(Color::Black)
        } else {
            Style::default()
        };
        lines.push(Line::styled(text, style));
        item_idx += 1;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn prompt_rect(area: Rect) -> Rect {
    let popup_width = area.width.saturating_sub(16).max(44);
    centered_popup_rect(popup_width, 9, area)
}

pub fn render_prompt(prompt: &Prompt, frame: &mut Frame, area: Rect) {
    let popup = prompt_rect(area);
    let dim_style = Style::default().fg(Color::Indexed(245));

    let hint = match prompt.kind {
        PromptKind::Save => format!(
            "Default extension .{}  Types: {}",
            files::DEFAULT_EXTENSION,
            files::filter_hint()
        ),
        PromptKind::Open => "Any file type".to_string(),
    };
    let lines = vec![
        Line::from(vec![
            Span::styled("Path: ", Style::default().fg(Color::Yellow)),
            Span::raw(prompt.input.clone()),
        ]),
        Line::raw(""),
        Line::styled(hint, dim_style),
        Line::styled("Enter confirm \u{00b7} Esc cancel", dim_style),
    ];

    let block = Block::default()
        .title(prompt.kind.title())
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    let inner = block.inner(popup);
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);

    // "Path: " is 6 columns wide.
    let input_width = u16::try_from(layout::display_width(&prompt.input)).unwrap_or(u16::MAX);
    let x = inner.x.saturating_add(6).saturating_add(input_width);
    if x < inner.right() {
        frame.set_cursor_position((x, inner.y));
    }
}

pub fn render_notice(notice: &Notice, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(20).clamp(36, 60);
    let popup = centered_popup_rect(popup_width, 8, area);
    let accent = match notice.severity {
        Severity::Info => Color::Cyan,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
    };

    let lines = vec![
        Line::raw(notice.message.clone()),
        Line::raw(""),
        Line::styled(
            "Press any key to close",
            Style::default().fg(Color::Indexed(245)),
        ),
    ];
    let block = Block::default()
        .title(notice.severity.title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        popup,
    );
}

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::styled("File", section_style),
        Line::raw("  Ctrl-o              Open into current tab"),
        Line::raw("  Ctrl-s              Save current tab as..."),
        Line::raw("  F10 / Alt-f         File menu"),
        Line::raw("  Ctrl-q / Ctrl-c     Exit"),
        Line::raw(""),
        Line::styled("Tabs", section_style),
        Line::raw("  Ctrl-t              New tab"),
        Line::raw("  Ctrl-w              Close tab"),
        Line::raw("  Ctrl-PgDn / Alt-\u{2192}    Next tab"),
        Line::raw("  Ctrl-PgUp / Alt-\u{2190}    Previous tab"),
        Line::raw("  Ctrl-d              Delete note text"),
        Line::raw(""),
        Line::styled("Editing", section_style),
        Line::raw("  Arrows, Home/End    Navigate"),
        Line::raw("  Ctrl+Home/End       Note start / end"),
        Line::raw("  PageUp/PageDown     Page"),
        Line::raw("  Every edit is autosaved"),
        Line::raw(""),
        Line::styled("Config", section_style),
        Line::raw(format!("  Global: {global_cfg}")),
        Line::raw(format!("  Local override: {local_cfg}")),
    ];

    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
