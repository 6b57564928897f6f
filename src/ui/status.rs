use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, Severity};

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    if let Some((message, severity)) = model.active_toast() {
        render_toast_bar(message, severity, frame, area);
        return;
    }

    let notebook = &model.notebook;
    let cursor = notebook.selected_tab().buffer.cursor();
    let left = format!(
        " {} of {}  Ln {}, Col {}",
        crate::notebook::tab_label(notebook.selected_index()),
        notebook.len(),
        cursor.line + 1,
        cursor.col + 1
    );
    let right = format!(
        "autosave: {}  F1:help ",
        notebook.autosave().path().display()
    );
    let gap = usize::from(area.width)
        .saturating_sub(left.chars().count() + right.chars().count())
        .max(2);
    let status = format!("{left}{}{right}", " ".repeat(gap));

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(status_bar, area);
}

fn render_toast_bar(message: &str, severity: Severity, frame: &mut Frame, area: Rect) {
    let (prefix, style) = match severity {
        Severity::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        Severity::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        Severity::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!(" {prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
