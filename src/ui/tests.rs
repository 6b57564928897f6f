use super::*;
use crate::app::{Message, Model, update};
use crate::notebook::{Autosave, Notebook};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use tempfile::tempdir;

fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(80, 24);
    Terminal::new(backend).unwrap()
}

fn create_test_model(text: &str) -> Model {
    let mut notebook = Notebook::default();
    notebook.selected_tab_mut().buffer.set_text(text);
    Model::new(notebook, (80, 24))
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

fn screen_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}

fn draw(model: &Model) -> Buffer {
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(model, frame)).unwrap();
    terminal.backend().buffer().clone()
}

#[test]
fn test_render_shows_header_toolbar_and_first_tab() {
    let model = create_test_model("");
    let buffer = draw(&model);

    assert!(row_text(&buffer, 0).contains("My Notes"));
    assert!(row_text(&buffer, 0).starts_with(" File "));
    let toolbar = row_text(&buffer, 1);
    assert!(toolbar.contains("+ New Tab"));
    assert!(toolbar.contains("Close Tab"));
    assert!(toolbar.contains("Delete"));
    assert!(row_text(&buffer, 2).contains("Note 1"));
}

#[test]
fn test_header_uses_header_background() {
    let model = create_test_model("");
    let buffer = draw(&model);

    assert_eq!(buffer[(40, 0)].bg, HEADER_BG);
}

#[test]
fn test_render_tab_labels_follow_position() {
    let model = create_test_model("hello");
    let model = update(model, Message::NewTab);
    let model = update(model, Message::NewTab);
    let model = update(model, Message::SelectTab(1));
    let model = update(model, Message::CloseTab);

    let tabs = row_text(&draw(&model), 2);

    assert!(tabs.contains("Note 1"));
    assert!(tabs.contains("Note 2"));
    assert!(!tabs.contains("Note 3"));
}

#[test]
fn test_render_editor_shows_text_with_line_numbers() {
    let model = create_test_model("first line\nsecond line");
    let buffer = draw(&model);
    let editor = chrome(Rect::new(0, 0, 80, 24)).editor;

    assert!(row_text(&buffer, editor.y).starts_with("1 first line"));
    assert!(row_text(&buffer, editor.y + 1).starts_with("2 second line"));
}

#[test]
fn test_render_expands_tabs_in_editor() {
    let model = create_test_model("a\tb");
    let buffer = draw(&model);
    let editor = chrome(Rect::new(0, 0, 80, 24)).editor;

    assert!(row_text(&buffer, editor.y).starts_with("1 a    b"));
}

#[test]
fn test_status_bar_shows_position_and_autosave_path() {
    let model = create_test_model("abc");
    let model = update(model, Message::MoveEnd);
    let status = row_text(&draw(&model), 23);

    assert!(status.contains("Note 1 of 1"));
    assert!(status.contains("Ln 1, Col 4"));
    assert!(status.contains("autosave_diary.txt"));
}

#[test]
fn test_status_bar_shows_selected_tab_of_many() {
    let dir = tempdir().unwrap();
    let autosave = Autosave::new(dir.path().join("slot.txt"));
    let model = Model::new(Notebook::new(autosave), (80, 24));
    let model = update(model, Message::NewTab);
    let model = update(model, Message::NewTab);
    let model = update(model, Message::PrevTab);

    let status = row_text(&draw(&model), 23);
    assert!(status.contains("Note 2 of 3"));
    assert!(status.contains("slot.txt"));
}

#[test]
fn test_render_notice_overlay() {
    let model = create_test_model("");
    let model = update(model, Message::CloseTab);
    let text = screen_text(&draw(&model));

    assert!(text.contains("Warning"));
    assert!(text.contains("At least one tab must remain"));
    assert!(text.contains("Press any key to close"));
}

#[test]
fn test_render_save_prompt_shows_filter_hint() {
    let model = create_test_model("");
    let model = update(model, Message::SaveNote);
    let model = update(model, Message::PromptInput("diary".to_string()));
    let text = screen_text(&draw(&model));

    assert!(text.contains("Save note as"));
    assert!(text.contains("Path: diary"));
    assert!(text.contains("Default extension .txt"));
}

#[test]
fn test_render_file_menu_items() {
    let model = create_test_model("");
    let model = update(model, Message::ToggleMenu);
    let text = screen_text(&draw(&model));

    assert!(text.contains("Open"));
    assert!(text.contains("Ctrl+S"));
    assert!(text.contains("Exit"));
}

#[test]
fn test_render_help_overlay() {
    let model = create_test_model("");
    let model = update(model, Message::ToggleHelp);
    let text = screen_text(&draw(&model));

    assert!(text.contains("Help"));
    assert!(text.contains("New tab"));
    assert!(text.contains("Every edit is autosaved"));
}

#[test]
fn test_help_overlay_shows_config_section_at_default_size() {
    let mut model = create_test_model("");
    model.config_global_path = Some(std::path::PathBuf::from("/cfg/diarynotes/config"));
    let model = update(model, Message::ToggleHelp);
    let buffer = draw(&model);
    let text = screen_text(&buffer);

    assert!(text.contains("Ctrl-o"));
    assert!(text.contains("Global: /cfg/diarynotes/config"));
    assert!(text.contains("Local override: <none>"));
    assert!(row_text(&buffer, 0).contains("Help"));
}

#[test]
fn test_render_survives_tiny_terminal() {
    let model = create_test_model("some text");
    let model = update(model, Message::Resize(10, 3));
    let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();

    terminal.draw(|frame| render(&model, frame)).unwrap();
}

#[test]
fn test_chrome_rows() {
    let chrome = chrome(Rect::new(0, 0, 80, 24));

    assert_eq!(chrome.menu_bar.y, 0);
    assert_eq!(chrome.toolbar.y, 1);
    assert_eq!(chrome.tabs.y, 2);
    assert_eq!(chrome.editor, Rect::new(0, 3, 80, 20));
    assert_eq!(chrome.status.y, 23);
}

#[test]
fn test_toolbar_buttons_are_ordered_and_spaced() {
    let buttons = layout::toolbar_buttons(Rect::new(0, 1, 80, 1));

    assert_eq!(buttons.len(), 3);
    assert_eq!(buttons[0].1, Rect::new(1, 1, 11, 1));
    assert_eq!(buttons[1].1.x, 13);
    assert_eq!(buttons[2].1.x, 25);
}

#[test]
fn test_toolbar_buttons_drop_when_too_narrow() {
    let buttons = layout::toolbar_buttons(Rect::new(0, 1, 14, 1));

    assert_eq!(buttons.len(), 1);
}

#[test]
fn test_visible_tabs_keep_selected_in_view() {
    let area = Rect::new(0, 2, 30, 1);
    let tabs = layout::visible_tabs(area, 12, 11);

    assert!(tabs.iter().any(|(idx, _)| *idx == 11));
    assert!(tabs.iter().all(|(_, rect)| rect.right() <= area.right()));
}

#[test]
fn test_visible_tabs_start_at_first_when_room() {
    let tabs = layout::visible_tabs(Rect::new(0, 2, 80, 1), 3, 0);

    let indices: Vec<usize> = tabs.iter().map(|(idx, _)| *idx).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert_eq!(tabs[0].1, Rect::new(0, 2, 8, 1));
    assert_eq!(tabs[1].1.x, 9);
}

#[test]
fn test_line_number_width() {
    assert_eq!(layout::line_number_width(1), 1);
    assert_eq!(layout::line_number_width(9), 1);
    assert_eq!(layout::line_number_width(10), 2);
    assert_eq!(layout::line_number_width(999), 3);
    assert_eq!(layout::line_number_width(1_000), 4);
}

#[test]
fn test_char_col_for_display_handles_tabs_and_wide_chars() {
    assert_eq!(layout::char_col_for_display("abc", 1), 1);
    assert_eq!(layout::char_col_for_display("abc", 10), 3);
    assert_eq!(layout::char_col_for_display("\tx", 2), 0);
    assert_eq!(layout::char_col_for_display("\tx", 4), 1);
    assert_eq!(layout::char_col_for_display("日本", 3), 1);
}

#[test]
fn test_visible_slice_scrolls_horizontally() {
    assert_eq!(layout::visible_slice("abcdef", 2, 3), "cde");
    assert_eq!(layout::visible_slice("a\tb", 0, 10), "a    b");
    assert_eq!(layout::visible_slice("abc", 5, 3), "");
}

#[test]
fn test_editor_view_scrolls_long_line_to_cursor() {
    let long = "x".repeat(200);
    let model = create_test_model(&long);
    let model = update(model, Message::MoveEnd);
    let editor = chrome(model.area()).editor;
    let view = editor_view(&model, editor);

    assert_eq!(view.gutter, 2);
    assert_eq!(view.h_offset, 200 + 1 - 78);
}

#[test]
fn test_editor_position_at_maps_clicks() {
    let model = create_test_model("hello\nworld");
    let editor = chrome(model.area()).editor;

    assert_eq!(editor_position_at(&model, 2, editor.y + 1), Some((1, 0)));
    assert_eq!(editor_position_at(&model, 60, editor.y), Some((0, 5)));
    assert_eq!(editor_position_at(&model, 60, editor.y + 10), Some((1, 5)));
    assert_eq!(editor_position_at(&model, 0, 0), None);
}

#[test]
fn test_file_menu_item_at_skips_separator_and_border() {
    let area = Rect::new(0, 0, 80, 24);
    let menu = layout::file_menu_rect(area, chrome(area).menu_bar);

    assert_eq!(layout::file_menu_item_at(menu, 0, 2), None);
    assert_eq!(layout::file_menu_item_at(menu, 3, menu.y + 3), None);
    assert_eq!(
        layout::file_menu_item_at(menu, 3, menu.y + 4),
        Some(crate::app::MenuItem::Exit)
    );
}
