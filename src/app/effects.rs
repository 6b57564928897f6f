use std::path::Path;

use crate::app::{App, Message, Model, Severity};
use crate::notebook::{NoteError, files};

impl App {
    /// Run the file I/O a message implies, after `update` has applied it.
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        if msg.edits_text() {
            Self::autosave(model);
        }
        match msg {
            Message::OpenFile(path) => Self::open_into_selected(model, path),
            Message::SaveFile(path) => Self::save_selected(model, path),
            _ => {}
        }
    }

    fn autosave(model: &mut Model) {
        match model.notebook.autosave_selected() {
            Ok(()) => {
                if model.autosave_failing {
                    model.autosave_failing = false;
                    model.show_toast(Severity::Info, "Autosave working again");
                }
            }
            Err(err) => {
                if !model.autosave_failing {
                    tracing::error!("autosave failed: {err}");
                    model.autosave_failing = true;
                }
                model.show_toast(Severity::Warning, format!("Autosave failed: {err}"));
            }
        }
    }

    fn open_into_selected(model: &mut Model, path: &Path) {
        let tab = model.notebook.selected_tab_mut();
        tab.buffer.clear();
        tab.scroll_offset = 0;

        match files::read_text(path) {
            Ok(text) => {
                tracing::debug!(path = %path.display(), bytes = text.len(), "opened note");
                tab.buffer.set_text(&text);
                model.show_toast(Severity::Info, format!("Opened {}", path.display()));
            }
            Err(NoteError::NotText { .. }) => {
                model.show_notice(
                    Severity::Warning,
                    "This file is not a text file and cannot be opened",
                );
            }
            Err(err) => {
                tracing::warn!("open failed: {err}");
                model.show_notice(Severity::Error, err.to_string());
            }
        }
    }

    fn save_selected(model: &mut Model, path: &Path) {
        let path = files::with_default_extension(path);
        match files::write_text(&path, &model.notebook.selected_text()) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "saved note");
                model.show_notice(Severity::Info, "Notes saved successfully");
            }
            Err(err) => {
                tracing::warn!("save failed: {err}");
                model.show_notice(Severity::Error, err.to_string());
            }
        }
    }
}
