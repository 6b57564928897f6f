use std::fs;

use diarynotes::notebook::files::{read_text, with_default_extension, write_text};
use diarynotes::notebook::{Autosave, NoteError, Notebook, NotebookError};

#[test]
fn test_typing_then_closing_second_tab_keeps_first_note() {
    let dir = tempfile::tempdir().unwrap();
    let slot = dir.path().join("autosave_diary.txt");
    let mut notebook = Notebook::new(Autosave::new(&slot));
    assert_eq!(notebook.labels(), vec!["Note 1"]);

    notebook.selected_tab_mut().buffer.insert_str("hello");
    notebook.autosave_selected().unwrap();
    notebook.create_tab();
    assert_eq!(notebook.labels(), vec!["Note 1", "Note 2"]);
    assert!(notebook.selected_tab().buffer.is_empty());

    notebook.close_selected().unwrap();

    assert_eq!(notebook.labels(), vec!["Note 1"]);
    assert_eq!(notebook.selected_text(), "hello");
    assert_eq!(fs::read_to_string(&slot).unwrap(), "hello");
}

#[test]
fn test_autosave_restores_into_next_session() {
    let dir = tempfile::tempdir().unwrap();
    let slot = dir.path().join("autosave_diary.txt");

    let mut first = Notebook::new(Autosave::new(&slot));
    first.selected_tab_mut().buffer.insert_str("line one\nline two");
    first.autosave_selected().unwrap();
    drop(first);

    let mut second = Notebook::new(Autosave::new(&slot));
    assert_eq!(second.selected_text(), "line one\nline two");

    second.create_tab();
    assert!(second.selected_tab().buffer.is_empty());
}

#[test]
fn test_last_tab_cannot_be_closed() {
    let dir = tempfile::tempdir().unwrap();
    let mut notebook = Notebook::new(Autosave::new(dir.path().join("slot.txt")));

    assert_eq!(notebook.close_selected(), Err(NotebookError::LastTab));
    assert_eq!(notebook.len(), 1);
}

#[test]
fn test_manual_save_and_open_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let target = with_default_extension(&dir.path().join("entry"));
    assert_eq!(target, dir.path().join("entry.txt"));

    write_text(&target, "café ☕\n").unwrap();

    assert_eq!(read_text(&target).unwrap(), "café ☕\n");
}

#[test]
fn test_open_rejects_non_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blob.bin");
    fs::write(&path, [0xc3, 0x28, 0xa0, 0xa1]).unwrap();

    assert!(matches!(read_text(&path), Err(NoteError::NotText { .. })));
}
