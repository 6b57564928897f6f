//! Explicit, user-directed file I/O.
//!
//! Files are read and written whole, as UTF-8. The extension of a chosen
//! path is cosmetic.

use std::fs;
use std::path::{Path, PathBuf};

use super::NoteError;

/// Extension appended to a save path that has none.
pub const DEFAULT_EXTENSION: &str = "txt";

/// A named file pattern offered as a hint in the save prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    pub pattern: &'static str,
}

/// Advisory only: nothing restricts what path a note is written to.
pub const SAVE_FILTERS: &[FileFilter] = &[
    FileFilter {
        name: "Text File",
        pattern: "*.txt",
    },
    FileFilter {
        name: "Python File",
        pattern: "*.py",
    },
    FileFilter {
        name: "Markdown",
        pattern: "*.md",
    },
    FileFilter {
        name: "JSON",
        pattern: "*.json",
    },
    FileFilter {
        name: "CSV",
        pattern: "*.csv",
    },
    FileFilter {
        name: "All Files",
        pattern: "*.*",
    },
];

/// One-line summary of [`SAVE_FILTERS`], e.g. `"*.txt *.py ..."`.
pub fn filter_hint() -> String {
    SAVE_FILTERS
        .iter()
        .map(|f| f.pattern)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Append [`DEFAULT_EXTENSION`] when `path` has no extension.
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}

/// Read the whole file as UTF-8 text.
///
/// # Errors
///
/// [`NoteError::NotText`] if the bytes are not valid UTF-8, otherwise
/// [`NoteError::Io`] for any read failure.
pub fn read_text(path: &Path) -> Result<String, NoteError> {
    let bytes = fs::read(path).map_err(|source| NoteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| NoteError::NotText {
        path: path.to_path_buf(),
    })
}

/// Overwrite `path` with `text`.
///
/// # Errors
///
/// [`NoteError::Io`] if the file cannot be created or written.
pub fn write_text(path: &Path, text: &str) -> Result<(), NoteError> {
    fs::write(path, text).map_err(|source| NoteError::Io {
        path: path.to_path_buf(),
        source,
    })
}
