//! The notebook: an ordered set of note tabs plus the files they persist to.
//!
//! - [`Notebook`]: tab sequence, selection, derived labels
//! - [`Autosave`]: the single fixed-path autosave slot
//! - [`files`]: explicit open/save of user-chosen paths

mod autosave;
pub mod files;
mod tabs;

use std::path::PathBuf;

pub use autosave::{Autosave, DEFAULT_AUTOSAVE_FILE};
pub use tabs::{Notebook, Tab, tab_label};

/// Failure reading or writing a note file.
#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    /// The file exists but its bytes are not valid UTF-8.
    #[error("{} is not a text file and cannot be opened", path.display())]
    NotText { path: PathBuf },
    /// Any other I/O failure (missing file, permissions, disk full).
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A tab operation the notebook refuses to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NotebookError {
    #[error("At least one tab must remain")]
    LastTab,
}
