use std::path::{Path, PathBuf};

use super::{NoteError, files};

/// Default location of the autosave slot, relative to the working directory.
pub const DEFAULT_AUTOSAVE_FILE: &str = "autosave_diary.txt";

/// The single autosave slot shared by every tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autosave {
    path: PathBuf,
}

impl Autosave {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the slot with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::Io`] if the file cannot be written.
    pub fn save(&self, text: &str) -> Result<(), NoteError> {
        files::write_text(&self.path, text)?;
        tracing::debug!(path = %self.path.display(), bytes = text.len(), "autosaved");
        Ok(())
    }

    /// Contents of the slot, if it exists and holds valid UTF-8.
    ///
    /// Anything else yields `None`; the failure is only logged.
    pub fn load(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }
        match files::read_text(&self.path) {
            Ok(text) => {
                tracing::debug!(path = %self.path.display(), bytes = text.len(), "loaded autosave");
                Some(text)
            }
            Err(err) => {
                tracing::warn!("skipping autosave load: {err}");
                None
            }
        }
    }
}

impl Default for Autosave {
    fn default() -> Self {
        Self::new(DEFAULT_AUTOSAVE_FILE)
    }
}
