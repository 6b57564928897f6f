use crate::editor::EditorBuffer;

use super::{Autosave, NoteError, NotebookError};

/// Display label for the tab at `index` (zero-based).
///
/// Labels are never stored; they always follow the tab's position.
pub fn tab_label(index: usize) -> String {
    format!("Note {}", index + 1)
}

/// One note: its text and where the editor view is scrolled to.
#[derive(Debug, Default)]
pub struct Tab {
    pub buffer: EditorBuffer,
    /// Line index of the first visible editor row.
    pub scroll_offset: usize,
}

impl Tab {
    fn with_text(text: &str) -> Self {
        Self {
            buffer: EditorBuffer::from_text(text),
            scroll_offset: 0,
        }
    }
}

/// Ordered tabs with exactly one selected.
///
/// There is always at least one tab: construction creates the first one
/// and [`Notebook::close_selected`] refuses to remove the last.
#[derive(Debug)]
pub struct Notebook {
    tabs: Vec<Tab>,
    selected: usize,
    autosave: Autosave,
    /// Set once the first tab has been offered the autosave contents.
    startup_loaded: bool,
}

impl Notebook {
    /// Create a notebook with its first tab, restored from `autosave` if the
    /// slot holds text.
    pub fn new(autosave: Autosave) -> Self {
        let mut notebook = Self {
            tabs: Vec::new(),
            selected: 0,
            autosave,
            startup_loaded: false,
        };
        notebook.create_tab();
        notebook
    }

    /// Append a tab and select it. Returns its index.
    ///
    /// Only the first tab ever created is restored from the autosave slot.
    pub fn create_tab(&mut self) -> usize {
        let tab = if self.startup_loaded {
            Tab::default()
        } else {
            self.startup_loaded = true;
            self.autosave
                .load()
                .map_or_else(Tab::default, |text| Tab::with_text(&text))
        };
        self.tabs.push(tab);
        self.selected = self.tabs.len() - 1;
        self.selected
    }

    /// Remove the selected tab and return the index of the newly selected one.
    ///
    /// The tab that slides into the closed position becomes selected; closing
    /// the last position selects the new last tab.
    ///
    /// # Errors
    ///
    /// [`NotebookError::LastTab`] if only one tab remains. Nothing changes.
    pub fn close_selected(&mut self) -> Result<usize, NotebookError> {
        if self.tabs.len() <= 1 {
            return Err(NotebookError::LastTab);
        }
        self.tabs.remove(self.selected);
        self.selected = self.selected.min(self.tabs.len() - 1);
        Ok(self.selected)
    }

    /// Select the tab at `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.tabs.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Select the next tab, wrapping to the first.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.tabs.len();
    }

    /// Select the previous tab, wrapping to the last.
    pub fn select_prev(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.tabs.len() - 1);
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Whether there are no tabs. Never true once constructed.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn selected_tab(&self) -> &Tab {
        &self.tabs[self.selected]
    }

    pub fn selected_tab_mut(&mut self) -> &mut Tab {
        &mut self.tabs[self.selected]
    }

    /// Full text of the selected tab.
    pub fn selected_text(&self) -> String {
        self.selected_tab().buffer.text()
    }

    pub fn label(&self, index: usize) -> Option<String> {
        (index < self.tabs.len()).then(|| tab_label(index))
    }

    pub fn labels(&self) -> Vec<String> {
        (0..self.tabs.len()).map(tab_label).collect()
    }

    pub const fn autosave(&self) -> &Autosave {
        &self.autosave
    }

    /// Write the selected tab's text to the autosave slot.
    ///
    /// # Errors
    ///
    /// Propagates the write failure from [`Autosave::save`].
    pub fn autosave_selected(&self) -> Result<(), NoteError> {
        self.autosave.save(&self.selected_text())
    }
}

/// A single empty tab that never reads the autosave slot.
impl Default for Notebook {
    fn default() -> Self {
        Self {
            tabs: vec![Tab::default()],
            selected: 0,
            autosave: Autosave::default(),
            startup_loaded: true,
        }
    }
}
