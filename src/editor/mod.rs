//! Text editing for a single note.
//!
//! Provides a rope-backed text buffer with cursor management. Mutating
//! operations report whether the text changed.

mod buffer;

pub use buffer::{Cursor, Direction, EditorBuffer};
