use ropey::Rope;

/// Cursor position in a note buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column, counted in chars within the line.
    pub col: usize,
    /// Remembered column for vertical movement (sticky column).
    col_memory: usize,
}

impl Cursor {
    /// Create a cursor at line 0, column 0.
    pub const fn new() -> Self {
        Self::at(0, 0)
    }

    /// Create a cursor at a specific position.
    pub const fn at(line: usize, col: usize) -> Self {
        Self {
            line,
            col,
            col_memory: col,
        }
    }

    const fn set_col(&mut self, col: usize) {
        self.col = col;
        self.col_memory = col;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The editable text of one note, backed by a rope.
///
/// Mutating methods return `true` when the text actually changed.
pub struct EditorBuffer {
    rope: Rope,
    cursor: Cursor,
}

impl EditorBuffer {
    /// Create a buffer holding `text`, cursor at the origin.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(&normalize_newlines(text)),
            cursor: Cursor::new(),
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self {
            rope: Rope::new(),
            cursor: Cursor::new(),
        }
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Whether the buffer holds no text at all.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Total number of lines. An empty buffer has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Content of a line without its trailing newline.
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let mut text = self.rope.line(line_idx).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        Some(text)
    }

    /// Length of a line in chars, excluding the newline.
    pub fn line_len(&self, line_idx: usize) -> usize {
        if line_idx >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(line_idx);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Replace the whole content, leaving the cursor at the start.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(&normalize_newlines(text));
        self.cursor = Cursor::new();
    }

    /// Remove all content. Returns `true` if there was anything to remove.
    pub fn clear(&mut self) -> bool {
        let changed = !self.is_empty();
        self.rope = Rope::new();
        self.cursor = Cursor::new();
        changed
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if ch == '\n' {
            return self.split_line();
        }
        let idx = self.cursor_char_idx();
        self.rope.insert_char(idx, ch);
        self.cursor.set_col(self.cursor.col + 1);
        true
    }

    /// Insert a string at the cursor (pasted text), moving the cursor past it.
    pub fn insert_str(&mut self, s: &str) -> bool {
        let s = normalize_newlines(s);
        if s.is_empty() {
            return false;
        }
        let idx = self.cursor_char_idx();
        self.rope.insert(idx, &s);

        let newlines = s.matches('\n').count();
        if newlines == 0 {
            self.cursor.set_col(self.cursor.col + s.chars().count());
        } else {
            let tail = s.rsplit('\n').next().unwrap_or_default();
            self.cursor.line += newlines;
            self.cursor.set_col(tail.chars().count());
        }
        true
    }

    /// Split the current line at the cursor (Enter).
    pub fn split_line(&mut self) -> bool {
        let idx = self.cursor_char_idx();
        self.rope.insert_char(idx, '\n');
        self.cursor.line += 1;
        self.cursor.set_col(0);
        true
    }

    /// Delete the character before the cursor (Backspace).
    pub fn delete_back(&mut self) -> bool {
        let idx = self.cursor_char_idx();
        if idx == 0 {
            return false;
        }
        if self.cursor.col == 0 {
            let prev_len = self.line_len(self.cursor.line - 1);
            self.rope.remove(idx - 1..idx);
            self.cursor.line -= 1;
            self.cursor.set_col(prev_len);
        } else {
            self.rope.remove(idx - 1..idx);
            self.cursor.set_col(self.cursor.col - 1);
        }
        true
    }

    /// Delete the character under the cursor (Delete).
    pub fn delete_forward(&mut self) -> bool {
        let idx = self.cursor_char_idx();
        if idx >= self.rope.len_chars() {
            return false;
        }
        self.rope.remove(idx..=idx);
        true
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_vertical(-1),
            Direction::Down => self.move_vertical(1),
        }
    }

    /// Move the cursor up or down by `rows` lines, keeping the sticky column.
    pub fn move_lines(&mut self, rows: usize, direction: Direction) {
        let delta = match direction {
            Direction::Up => -1,
            Direction::Down => 1,
            Direction::Left | Direction::Right => return,
        };
        for _ in 0..rows {
            self.move_vertical(delta);
        }
    }

    pub const fn move_home(&mut self) {
        self.cursor.set_col(0);
    }

    pub fn move_end(&mut self) {
        self.cursor.set_col(self.line_len(self.cursor.line));
    }

    pub const fn move_to_start(&mut self) {
        self.cursor = Cursor::new();
    }

    pub fn move_to_end(&mut self) {
        let last = self.line_count().saturating_sub(1);
        self.cursor = Cursor::at(last, self.line_len(last));
    }

    /// Move to `(line, col)`, clamped to the buffer.
    pub fn move_to(&mut self, line: usize, col: usize) {
        let line = line.min(self.line_count().saturating_sub(1));
        self.cursor = Cursor::at(line, col.min(self.line_len(line)));
    }

    fn cursor_char_idx(&self) -> usize {
        self.rope.line_to_char(self.cursor.line) + self.cursor.col.min(self.line_len(self.cursor.line))
    }

    fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.set_col(self.cursor.col - 1);
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.set_col(self.line_len(self.cursor.line));
        }
    }

    fn move_right(&mut self) {
        if self.cursor.col < self.line_len(self.cursor.line) {
            self.cursor.set_col(self.cursor.col + 1);
        } else if self.cursor.line + 1 < self.line_count() {
            self.cursor.line += 1;
            self.cursor.set_col(0);
        }
    }

    fn move_vertical(&mut self, delta: isize) {
        let target = match delta {
            -1 if self.cursor.line > 0 => self.cursor.line - 1,
            1 if self.cursor.line + 1 < self.line_count() => self.cursor.line + 1,
            _ => return,
        };
        self.cursor.line = target;
        self.cursor.col = self.cursor.col_memory.min(self.line_len(target));
    }
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!("Rope({} chars, {} lines)", self.rope.len_chars(), self.rope.len_lines()),
            )
            .field("cursor", &self.cursor)
            .finish()
    }
}

// Terminal paste and Windows files may carry CRLF; the buffer only stores LF.
fn normalize_newlines(text: &str) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buf = EditorBuffer::empty();
        assert!(buf.is_empty());
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_at(0), Some(String::new()));
    }

    #[test]
    fn test_from_text_keeps_content_verbatim() {
        let buf = EditorBuffer::from_text("dear diary\nsecond line\n");
        assert_eq!(buf.text(), "dear diary\nsecond line\n");
        assert_eq!(buf.line_count(), 3);
        assert_eq!(buf.line_at(1), Some("second line".to_string()));
        assert_eq!(buf.line_at(3), None);
    }

    #[test]
    fn test_crlf_is_normalized() {
        let buf = EditorBuffer::from_text("a\r\nb");
        assert_eq!(buf.text(), "a\nb");
    }

    #[test]
    fn test_typing_builds_text_and_reports_change() {
        let mut buf = EditorBuffer::empty();
        for ch in "hello".chars() {
            assert!(buf.insert_char(ch));
        }
        assert_eq!(buf.text(), "hello");
        assert_eq!(buf.cursor(), Cursor::at(0, 5));
    }

    #[test]
    fn test_insert_char_newline_splits() {
        let mut buf = EditorBuffer::from_text("ab");
        buf.move_to(0, 1);
        buf.insert_char('\n');
        assert_eq!(buf.text(), "a\nb");
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    #[test]
    fn test_multibyte_columns_are_chars() {
        let mut buf = EditorBuffer::from_text("café");
        buf.move_end();
        assert_eq!(buf.cursor().col, 4);
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "caf");
        buf.insert_char('é');
        buf.insert_char('!');
        assert_eq!(buf.text(), "café!");
    }

    #[test]
    fn test_insert_str_multiline_moves_cursor_to_tail() {
        let mut buf = EditorBuffer::from_text("[]");
        buf.move_to(0, 1);
        assert!(buf.insert_str("one\ntwo\nthree"));
        assert_eq!(buf.text(), "[one\ntwo\nthree]");
        assert_eq!(buf.cursor(), Cursor::at(2, 5));
    }

    #[test]
    fn test_insert_empty_str_is_not_a_change() {
        let mut buf = EditorBuffer::from_text("x");
        assert!(!buf.insert_str(""));
    }

    #[test]
    fn test_mutators_report_only_real_changes() {
        let mut buf = EditorBuffer::from_text("a");
        assert!(!buf.delete_back());
        assert!(buf.delete_forward());
        assert!(!buf.delete_forward());
        assert!(!buf.clear());
        assert!(buf.split_line());
        assert!(buf.clear());
    }

    #[test]
    fn test_delete_back_at_origin_is_noop() {
        let mut buf = EditorBuffer::from_text("hello");
        assert!(!buf.delete_back());
        assert_eq!(buf.text(), "hello");
    }

    #[test]
    fn test_delete_back_joins_lines() {
        let mut buf = EditorBuffer::from_text("hello\nworld");
        buf.move_to(1, 0);
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "helloworld");
        assert_eq!(buf.cursor(), Cursor::at(0, 5));
    }

    #[test]
    fn test_delete_forward_at_end_is_noop() {
        let mut buf = EditorBuffer::from_text("hi\n");
        buf.move_to_end();
        assert!(!buf.delete_forward());
        buf.move_to(0, 2);
        assert!(buf.delete_forward());
        assert_eq!(buf.text(), "hi");
    }

    #[test]
    fn test_clear_empties_and_resets_cursor() {
        let mut buf = EditorBuffer::from_text("some\nnotes");
        buf.move_to_end();
        assert!(buf.clear());
        assert!(buf.is_empty());
        assert_eq!(buf.cursor(), Cursor::new());
        assert!(!buf.clear());
    }

    #[test]
    fn test_set_text_replaces_everything() {
        let mut buf = EditorBuffer::from_text("old");
        buf.move_end();
        buf.set_text("new\ncontent");
        assert_eq!(buf.text(), "new\ncontent");
        assert_eq!(buf.cursor(), Cursor::new());
    }

    #[test]
    fn test_horizontal_movement_wraps_lines() {
        let mut buf = EditorBuffer::from_text("ab\ncd");
        buf.move_to(1, 0);
        buf.move_cursor(Direction::Left);
        assert_eq!(buf.cursor(), Cursor::at(0, 2));
        buf.move_cursor(Direction::Right);
        assert_eq!(buf.cursor(), Cursor::at(1, 0));
    }

    #[test]
    fn test_vertical_movement_keeps_sticky_column() {
        let mut buf = EditorBuffer::from_text("hello\nhi\nworld");
        buf.move_to(0, 4);
        buf.move_cursor(Direction::Down);
        assert_eq!(buf.cursor().col, 2);
        buf.move_cursor(Direction::Down);
        assert_eq!(buf.cursor().line, 2);
        assert_eq!(buf.cursor().col, 4);
    }

    #[test]
    fn test_move_lines_stops_at_edges() {
        let mut buf = EditorBuffer::from_text("1\n2\n3\n4");
        buf.move_lines(10, Direction::Down);
        assert_eq!(buf.cursor().line, 3);
        buf.move_lines(2, Direction::Up);
        assert_eq!(buf.cursor().line, 1);
    }

    #[test]
    fn test_move_to_clamps() {
        let mut buf = EditorBuffer::from_text("hello");
        buf.move_to(9, 99);
        assert_eq!(buf.cursor(), Cursor::at(0, 5));
    }
}
