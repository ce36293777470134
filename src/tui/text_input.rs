use crate::util::unicode::{display_width, next_grapheme_boundary, prev_grapheme_boundary};

/// Single-line edit buffer used while naming a new project or task.
///
/// `cursor` is a byte offset that always sits on a grapheme boundary.
/// The buffer never holds more than `limit` chars; extra input is dropped.
#[derive(Debug, Clone)]
pub struct InputState {
    buffer: String,
    cursor: usize,
    focused: bool,
    limit: usize,
}

impl InputState {
    pub fn new(limit: usize) -> Self {
        InputState {
            buffer: String::new(),
            cursor: 0,
            focused: false,
            limit,
        }
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Clear the buffer and drop focus
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.focused = false;
    }

    /// Insert `c` at the cursor. Returns false if it was dropped.
    pub fn type_char(&mut self, c: char) -> bool {
        if c.is_control() || self.buffer.chars().count() >= self.limit {
            return false;
        }
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        true
    }

    /// Insert pasted text, flattening newlines and stopping at the limit
    pub fn paste(&mut self, text: &str) {
        for c in text.chars() {
            let c = if c == '\n' || c == '\t' { ' ' } else { c };
            if !c.is_control() && !self.type_char(c) {
                break;
            }
        }
    }

    /// Remove the grapheme before the cursor
    pub fn backspace(&mut self) {
        if let Some(start) = prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.drain(start..self.cursor);
            self.cursor = start;
        }
    }

    /// Remove the grapheme under the cursor
    pub fn delete_forward(&mut self) {
        if let Some(end) = next_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.drain(self.cursor..end);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(pos) = prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = pos;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(pos) = next_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = pos;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Terminal column of the cursor relative to the start of the text
    pub fn cursor_col(&self) -> usize {
        display_width(&self.buffer[..self.cursor])
    }
}
