//! Single-line text input with a cursor, used by the search box.

/// Editable line of text. The cursor is a byte offset that always sits on a
/// char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let buffer = text.into();
        let cursor = buffer.len();
        Self { buffer, cursor }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(idx, _)| idx)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Remove the char before the cursor. Returns whether the text changed.
    pub fn backspace(&mut self) -> bool {
        match self.prev_boundary() {
            Some(idx) => {
                self.buffer.replace_range(idx..self.cursor, "");
                self.cursor = idx;
                true
            }
            None => false,
        }
    }

    /// Remove the char under the cursor. Returns whether the text changed.
    pub fn delete(&mut self) -> bool {
        match self.next_boundary() {
            Some(end) => {
                self.buffer.replace_range(self.cursor..end, "");
                true
            }
            None => false,
        }
    }

    /// Remove the word before the cursor, along with trailing whitespace.
    pub fn delete_word(&mut self) -> bool {
        let before = &self.buffer[..self.cursor];
        let trimmed = before.trim_end();
        let start = trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(idx, c)| idx + c.len_utf8())
            .unwrap_or(0);
        if start == self.cursor {
            return false;
        }
        self.buffer.replace_range(start..self.cursor, "");
        self.cursor = start;
        true
    }

    pub fn move_left(&mut self) {
        if let Some(idx) = self.prev_boundary() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(idx) = self.next_boundary() {
            self.cursor = idx;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, text: String) {
        self.buffer = text;
        self.cursor = self.buffer.len();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }

    /// Cursor position counted in chars, for placing the terminal cursor.
    pub fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_backspace() {
        let mut input = InputState::new();
        for c in "Rick".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.as_str(), "Rick");
        assert!(input.backspace());
        assert_eq!(input.as_str(), "Ric");
        assert_eq!(input.cursor_pos(), 3);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = InputState::with_text("Morty");
        input.move_home();
        assert!(!input.backspace());
        assert_eq!(input.as_str(), "Morty");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = InputState::with_text("Mrty");
        input.move_home();
        input.move_right();
        input.insert_char('o');
        assert_eq!(input.as_str(), "Morty");
        assert_eq!(input.cursor_column(), 2);
    }

    #[test]
    fn test_multibyte_chars() {
        let mut input = InputState::new();
        input.insert_char('é');
        input.insert_char('x');
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor_pos(), 0);
        assert!(input.delete());
        assert_eq!(input.as_str(), "x");
        input.move_end();
        assert_eq!(input.cursor_column(), 1);
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut input = InputState::with_text("Beth");
        assert!(!input.delete());
    }

    #[test]
    fn test_delete_word() {
        let mut input = InputState::with_text("Evil Morty  ");
        assert!(input.delete_word());
        assert_eq!(input.as_str(), "Evil ");
        assert!(input.delete_word());
        assert_eq!(input.as_str(), "");
        assert!(!input.delete_word());
    }
}
