//! Single-line text editing state: content, cursor, selection anchor.

/// Text content plus cursor state for one input.
///
/// The cursor is a character index, not a byte index, so multi-byte
/// text edits stay on character boundaries. When `anchor` is set and
/// differs from the cursor, the span between them is selected.
#[derive(Debug, Clone, Default)]
pub struct TextEditor {
    text: String,
    cursor: usize,
    anchor: Option<usize>,
}

/// Result of applying one editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditResult {
    /// Text was modified.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Key was handled but text did not change (cursor movement).
    Handled,
    /// Key is not an editing key.
    Ignored,
}

impl TextEditor {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            cursor,
            anchor: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Selection range as character indices, (start, end) with
    /// start < end.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.anchor.and_then(|a| {
            if a == self.cursor {
                None
            } else if a < self.cursor {
                Some((a, self.cursor))
            } else {
                Some((self.cursor, a))
            }
        })
    }

    pub fn has_selection(&self) -> bool {
        self.selection().is_some()
    }

    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    pub fn select_all(&mut self) {
        if !self.text.is_empty() {
            self.anchor = Some(0);
            self.cursor = self.text.chars().count();
        }
    }

    /// Insert a character at the cursor, replacing the selection if
    /// there is one.
    pub fn insert_char(&mut self, c: char) {
        if let Some((start, end)) = self.selection() {
            self.replace_range(start, end, c.encode_utf8(&mut [0; 4]));
            self.cursor = start + 1;
            self.clear_selection();
        } else {
            let byte_pos = char_to_byte_index(&self.text, self.cursor);
            self.text.insert(byte_pos, c);
            self.cursor += 1;
        }
    }

    /// Delete the selection, or the character before the cursor.
    /// Returns true if text changed.
    pub fn delete_back(&mut self) -> bool {
        if let Some((start, end)) = self.selection() {
            self.replace_range(start, end, "");
            self.cursor = start;
            self.clear_selection();
            true
        } else if self.cursor > 0 {
            self.replace_range(self.cursor - 1, self.cursor, "");
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Delete the selection, or the character at the cursor.
    /// Returns true if text changed.
    pub fn delete_forward(&mut self) -> bool {
        if let Some((start, end)) = self.selection() {
            self.replace_range(start, end, "");
            self.cursor = start;
            self.clear_selection();
            true
        } else if self.cursor < self.text.chars().count() {
            self.replace_range(self.cursor, self.cursor + 1, "");
            true
        } else {
            false
        }
    }

    /// Move the cursor by `delta` characters. Without `extend`, an
    /// existing selection collapses to its edge in the move direction.
    pub fn move_cursor(&mut self, delta: i32, extend: bool) {
        if extend {
            if self.anchor.is_none() {
                self.anchor = Some(self.cursor);
            }
        } else {
            if let Some((start, end)) = self.selection() {
                self.cursor = if delta < 0 { start } else { end };
                self.clear_selection();
                return;
            }
            self.clear_selection();
        }
        let char_count = self.text.chars().count();
        self.cursor = (self.cursor as i32 + delta).clamp(0, char_count as i32) as usize;
    }

    pub fn move_to_start(&mut self, extend: bool) {
        self.prepare_jump(extend);
        self.cursor = 0;
    }

    pub fn move_to_end(&mut self, extend: bool) {
        self.prepare_jump(extend);
        self.cursor = self.text.chars().count();
    }

    fn prepare_jump(&mut self, extend: bool) {
        if extend {
            if self.anchor.is_none() {
                self.anchor = Some(self.cursor);
            }
        } else {
            self.clear_selection();
        }
    }

    /// Splice `replacement` over the character range [start, end).
    fn replace_range(&mut self, start: usize, end: usize, replacement: &str) {
        let start_byte = char_to_byte_index(&self.text, start);
        let end_byte = char_to_byte_index(&self.text, end);
        self.text.replace_range(start_byte..end_byte, replacement);
    }
}

fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_at_cursor() {
        let mut ed = TextEditor::new("ac");
        ed.move_cursor(-1, false);
        ed.insert_char('b');
        assert_eq!(ed.text(), "abc");
        assert_eq!(ed.cursor(), 2);
    }

    #[test]
    fn delete_back_removes_previous_char() {
        let mut ed = TextEditor::new("abc");
        assert!(ed.delete_back());
        assert_eq!(ed.text(), "ab");
        assert!(ed.delete_back());
        assert!(ed.delete_back());
        assert!(!ed.delete_back());
        assert_eq!(ed.text(), "");
    }

    #[test]
    fn delete_forward_at_end_is_noop() {
        let mut ed = TextEditor::new("ab");
        assert!(!ed.delete_forward());
        ed.move_to_start(false);
        assert!(ed.delete_forward());
        assert_eq!(ed.text(), "b");
    }

    #[test]
    fn selection_replace_on_insert() {
        let mut ed = TextEditor::new("hello");
        ed.select_all();
        ed.insert_char('x');
        assert_eq!(ed.text(), "x");
        assert_eq!(ed.cursor(), 1);
        assert!(!ed.has_selection());
    }

    #[test]
    fn shift_extends_selection() {
        let mut ed = TextEditor::new("abcd");
        ed.move_cursor(-2, true);
        assert_eq!(ed.selection(), Some((2, 4)));
        assert!(ed.delete_back());
        assert_eq!(ed.text(), "ab");
    }

    #[test]
    fn multibyte_edits_stay_on_char_boundaries() {
        let mut ed = TextEditor::new("héllo");
        ed.move_to_start(false);
        ed.move_cursor(2, false);
        assert!(ed.delete_back());
        assert_eq!(ed.text(), "hllo");
    }

    #[test]
    fn collapse_selection_without_extend() {
        let mut ed = TextEditor::new("abcd");
        ed.move_cursor(-3, true);
        ed.move_cursor(1, false);
        assert!(!ed.has_selection());
        assert_eq!(ed.cursor(), 4);
    }
}
