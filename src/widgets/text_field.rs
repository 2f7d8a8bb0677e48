/// Editable single-line text with a char-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replaces the text and parks the cursor at its end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = char_count(&self.value);
    }

    pub fn insert_char(&mut self, ch: char) {
        let pos = self.clamped_cursor();
        let byte_pos = byte_index_at_char(&self.value, pos);
        self.value.insert(byte_pos, ch);
        self.cursor = pos + 1;
    }

    pub fn backspace(&mut self) -> bool {
        let pos = self.clamped_cursor();
        if pos == 0 {
            return false;
        }
        let byte_pos = byte_index_at_char(&self.value, pos - 1);
        self.value.remove(byte_pos);
        self.cursor = pos - 1;
        true
    }

    pub fn delete(&mut self) -> bool {
        let pos = self.clamped_cursor();
        if pos >= char_count(&self.value) {
            return false;
        }
        let byte_pos = byte_index_at_char(&self.value, pos);
        self.value.remove(byte_pos);
        true
    }

    pub fn move_left(&mut self) -> bool {
        let pos = self.clamped_cursor();
        if pos == 0 {
            return false;
        }
        self.cursor = pos - 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        let pos = self.clamped_cursor();
        if pos >= char_count(&self.value) {
            return false;
        }
        self.cursor = pos + 1;
        true
    }

    /// Text left of the cursor, for placing the terminal caret.
    pub fn before_cursor(&self) -> &str {
        &self.value[..byte_index_at_char(&self.value, self.clamped_cursor())]
    }

    fn clamped_cursor(&self) -> usize {
        self.cursor.min(char_count(&self.value))
    }
}

fn char_count(value: &str) -> usize {
    value.chars().count()
}

fn byte_index_at_char(value: &str, char_idx: usize) -> usize {
    value
        .char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(value.len())
}

#[cfg(test)]
mod tests {
    use super::TextField;

    #[test]
    fn edits_at_cursor() {
        let mut field = TextField::new();
        for ch in "mlk".chars() {
            field.insert_char(ch);
        }
        field.move_left();
        field.move_left();
        field.insert_char('i');
        assert_eq!(field.value(), "milk");
        assert_eq!(field.before_cursor(), "mi");
    }

    #[test]
    fn backspace_and_delete_handle_multibyte() {
        let mut field = TextField::new();
        field.set_value("crème");
        assert!(field.backspace());
        assert_eq!(field.value(), "crèm");
        field.move_left();
        field.move_left();
        assert!(field.delete());
        assert_eq!(field.value(), "crm");
        assert!(!TextField::new().backspace());
    }

    #[test]
    fn set_value_moves_cursor_to_end() {
        let mut field = TextField::new();
        field.set_value("Brookside Milk");
        assert_eq!(field.cursor(), 14);
        assert!(!field.move_right());
    }
}
