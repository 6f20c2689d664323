//! Search box text editing (pure state transitions).
//!
//! The box holds raw text and a cursor measured in characters. Turning the
//! text into a search query (and debouncing that) is the controller's job.

/// Editable search text with a character cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBox {
    text: String,
    cursor: usize,
}

impl SearchBox {
    /// Create a box pre-filled with `text`, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters, `0..=len`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether nothing has been typed.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

/// Insert `ch` at the cursor and advance past it.
pub fn insert_char(mut search: SearchBox, ch: char) -> SearchBox {
    let at = search.byte_index(search.cursor);
    search.text.insert(at, ch);
    search.cursor += 1;
    search
}

/// Delete the character before the cursor. No-op at position 0.
pub fn backspace(mut search: SearchBox) -> SearchBox {
    if search.cursor == 0 {
        return search;
    }
    let at = search.byte_index(search.cursor - 1);
    search.text.remove(at);
    search.cursor -= 1;
    search
}

/// Move the cursor one character left, saturating at 0.
pub fn cursor_left(mut search: SearchBox) -> SearchBox {
    search.cursor = search.cursor.saturating_sub(1);
    search
}

/// Move the cursor one character right, saturating at the end.
pub fn cursor_right(mut search: SearchBox) -> SearchBox {
    let len = search.text.chars().count();
    search.cursor = (search.cursor + 1).min(len);
    search
}

/// Empty the box.
pub fn clear(_search: SearchBox) -> SearchBox {
    SearchBox::default()
}
