//! Raw text buffer for a cell in editing mode.
//!
//! Holds the cell's raw text plus a single cursor/selection. Offsets are in
//! characters; byte offsets are only computed at the point of mutation.

use super::selection::Selection;

/// Editable raw text of one cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellBuffer {
    text: String,
    selection: Selection,
}

impl CellBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a buffer from a value, cursor at the end
    pub fn from_text(s: &str) -> Self {
        let end = s.chars().count();
        Self {
            text: s.to_string(),
            selection: Selection::collapsed(end),
        }
    }

    /// Access the underlying string
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Total length in characters
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when the text is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.selection.head
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Get the selected text (empty string if no selection)
    pub fn selected_text(&self) -> String {
        let sel = self.selection;
        self.text
            .chars()
            .skip(sel.start())
            .take(sel.end() - sel.start())
            .collect()
    }

    /// Convert char offset to byte offset
    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Replace the character range with `text`, leaving the cursor after it
    fn replace_range(&mut self, start: usize, end: usize, text: &str) {
        let start_byte = self.char_to_byte(start);
        let end_byte = self.char_to_byte(end);
        self.text.replace_range(start_byte..end_byte, text);
        self.selection = Selection::collapsed(start + text.chars().count());
    }

    /// Set the selection from pointer input; offsets are clamped
    pub fn set_selection(&mut self, anchor: usize, head: usize) {
        self.selection = Selection::new(anchor, head);
        self.selection.clamp(self.len_chars());
    }

    /// Select all text
    pub fn select_all(&mut self) {
        self.selection = Selection::new(0, self.len_chars());
    }

    /// Insert a character, replacing any selection
    pub fn insert_char(&mut self, ch: char) {
        let mut tmp = [0u8; 4];
        self.insert_text(ch.encode_utf8(&mut tmp));
    }

    /// Insert text at the cursor, replacing any selection
    pub fn insert_text(&mut self, text: &str) {
        let (start, end) = (self.selection.start(), self.selection.end());
        self.replace_range(start, end, text);
    }

    /// Wrap the selection in `open`..`close`, keeping the inner text selected.
    ///
    /// Returns false (and does nothing) when there is no selection.
    pub fn wrap_selection(&mut self, open: &str, close: &str) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        let (start, end) = (self.selection.start(), self.selection.end());
        let inner = self.selected_text();
        let wrapped = format!("{}{}{}", open, inner, close);
        self.replace_range(start, end, &wrapped);

        let inner_start = start + open.chars().count();
        self.selection = Selection::new(inner_start, inner_start + inner.chars().count());
        true
    }

    /// Delete selection, or the character before the cursor
    pub fn delete_backward(&mut self) {
        if self.has_selection() {
            let (start, end) = (self.selection.start(), self.selection.end());
            self.replace_range(start, end, "");
        } else if self.selection.head > 0 {
            let head = self.selection.head;
            self.replace_range(head - 1, head, "");
        }
    }

    /// Delete selection, or the character at the cursor
    pub fn delete_forward(&mut self) {
        if self.has_selection() {
            let (start, end) = (self.selection.start(), self.selection.end());
            self.replace_range(start, end, "");
        } else if self.selection.head < self.len_chars() {
            let head = self.selection.head;
            self.replace_range(head, head + 1, "");
        }
    }

    /// Move cursor left by one character
    pub fn move_left(&mut self, extend_selection: bool) {
        if !extend_selection && self.has_selection() {
            self.selection = Selection::collapsed(self.selection.start());
            return;
        }
        let head = self.selection.head.saturating_sub(1);
        self.move_head(head, extend_selection);
    }

    /// Move cursor right by one character
    pub fn move_right(&mut self, extend_selection: bool) {
        if !extend_selection && self.has_selection() {
            self.selection = Selection::collapsed(self.selection.end());
            return;
        }
        let head = (self.selection.head + 1).min(self.len_chars());
        self.move_head(head, extend_selection);
    }

    /// Move cursor to the start of its line
    pub fn move_line_start(&mut self, extend_selection: bool) {
        let head = self.line_bounds(self.selection.head).0;
        self.move_head(head, extend_selection);
    }

    /// Move cursor to the end of its line
    pub fn move_line_end(&mut self, extend_selection: bool) {
        let head = self.line_bounds(self.selection.head).1;
        self.move_head(head, extend_selection);
    }

    fn move_head(&mut self, head: usize, extend_selection: bool) {
        if extend_selection {
            self.selection.head = head;
        } else {
            self.selection = Selection::collapsed(head);
        }
    }

    /// Character range (start, end) of the line containing `offset`,
    /// excluding the newline
    fn line_bounds(&self, offset: usize) -> (usize, usize) {
        let chars: Vec<char> = self.text.chars().collect();
        let offset = offset.min(chars.len());
        let start = chars[..offset]
            .iter()
            .rposition(|&c| c == '\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        let end = chars[offset..]
            .iter()
            .position(|&c| c == '\n')
            .map(|i| offset + i)
            .unwrap_or(chars.len());
        (start, end)
    }
}
