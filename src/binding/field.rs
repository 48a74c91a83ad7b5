//! In-memory single-line text field.
//!
//! Caret offsets are in chars, not bytes. Byte offsets are only computed at
//! the moment the underlying `String` is edited.

use crate::binding::MaskTarget;

/// A minimal editable value with a caret
///
/// Used by the CLI keystroke replay and by tests standing in for a real
/// input widget.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TextField {
    value: String,
    caret: usize,
}

impl TextField {
    /// Empty field with the caret at 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Field holding `value` with the caret at the end
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            caret: value.chars().count(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Length in chars
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Insert a character at the caret and move past it
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.caret);
        self.value.insert(at, c);
        self.caret += 1;
    }

    /// Insert a string at the caret and move past it
    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_offset(self.caret);
        self.value.insert_str(at, s);
        self.caret += s.chars().count();
    }

    /// Remove the character before the caret
    ///
    /// Returns the removed character, or `None` at the start of the field.
    pub fn backspace(&mut self) -> Option<char> {
        if self.caret == 0 {
            return None;
        }
        self.caret -= 1;
        let at = self.byte_offset(self.caret);
        Some(self.value.remove(at))
    }

    /// Remove the character after the caret
    pub fn delete(&mut self) -> Option<char> {
        if self.caret >= self.len() {
            return None;
        }
        let at = self.byte_offset(self.caret);
        Some(self.value.remove(at))
    }

    /// Place the caret, clamped to the value length
    pub fn move_to(&mut self, caret: usize) {
        self.caret = caret.min(self.len());
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.move_to(self.caret + 1);
    }

    fn byte_offset(&self, caret: usize) -> usize {
        self.value
            .char_indices()
            .nth(caret)
            .map_or(self.value.len(), |(index, _)| index)
    }
}

impl MaskTarget for TextField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.caret = self.caret.min(self.len());
    }

    fn caret(&self) -> Option<usize> {
        Some(self.caret)
    }

    fn set_caret(&mut self, caret: usize) {
        self.move_to(caret);
    }
}
