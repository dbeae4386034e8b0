// Dskey Text Document
// Text input target the keyboard writes into

/// Receiver of keyboard output.
pub trait TextDocument {
    /// Insert text at the cursor
    fn insert_text(&mut self, text: &str);

    /// Delete the character before the cursor
    fn delete_backward(&mut self);
}

/// In-memory text target with the cursor at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of chars in the buffer
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

impl TextDocument for TextBuffer {
    fn insert_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn delete_backward(&mut self) {
        self.text.pop();
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}
