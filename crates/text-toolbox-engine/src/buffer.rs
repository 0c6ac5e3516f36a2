use std::mem;

/// The text a tool session works on.
///
/// Changes are whole-value replacements. The value before the last
/// replacement is kept so a shell can offer a single level of undo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    current: String,
    previous: Option<String>,
}

impl TextBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            current: text.into(),
            previous: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.current
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Replaces the whole value, returning what it held before.
    pub fn replace(&mut self, text: String) -> String {
        let old = mem::replace(&mut self.current, text);
        self.previous = Some(old.clone());
        old
    }

    /// Swaps back to the value before the last [`replace`](Self::replace).
    /// Undoing twice redoes. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.previous.as_mut() {
            Some(prev) => {
                mem::swap(&mut self.current, prev);
                true
            }
            None => false,
        }
    }

    pub fn into_string(self) -> String {
        self.current
    }
}

impl From<String> for TextBuffer {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl AsRef<str> for TextBuffer {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
