//! The accumulated reply for one request.

/// Ordered concatenation of every content fragment received for one
/// request. Only grows; a new request starts a new transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    text: String,
    fragments: usize,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one fragment. Empty fragments are ignored.
    pub fn push(&mut self, fragment: &str) {
        if fragment.is_empty() {
            return;
        }
        self.text.push_str(fragment);
        self.fragments += 1;
    }

    /// The text received so far.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of fragments appended.
    pub fn fragments(&self) -> usize {
        self.fragments
    }

    /// Whether nothing has been received.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume into the owned text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
