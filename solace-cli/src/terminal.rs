//! Terminal implementations of the display and composer capabilities.

use std::io::Write;

use solace_types::{Composer, DisplaySink};

const AI_PREFIX: &str = "ai> ";
const USER_PROMPT: &str = "you> ";

/// Renders replies to a writer (stdout in the binary), flushing after
/// every fragment so text shows up as it streams in.
pub struct TerminalSink<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print a full assistant line, e.g. the greeting.
    pub fn say(&mut self, text: &str) {
        self.write(&format!("{AI_PREFIX}{text}\n"));
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|()| self.out.flush()) {
            tracing::warn!(error = %e, "failed to write to terminal");
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> DisplaySink for TerminalSink<W> {
    fn reset(&mut self) {
        self.write(AI_PREFIX);
    }

    fn append_text(&mut self, text: &str) {
        self.write(text);
    }

    fn notice(&mut self, text: &str) {
        self.write(&format!("{text}\n"));
    }
}

/// Shows the input prompt whenever sending is enabled again.
pub struct PromptComposer<W: Write + Send> {
    out: W,
    enabled: bool,
}

impl<W: Write + Send> PromptComposer<W> {
    pub fn new(out: W) -> Self {
        Self { out, enabled: true }
    }

    /// Print the input prompt.
    pub fn prompt(&mut self) {
        if let Err(e) = self
            .out
            .write_all(USER_PROMPT.as_bytes())
            .and_then(|()| self.out.flush())
        {
            tracing::warn!(error = %e, "failed to write prompt");
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Composer for PromptComposer<W> {
    fn set_enabled(&mut self, enabled: bool) {
        let was_enabled = std::mem::replace(&mut self.enabled, enabled);
        if enabled && !was_enabled {
            let _ = self.out.write_all(b"\n");
            self.prompt();
        }
    }

    fn clear_input(&mut self) {
        // Lines are consumed from stdin as they are read; nothing to clear.
    }
}
