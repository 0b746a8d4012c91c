//! Rendering and input capabilities.
//!
//! A session never reasons about rendering beyond these calls: it resets
//! the sink, appends raw text fragments in arrival order, and toggles the
//! composer's send affordance around each request.

/// Where reply text is rendered.
pub trait DisplaySink: Send {
    /// Start a fresh reply area for a new request.
    fn reset(&mut self);

    /// Append a fragment of reply text (or a notice) as it arrives.
    fn append_text(&mut self, text: &str);

    /// Show a local notice that is not part of any reply, such as a
    /// validation message. Appends by default.
    fn notice(&mut self, text: &str) {
        self.append_text(text);
    }
}

/// The input side: a send affordance and an input field.
pub trait Composer: Send {
    /// Enable or disable the send affordance.
    fn set_enabled(&mut self, enabled: bool);

    /// Clear the input field after a successful send.
    fn clear_input(&mut self);
}

impl<T: DisplaySink + ?Sized> DisplaySink for Box<T> {
    fn reset(&mut self) {
        (**self).reset();
    }

    fn append_text(&mut self, text: &str) {
        (**self).append_text(text);
    }

    fn notice(&mut self, text: &str) {
        (**self).notice(text);
    }
}

impl<T: Composer + ?Sized> Composer for Box<T> {
    fn set_enabled(&mut self, enabled: bool) {
        (**self).set_enabled(enabled);
    }

    fn clear_input(&mut self) {
        (**self).clear_input();
    }
}
