//! Session state of the bridge.
//!
//! Two orthogonal flags drive whether an incoming message becomes a log
//! entry: `awaiting_text` is armed by the add-log command and consumed by
//! the first message that follows; `capture_all` is a sticky toggle that
//! logs every incoming message. Neither flag survives a restart.

/// Session flags, owned by the bridge and mutated only from its event
/// handlers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    awaiting_text: bool,
    capture_all: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_awaiting_text(&self) -> bool {
        self.awaiting_text
    }

    pub fn is_capture_all(&self) -> bool {
        self.capture_all
    }

    /// Whether the next text/file event should be logged.
    pub fn should_capture(&self) -> bool {
        self.awaiting_text || self.capture_all
    }

    /// Arm the one-shot flag: the next incoming message becomes a log entry.
    pub fn begin_awaiting_text(&mut self) {
        self.awaiting_text = true;
    }

    /// Clear the one-shot flag after a message has been logged.
    pub fn consume_awaiting_text(&mut self) {
        self.awaiting_text = false;
    }

    /// Flip capture-all mode and return the new value.
    pub fn toggle_capture_all(&mut self) -> bool {
        self.capture_all = !self.capture_all;
        self.capture_all
    }
}
