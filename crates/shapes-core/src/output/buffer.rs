//! In-memory console for tests and for callers that post-process output.
//!
//! Collects lines without printing them, so assertions can inspect exactly
//! what a shape wrote and in which order.

use super::Console;

/// A [`Console`] that records every line it receives.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferConsole {
    lines: Vec<String>,
}

impl BufferConsole {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded lines, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the buffer and returns the recorded lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Returns `true` if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Discards all recorded lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Console for BufferConsole {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}
