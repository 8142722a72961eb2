//! Session transcript: every prompt and response of a study session.

use std::io::{self, Write};

/// Append-only transcript of a session.
///
/// One log lives for the whole program run. [`flush_to`](SessionLog::flush_to)
/// writes everything recorded so far and leaves the buffer intact, so a later
/// flush includes both old and new lines.
#[derive(Debug, Default, Clone)]
pub struct SessionLog {
    lines: Vec<String>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line to the transcript.
    pub fn record(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Recorded lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Write every recorded line, newline-terminated, to `target`.
    /// Does not clear the buffer.
    pub fn flush_to(&self, target: &mut impl Write) -> io::Result<()> {
        for line in &self.lines {
            writeln!(target, "{line}")?;
        }
        target.flush()
    }
}
