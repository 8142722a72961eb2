//! Line-based console with transcript capture.

use std::io::{self, BufRead, Write};

use deck_core::SessionLog;

/// Wraps a line-oriented input source and output sink and records every
/// line that crosses it, in order, into a [`SessionLog`].
///
/// Generic over reader and writer so sessions can be driven from scripted
/// input in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
    log: SessionLog,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            log: SessionLog::new(),
        }
    }

    /// Print one line and record it.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")?;
        self.output.flush()?;
        self.log.record(line);
        Ok(())
    }

    /// Print a prompt line, then read and record the user's response.
    ///
    /// Fails with [`io::ErrorKind::UnexpectedEof`] when the input source is
    /// exhausted.
    pub fn prompt(&mut self, message: &str) -> io::Result<String> {
        self.say(message)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input source exhausted",
            ));
        }

        let line = line.trim_end_matches(['\n', '\r']).to_string();
        self.log.record(line.clone());
        Ok(line)
    }

    /// The transcript recorded so far.
    pub fn log(&self) -> &SessionLog {
        &self.log
    }
}
