//! Async readline input for the chat loop.
//!
//! Wraps `rustyline_async::Readline` so the loop sees three events:
//! a submitted line, EOF (Ctrl+D), or an interrupt (Ctrl+C). Lines are
//! trimmed here; blank-line and in-flight gating belongs to the turn
//! state in polished-core.

use rustyline_async::{Readline, ReadlineError, SharedWriter};

/// Events produced by the input handler.
#[derive(Debug)]
pub enum InputEvent {
    /// User submitted a line (already trimmed).
    Line(String),
    /// End of file (Ctrl+D).
    Eof,
    /// Interrupt signal (Ctrl+C).
    Interrupted,
}

/// Async input handler for the review chat.
pub struct ReviewInput {
    rl: Readline,
}

impl ReviewInput {
    /// Create the input handler with the given prompt.
    ///
    /// Also returns a `SharedWriter` for printing without clobbering the
    /// readline prompt.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(prompt)?;
        Ok((Self { rl }, stdout))
    }

    /// Wait for the next input event.
    pub async fn read_event(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(rustyline_async::ReadlineEvent::Line(line)) => {
                InputEvent::Line(line.trim().to_string())
            }
            Ok(rustyline_async::ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(rustyline_async::ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(_) => InputEvent::Eof,
        }
    }

    /// Clear the terminal screen.
    pub fn clear(&mut self) {
        let _ = self.rl.clear();
    }
}
