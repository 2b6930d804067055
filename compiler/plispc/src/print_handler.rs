//! Where REPL output goes.
//!
//! The loop writes through `PrintHandlerImpl`, so a session can target the
//! terminal or an in-memory capture without a trait object.

use std::io::{self, Write};

use parking_lot::Mutex;

/// Output sink for a session.
pub enum PrintHandlerImpl {
    /// Process stdout, flushed after every write so prompts show up.
    Stdout,
    /// In-memory capture.
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    pub fn stdout() -> Self {
        Self::Stdout
    }

    pub fn buffer() -> Self {
        Self::Buffer(BufferPrintHandler::default())
    }

    /// Write `text` as-is.
    pub fn print(&self, text: &str) {
        match self {
            Self::Stdout => write_stdout(text),
            Self::Buffer(buffer) => buffer.append(text),
        }
    }

    /// Write `text` followed by a newline.
    pub fn println(&self, text: &str) {
        self.print(&format!("{text}\n"));
    }

    /// Everything written so far, for a capturing sink.
    pub fn captured(&self) -> Option<String> {
        match self {
            Self::Stdout => None,
            Self::Buffer(buffer) => Some(buffer.contents()),
        }
    }
}

fn write_stdout(text: &str) {
    let mut stdout = io::stdout().lock();
    // A closed stdout is not worth aborting the session over.
    let _ = stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush());
}

/// Accumulates output in a string.
#[derive(Default)]
pub struct BufferPrintHandler {
    captured: Mutex<String>,
}

impl BufferPrintHandler {
    fn append(&self, text: &str) {
        self.captured.lock().push_str(text);
    }

    pub fn contents(&self) -> String {
        self.captured.lock().clone()
    }
}
