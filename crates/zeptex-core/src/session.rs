#![forbid(unsafe_code)]

//! Editor session: state plus dispatch.
//!
//! [`EditorSession`] owns the line buffer, the viewport, the command-line
//! parser, the one-line status message, and the associated file path. It is
//! a plain value threaded through the loop; there is no global state.
//!
//! Dispatch rules worth noting:
//!
//! - Every inbound event first clears the status message, so a message
//!   survives exactly until the next keystroke or resize.
//! - The pending command is cleared on every confirmed command except an
//!   [`Command::Invalid`] outcome, which leaves it at the prompt for
//!   editing.
//! - Bounds violations (insert/delete out of range, buffer at capacity)
//!   and storage failures are quiet no-ops; only syntax errors surface a
//!   status message.

use std::path::{Path, PathBuf};

use crate::command::Command;
use crate::event::InputEvent;
use crate::line_buffer::LineBuffer;
use crate::parser::CommandParser;
use crate::storage::Storage;
use crate::viewport::Viewport;

/// Whether the loop should keep running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading input.
    Continue,
    /// The session ended (`q`).
    Quit,
}

/// All mutable editor state for one session.
#[derive(Debug)]
pub struct EditorSession {
    buffer: LineBuffer,
    viewport: Viewport,
    parser: CommandParser,
    status: Option<String>,
    path: Option<PathBuf>,
}

impl EditorSession {
    /// Create an empty session with the given buffer capacity and no
    /// associated file.
    #[must_use]
    pub fn new(max_lines: usize) -> Self {
        Self {
            buffer: LineBuffer::with_max_lines(max_lines),
            viewport: Viewport::new(),
            parser: CommandParser::new(),
            status: None,
            path: None,
        }
    }

    /// Create a session, loading `path` through `store` when given.
    ///
    /// A load failure leaves the buffer empty and the session usable; the
    /// path stays associated so a later `w` can still create the file.
    pub fn open(path: Option<PathBuf>, max_lines: usize, store: &dyn Storage) -> Self {
        let mut session = Self::new(max_lines);
        session.path = path;
        if let Some(path) = &session.path {
            match store.load(path) {
                Ok(lines) => session.buffer.load(lines),
                Err(_err) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(path = %path.display(), error = %_err, "load failed, starting empty");
                }
            }
        }
        session
    }

    /// The line buffer.
    #[must_use]
    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    /// The viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The pending command text, as typed so far.
    #[must_use]
    pub fn pending(&self) -> &str {
        self.parser.pending()
    }

    /// The current status message, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// The associated file path, if the editor was opened with one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Feed one raw input byte through the parser and apply whatever it
    /// decodes. `visible_rows` is the current buffer-area height.
    pub fn handle_byte(&mut self, byte: u8, visible_rows: usize, store: &dyn Storage) -> Flow {
        self.status = None;
        match self.parser.feed(byte) {
            Some(event) => self.apply(event, visible_rows, store),
            None => Flow::Continue,
        }
    }

    /// React to a terminal resize by re-clamping the viewport.
    pub fn handle_resize(&mut self, visible_rows: usize) {
        self.status = None;
        self.viewport.clamp(self.buffer.len(), visible_rows);
    }

    /// Apply a decoded input event.
    pub fn apply(&mut self, event: InputEvent, visible_rows: usize, store: &dyn Storage) -> Flow {
        match event {
            InputEvent::ScrollUp => {
                self.viewport.scroll_up();
                Flow::Continue
            }
            InputEvent::ScrollDown => {
                self.viewport.scroll_down(self.buffer.len(), visible_rows);
                Flow::Continue
            }
            InputEvent::CommandReady(text) => {
                let command = Command::parse(&text);
                #[cfg(feature = "tracing")]
                tracing::debug!(?command, "dispatching");
                self.execute(command, visible_rows, store)
            }
        }
    }

    fn execute(&mut self, command: Command, visible_rows: usize, store: &dyn Storage) -> Flow {
        match command {
            Command::Quit => {
                self.parser.clear_pending();
                return Flow::Quit;
            }
            Command::Insert { line_no, text } => {
                if self.buffer.insert(line_no, text).is_ok() {
                    self.viewport.reveal(line_no, self.buffer.len(), visible_rows);
                }
            }
            Command::Append { text } => {
                if self.buffer.append(text).is_ok() {
                    let last = self.buffer.len();
                    self.viewport.reveal(last, last, visible_rows);
                }
            }
            Command::Delete { line_no } => {
                if let Some(line_no) = line_no
                    && self.buffer.delete(line_no).is_ok()
                {
                    self.viewport.pull_back(self.buffer.len());
                    self.viewport.clamp(self.buffer.len(), visible_rows);
                }
            }
            Command::Save { path } => {
                self.save(path.map(PathBuf::from), store);
            }
            Command::Invalid { reason } => {
                // Pending stays put so the user can fix the command.
                self.status = Some(reason.to_string());
                return Flow::Continue;
            }
        }
        self.parser.clear_pending();
        Flow::Continue
    }

    fn save(&mut self, explicit: Option<PathBuf>, store: &dyn Storage) {
        // `w <path>` does not re-associate the session with that path.
        let Some(target) = explicit.or_else(|| self.path.clone()) else {
            return;
        };
        match store.save(&target, self.buffer.lines()) {
            Ok(()) => {
                #[cfg(feature = "tracing")]
                tracing::info!(path = %target.display(), lines = self.buffer.len(), "saved");
            }
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(path = %target.display(), error = %_err, "save failed");
            }
        }
    }
}
