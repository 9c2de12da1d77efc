#![forbid(unsafe_code)]

//! Inbound event source.
//!
//! Keystrokes and resize notifications arrive through one channel: the
//! [`EventSource`] polls the level-triggered resize flag first, then blocks
//! for a single stdin byte. A read interrupted by a signal is not an error;
//! the loop simply comes back around, re-checks the flag, and retries the
//! read. That preserves the original "re-checked after interrupted reads"
//! semantics without any asynchronous mutation.

use std::io::{self, Read};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use zeptex_core::event::Event;

/// Blocking reader for single stdin bytes.
#[derive(Debug)]
pub struct StdinBytes {
    stdin: io::Stdin,
}

impl Default for StdinBytes {
    fn default() -> Self {
        Self::new()
    }
}

impl StdinBytes {
    /// Create a reader over the process stdin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
        }
    }

    /// Block for one byte. Returns `Ok(None)` when the read was interrupted
    /// by a signal or delivered no data, so the caller can re-check the
    /// resize flag and retry.
    ///
    /// # Errors
    ///
    /// Any I/O failure other than an interrupted read.
    pub fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        match self.stdin.read(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// The editor's single inbound event channel.
///
/// Combines the stdin byte stream with the resize flag set by the SIGWINCH
/// handler. The flag is polled before every read, so a resize is observed
/// at the next loop iteration even when it did not interrupt the read.
#[derive(Debug)]
pub struct EventSource {
    bytes: StdinBytes,
    resize: Arc<AtomicBool>,
}

impl EventSource {
    /// Create an event source over stdin and the given resize flag.
    #[must_use]
    pub fn new(resize: Arc<AtomicBool>) -> Self {
        Self {
            bytes: StdinBytes::new(),
            resize,
        }
    }

    /// Block until the next event: a pending resize wins over input.
    ///
    /// # Errors
    ///
    /// Any I/O failure from the size query or a non-interrupted read.
    pub fn next_event(&mut self) -> io::Result<Event> {
        loop {
            if self.resize.swap(false, Ordering::SeqCst) {
                let (width, height) = crossterm::terminal::size()?;
                return Ok(Event::Resize { width, height });
            }
            if let Some(byte) = self.bytes.read_byte()? {
                return Ok(Event::Byte(byte));
            }
            // Interrupted or empty read: poll the flag again.
        }
    }
}
