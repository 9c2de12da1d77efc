#![forbid(unsafe_code)]

//! Command-line input parser state machine.
//!
//! Decodes terminal input bytes one at a time, accumulating printable
//! characters into the pending command and recognizing the handful of
//! control inputs the editor understands.
//!
//! # Design
//!
//! The parser is a small state machine:
//!
//! - `Ground`: printable ASCII appends to the pending command (bounded by
//!   [`MAX_PENDING_LEN`]), backspace/delete pops, CR/LF emits
//!   [`InputEvent::CommandReady`] with a snapshot of the pending text.
//! - `Escape`: after ESC (0x1B); exactly two further bytes are consumed.
//! - `Csi`: the first lookahead byte was `[`; a final byte of `A` or `B`
//!   emits a scroll event, anything else is silently dropped. This is a
//!   deliberate "ignore unrecognized escape sequences" policy covering
//!   function keys, page keys, and the rest.
//! - `Skip`: the first lookahead byte was not `[`; one more byte is
//!   consumed and discarded.
//!
//! A byte stream that ends mid-sequence simply leaves the machine parked in
//! its current state with the pending command untouched; the abandoned
//! escape resolves whenever more bytes arrive.
//!
//! The pending command is owned here. [`CommandParser::clear_pending`] is
//! called by the dispatcher only after successful interpretation, so an
//! invalid command line stays at the prompt for editing.

use crate::event::InputEvent;

/// Maximum length of the pending command, in bytes.
pub const MAX_PENDING_LEN: usize = 1023;

/// Parser state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ParserState {
    /// Normal character input.
    #[default]
    Ground,
    /// After ESC (0x1B), awaiting the first lookahead byte.
    Escape,
    /// After ESC `[`, awaiting the final byte.
    Csi,
    /// After ESC plus a non-`[` byte; one more byte is discarded.
    Skip,
}

/// Byte-at-a-time command-line parser.
///
/// ```
/// use zeptex_core::event::InputEvent;
/// use zeptex_core::parser::CommandParser;
///
/// let mut parser = CommandParser::new();
/// assert_eq!(parser.parse(b"\x1b[A"), vec![InputEvent::ScrollUp]);
/// ```
#[derive(Debug, Default)]
pub struct CommandParser {
    state: ParserState,
    pending: String,
}

impl CommandParser {
    /// Create a new parser with an empty pending command.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ParserState::Ground,
            pending: String::new(),
        }
    }

    /// The command text typed since the last confirmed command.
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Clear the pending command.
    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }

    /// Feed input bytes and return any completed events.
    pub fn parse(&mut self, input: &[u8]) -> Vec<InputEvent> {
        input.iter().filter_map(|&byte| self.feed(byte)).collect()
    }

    /// Process a single byte and optionally return an event.
    pub fn feed(&mut self, byte: u8) -> Option<InputEvent> {
        match self.state {
            ParserState::Ground => self.feed_ground(byte),
            ParserState::Escape => {
                self.state = if byte == b'[' {
                    ParserState::Csi
                } else {
                    ParserState::Skip
                };
                None
            }
            ParserState::Csi => {
                self.state = ParserState::Ground;
                match byte {
                    b'A' => Some(InputEvent::ScrollUp),
                    b'B' => Some(InputEvent::ScrollDown),
                    _ => None,
                }
            }
            ParserState::Skip => {
                self.state = ParserState::Ground;
                None
            }
        }
    }

    fn feed_ground(&mut self, byte: u8) -> Option<InputEvent> {
        match byte {
            // ESC starts a two-byte lookahead
            0x1B => {
                self.state = ParserState::Escape;
                None
            }
            // Enter confirms the pending command
            b'\r' | b'\n' => Some(InputEvent::CommandReady(self.pending.clone())),
            // Backspace / DEL edits the pending command
            0x08 | 0x7F => {
                self.pending.pop();
                None
            }
            // Printable ASCII, while under the length bound
            0x20..=0x7E => {
                if self.pending.len() < MAX_PENDING_LEN {
                    self.pending.push(byte as char);
                }
                None
            }
            // All other control bytes are ignored
            _ => None,
        }
    }
}
