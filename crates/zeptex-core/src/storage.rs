#![forbid(unsafe_code)]

//! Storage seam.
//!
//! File I/O is an external collaborator: the session only ever asks to load
//! a whole file as lines or to save the whole buffer. Failures are recovered
//! as no-ops at the call site, so implementations just report them; tests
//! substitute doubles that fail on demand.

use std::io;
use std::path::Path;

/// Load/save collaborator for the editor session.
pub trait Storage {
    /// Read the file at `path` as a sequence of lines, line terminators
    /// stripped.
    ///
    /// # Errors
    ///
    /// Any I/O failure; the caller treats it as "nothing was loaded".
    fn load(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Write `lines` to `path`, one per line, newline-terminated.
    ///
    /// # Errors
    ///
    /// Any I/O failure; the caller treats it as "nothing was saved".
    fn save(&self, path: &Path, lines: &[String]) -> io::Result<()>;
}
