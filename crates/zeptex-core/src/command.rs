#![forbid(unsafe_code)]

//! Command grammar.
//!
//! A confirmed command line is interpreted by its leading verb:
//!
//! ```text
//! i <positive-int> <text>   insert before the given line
//! a <text>                  append after the last line
//! d <int>                   delete the given line
//! w [path]                  save, to `path` or the opened file
//! q                         quit
//! ```
//!
//! Syntax is strict: `i` and `a` require exactly one space after the verb,
//! and `i` requires a contiguous digit run followed by exactly one space
//! before the text (which may itself be empty or contain spaces). Violations
//! parse to [`Command::Invalid`] with a status message; the one deliberate
//! exception is `d`, whose unparseable argument is a quiet no-op
//! ([`Command::Delete`] with `line_no: None`) rather than an error.

/// Status message for malformed `i` syntax.
pub const MSG_INVALID_INSERT: &str = "Invalid insert syntax. Use: i <line> <text>";
/// Status message for a non-numeric or non-positive insert line number.
pub const MSG_INVALID_LINE_NO: &str = "Invalid line number. Use: i <line> <text>";
/// Status message for malformed `a` syntax.
pub const MSG_INVALID_APPEND: &str = "Invalid append syntax. Use: a <text>";
/// Status message for `a` with nothing to append.
pub const MSG_EMPTY_APPEND: &str = "No text to append. Use: a <text>";
/// Status message for an unrecognized or empty command.
pub const MSG_UNKNOWN: &str = "Unknown command";

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert `text` at 1-based `line_no`.
    Insert {
        /// Target line number (positive).
        line_no: usize,
        /// Text to store; may be empty or contain spaces.
        text: String,
    },

    /// Append `text` after the last line.
    Append {
        /// Text to store.
        text: String,
    },

    /// Delete the line at `line_no`.
    ///
    /// `None` means the argument did not parse; the dispatcher treats that
    /// as a quiet no-op, with no status message.
    Delete {
        /// Target line number, when the argument parsed.
        line_no: Option<usize>,
    },

    /// Save the buffer.
    Save {
        /// Explicit target path; `None` falls back to the opened file.
        path: Option<String>,
    },

    /// End the session.
    Quit,

    /// A syntax error, surfaced as a one-line status message.
    Invalid {
        /// The message to show at the prompt.
        reason: &'static str,
    },
}

impl Command {
    /// Parse a confirmed command line.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if input == "q" {
            return Self::Quit;
        }
        let mut chars = input.chars();
        match chars.next() {
            Some('i') => parse_insert(chars.as_str()),
            Some('a') => parse_append(chars.as_str()),
            Some('d') => parse_delete(chars.as_str()),
            Some('w') => parse_save(chars.as_str()),
            _ => Self::Invalid {
                reason: MSG_UNKNOWN,
            },
        }
    }
}

fn parse_insert(rest: &str) -> Command {
    let Some(rest) = rest.strip_prefix(' ') else {
        return Command::Invalid {
            reason: MSG_INVALID_INSERT,
        };
    };
    let Some((number, text)) = rest.split_once(' ') else {
        return Command::Invalid {
            reason: MSG_INVALID_INSERT,
        };
    };
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Command::Invalid {
            reason: MSG_INVALID_LINE_NO,
        };
    }
    match number.parse::<usize>() {
        Ok(line_no) if line_no > 0 => Command::Insert {
            line_no,
            text: text.to_string(),
        },
        _ => Command::Invalid {
            reason: MSG_INVALID_LINE_NO,
        },
    }
}

fn parse_append(rest: &str) -> Command {
    let Some(text) = rest.strip_prefix(' ') else {
        return Command::Invalid {
            reason: MSG_INVALID_APPEND,
        };
    };
    if text.is_empty() {
        return Command::Invalid {
            reason: MSG_EMPTY_APPEND,
        };
    }
    Command::Append {
        text: text.to_string(),
    }
}

fn parse_delete(rest: &str) -> Command {
    let line_no = match rest.trim().parse::<i64>() {
        Ok(n) if n > 0 => Some(n as usize),
        _ => None,
    };
    Command::Delete { line_no }
}

fn parse_save(rest: &str) -> Command {
    Command::Save {
        path: rest.split_whitespace().next().map(str::to_string),
    }
}
