#![forbid(unsafe_code)]

//! Screen layout constants.
//!
//! One screen is, top to bottom: a centered title row, a blank spacer, the
//! buffer area, a blank spacer, the command hint bar, and the prompt row.
//! Everything that needs the buffer-area height derives it from
//! [`visible_rows`]; there is no second derivation anywhere, so the
//! auto-scroll target is always exactly what gets drawn.

/// Rows of fixed chrome around the buffer area: title, spacer, hint spacer,
/// hint bar, prompt.
pub const CHROME_ROWS: usize = 5;

/// Title shown centered on the first row.
pub const TITLE: &str = "ZEPTEX EDITOR version 1.0";

/// Placeholder glyph for rows past the end of the buffer.
pub const PLACEHOLDER: &str = "~";

/// Prompt prefix for the pending command and status messages.
pub const PROMPT: &str = ": ";

/// Hint bar entries, spaced evenly across the terminal width.
pub const HINT_ENTRIES: [&str; 5] = [
    "i N TEXT -- insert line|",
    "d N -- delete line|",
    "\u{2191}/\u{2193} scroll|",
    "w <filename> -- save|",
    "q -- Quit|",
];

/// Number of buffer rows visible at the given terminal height.
///
/// Recomputed from the live terminal size on every use; never cached
/// across resizes. At least one row is always visible, however small the
/// terminal claims to be.
#[must_use]
pub fn visible_rows(height: u16) -> usize {
    (height as usize).saturating_sub(CHROME_ROWS).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_rows_subtracts_chrome() {
        assert_eq!(visible_rows(24), 19);
        assert_eq!(visible_rows(6), 1);
    }

    #[test]
    fn visible_rows_has_a_floor_of_one() {
        assert_eq!(visible_rows(5), 1);
        assert_eq!(visible_rows(0), 1);
    }
}
