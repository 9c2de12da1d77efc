#![forbid(unsafe_code)]

//! Screen image storage.
//!
//! A [`ScreenImage`] is the complete, final picture of one frame: exactly
//! `height` rows of text, each clipped to `width` display columns. It holds
//! no terminal state and no escape sequences; emphasis is a per-row flag the
//! presenter turns into styling.
//!
//! # Invariants
//!
//! 1. `rows().len() == height` exactly, padded with blank rows if needed.
//! 2. No row is wider than `width` display columns.
//!
//! Because the image derives `PartialEq`, render idempotence is a plain
//! equality assertion in tests.

use unicode_width::UnicodeWidthChar;

/// One screen row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The row text, already clipped to the screen width.
    pub text: String,
    /// Whether the presenter should draw this row emphasized (bold/bright).
    pub emphasized: bool,
}

impl Row {
    /// An ordinary row.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: false,
        }
    }

    /// An emphasized row (title, hint bar).
    #[must_use]
    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: true,
        }
    }
}

/// A complete frame: `height` rows clipped to `width` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenImage {
    width: u16,
    height: u16,
    rows: Vec<Row>,
}

impl ScreenImage {
    /// Build an image from rendered rows, enforcing the invariants: the row
    /// list is truncated or blank-padded to `height`, and each row is
    /// clipped to `width` display columns.
    #[must_use]
    pub fn from_rows(width: u16, height: u16, mut rows: Vec<Row>) -> Self {
        rows.truncate(height as usize);
        while rows.len() < height as usize {
            rows.push(Row::plain(String::new()));
        }
        for row in &mut rows {
            clip_in_place(&mut row.text, width as usize);
        }
        Self {
            width,
            height,
            rows,
        }
    }

    /// Image width in columns.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Image height in rows.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

/// Truncate `text` so its display width does not exceed `width` columns.
fn clip_in_place(text: &mut String, width: usize) {
    let mut used = 0usize;
    for (idx, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            text.truncate(idx);
            return;
        }
        used += w;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_missing_rows() {
        let image = ScreenImage::from_rows(10, 4, vec![Row::plain("one")]);
        assert_eq!(image.rows().len(), 4);
        assert_eq!(image.rows()[3], Row::plain(""));
    }

    #[test]
    fn truncates_extra_rows() {
        let rows = (0..10).map(|i| Row::plain(format!("{i}"))).collect();
        let image = ScreenImage::from_rows(10, 3, rows);
        assert_eq!(image.rows().len(), 3);
        assert_eq!(image.rows()[2].text, "2");
    }

    #[test]
    fn clips_rows_to_width() {
        let image = ScreenImage::from_rows(5, 1, vec![Row::plain("abcdefgh")]);
        assert_eq!(image.rows()[0].text, "abcde");
    }

    #[test]
    fn clip_respects_display_width() {
        // The arrows in the hint bar are narrow but multi-byte.
        let mut text = "\u{2191}/\u{2193} scroll".to_string();
        clip_in_place(&mut text, 4);
        assert_eq!(text, "\u{2191}/\u{2193} ");
    }

    #[test]
    fn emphasis_survives() {
        let image = ScreenImage::from_rows(10, 1, vec![Row::emphasized("TITLE")]);
        assert!(image.rows()[0].emphasized);
    }
}
