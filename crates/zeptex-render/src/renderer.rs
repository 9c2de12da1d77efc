#![forbid(unsafe_code)]

//! The renderer: a pure function from editor state to a [`ScreenImage`].
//!
//! No mutable state lives here. Rendering the same inputs twice yields an
//! identical image; the viewport is clamped by the caller before rendering
//! and is never mutated by the renderer.

use unicode_width::UnicodeWidthStr;

use zeptex_core::line_buffer::LineBuffer;
use zeptex_core::viewport::Viewport;

use crate::layout::{HINT_ENTRIES, PLACEHOLDER, PROMPT, TITLE, visible_rows};
use crate::screen::{Row, ScreenImage};

/// Project the editor state onto a screen of `width` x `height` cells.
///
/// The prompt row shows the pending command as typed, or the status message
/// when one is set.
#[must_use]
pub fn render(
    buffer: &LineBuffer,
    viewport: &Viewport,
    pending: &str,
    status: Option<&str>,
    width: u16,
    height: u16,
) -> ScreenImage {
    let columns = width as usize;
    let buffer_rows = visible_rows(height);
    let mut rows = Vec::with_capacity(buffer_rows + crate::layout::CHROME_ROWS);

    rows.push(Row::emphasized(center(TITLE, columns)));
    rows.push(Row::plain(String::new()));

    for index in viewport.visible_range(buffer_rows) {
        match buffer.line(index + 1) {
            Some(text) => rows.push(Row::plain(format!("{:>3} | {}", index + 1, text))),
            None => rows.push(Row::plain(PLACEHOLDER)),
        }
    }

    rows.push(Row::plain(String::new()));
    rows.push(Row::emphasized(hint_bar(columns)));

    let prompt = match status {
        Some(message) => format!("{PROMPT}{message}"),
        None => format!("{PROMPT}{pending}"),
    };
    rows.push(Row::plain(prompt));

    ScreenImage::from_rows(width, height, rows)
}

/// Center `text` by left-padding with spaces; no trailing fill.
fn center(text: &str, columns: usize) -> String {
    let padding = columns.saturating_sub(text.width()) / 2;
    format!("{}{}", " ".repeat(padding), text)
}

/// Lay the hint entries out with even gaps across the width. When the
/// entries alone overflow the width, gaps collapse to a single space.
fn hint_bar(columns: usize) -> String {
    let total: usize = HINT_ENTRIES.iter().map(|entry| entry.width()).sum();
    let gaps = HINT_ENTRIES.len() - 1;
    let gap = if columns > total {
        (columns - total) / gaps
    } else {
        1
    };
    HINT_ENTRIES.join(&" ".repeat(gap))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_of(lines: &[&str]) -> LineBuffer {
        let mut buffer = LineBuffer::new();
        buffer.load(lines.iter().copied());
        buffer
    }

    #[test]
    fn rendering_is_idempotent() {
        let buffer = buffer_of(&["alpha", "beta"]);
        let viewport = Viewport::new();
        let first = render(&buffer, &viewport, "i 3 g", None, 80, 24);
        let second = render(&buffer, &viewport, "i 3 g", None, 80, 24);
        assert_eq!(first, second);
    }

    #[test]
    fn image_fills_the_terminal_exactly() {
        let image = render(&buffer_of(&[]), &Viewport::new(), "", None, 80, 24);
        assert_eq!(image.rows().len(), 24);
    }

    #[test]
    fn title_is_centered_and_emphasized() {
        let image = render(&buffer_of(&[]), &Viewport::new(), "", None, 80, 24);
        let title = &image.rows()[0];
        assert!(title.emphasized);
        assert_eq!(title.text.trim_start(), TITLE);
        let padding = title.text.len() - title.text.trim_start().len();
        assert_eq!(padding, (80 - TITLE.width()) / 2);
    }

    #[test]
    fn buffer_rows_have_gutters_and_placeholders() {
        let image = render(&buffer_of(&["hello"]), &Viewport::new(), "", None, 80, 10);
        assert_eq!(image.rows()[2].text, "  1 | hello");
        // Remaining buffer rows are end-of-buffer placeholders.
        for row in &image.rows()[3..7] {
            assert_eq!(row.text, PLACEHOLDER);
        }
    }

    #[test]
    fn scrolled_viewport_shows_later_lines() {
        let lines: Vec<String> = (1..=30).map(|i| format!("line {i}")).collect();
        let mut buffer = LineBuffer::new();
        buffer.load(lines);
        let mut viewport = Viewport::new();
        viewport.scroll_down(30, visible_rows(24));
        let image = render(&buffer, &viewport, "", None, 80, 24);
        assert_eq!(image.rows()[2].text, "  2 | line 2");
    }

    #[test]
    fn prompt_shows_pending_command() {
        let image = render(&buffer_of(&[]), &Viewport::new(), "i 1 hi", None, 80, 24);
        assert_eq!(image.rows()[23].text, ": i 1 hi");
    }

    #[test]
    fn prompt_shows_status_instead_when_set() {
        let image = render(
            &buffer_of(&[]),
            &Viewport::new(),
            "i 0 x",
            Some("Invalid line number. Use: i <line> <text>"),
            80,
            24,
        );
        assert_eq!(
            image.rows()[23].text,
            ": Invalid line number. Use: i <line> <text>"
        );
    }

    #[test]
    fn hint_bar_spreads_entries_evenly() {
        let bar = hint_bar(120);
        let total: usize = HINT_ENTRIES.iter().map(|e| e.width()).sum();
        let gap = (120 - total) / 4;
        assert!(gap > 0);
        assert_eq!(
            bar,
            HINT_ENTRIES.join(&" ".repeat(gap)),
        );
    }

    #[test]
    fn hint_bar_collapses_gaps_when_narrow() {
        let bar = hint_bar(10);
        assert_eq!(bar, HINT_ENTRIES.join(" "));
    }

    #[test]
    fn long_lines_are_clipped_to_width() {
        let long = "x".repeat(200);
        let image = render(&buffer_of(&[&long]), &Viewport::new(), "", None, 40, 10);
        assert_eq!(image.rows()[2].text.width(), 40);
    }

    #[test]
    fn tiny_terminal_still_renders() {
        let image = render(&buffer_of(&["a", "b"]), &Viewport::new(), "", None, 10, 3);
        assert_eq!(image.rows().len(), 3);
    }
}
