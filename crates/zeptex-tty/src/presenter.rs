#![forbid(unsafe_code)]

//! Frame presenter.
//!
//! Writes a [`ScreenImage`] to the terminal as one buffered frame: home the
//! cursor, clear, emit every row, flush once. Emphasized rows are drawn
//! bold and bright white. There is no diffing; the screen is redrawn fully
//! on every accepted event.

use std::io::{self, BufWriter, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Attribute, Color, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use zeptex_render::ScreenImage;

/// Size of the internal write buffer.
const BUFFER_CAPACITY: usize = 16 * 1024;

/// Buffered full-frame writer.
pub struct Presenter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> Presenter<W> {
    /// Wrap a writer (normally stdout).
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(BUFFER_CAPACITY, writer),
        }
    }

    /// Write one complete frame and flush.
    ///
    /// # Errors
    ///
    /// Any I/O failure while writing or flushing.
    pub fn present(&mut self, image: &ScreenImage) -> io::Result<()> {
        crossterm::queue!(self.writer, MoveTo(0, 0), Clear(ClearType::All))?;
        for (index, row) in image.rows().iter().enumerate() {
            if index > 0 {
                self.writer.write_all(b"\r\n")?;
            }
            if row.emphasized {
                crossterm::queue!(
                    self.writer,
                    SetAttribute(Attribute::Bold),
                    SetForegroundColor(Color::White)
                )?;
                self.writer.write_all(row.text.as_bytes())?;
                crossterm::queue!(self.writer, SetAttribute(Attribute::Reset))?;
            } else {
                self.writer.write_all(row.text.as_bytes())?;
            }
        }
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zeptex_render::{Row, ScreenImage};

    fn present_to_vec(image: &ScreenImage) -> Vec<u8> {
        let mut out = Vec::new();
        let mut presenter = Presenter::new(&mut out);
        presenter.present(image).unwrap();
        drop(presenter);
        out
    }

    #[test]
    fn frame_contains_every_row_once() {
        let image = ScreenImage::from_rows(
            20,
            3,
            vec![Row::plain("first"), Row::plain("second"), Row::plain("third")],
        );
        let out = present_to_vec(&image);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("first"));
        assert!(text.contains("second"));
        assert!(text.contains("third"));
        assert_eq!(text.matches("\r\n").count(), 2);
    }

    #[test]
    fn emphasized_rows_are_styled_and_reset() {
        let image = ScreenImage::from_rows(20, 1, vec![Row::emphasized("TITLE")]);
        let text = String::from_utf8(present_to_vec(&image)).unwrap();
        let bold_at = text.find("\x1b[1m").expect("bold attribute");
        let title_at = text.find("TITLE").unwrap();
        let reset_at = text.find("\x1b[0m").expect("reset attribute");
        assert!(bold_at < title_at && title_at < reset_at);
    }

    #[test]
    fn two_presents_emit_identical_bytes() {
        let image = ScreenImage::from_rows(20, 2, vec![Row::plain("a"), Row::plain("b")]);
        assert_eq!(present_to_vec(&image), present_to_vec(&image));
    }
}
