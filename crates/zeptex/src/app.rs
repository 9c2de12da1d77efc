#![forbid(unsafe_code)]

//! The editor loop.
//!
//! Single-threaded and event-driven: each iteration consumes exactly one
//! inbound event (a keystroke byte or a resize notification) and redraws
//! the whole screen. All mutation happens synchronously inside the
//! iteration that received the event.

use std::io;

use zeptex_core::event::Event;
use zeptex_core::session::{EditorSession, Flow};
use zeptex_render::layout::visible_rows;
use zeptex_render::render;
use zeptex_tty::{EventSource, Presenter, TtySession};

use crate::cli::Opts;
use crate::fs::DiskStorage;

/// Run the editor until the user quits.
///
/// # Errors
///
/// Terminal setup failures and non-recoverable I/O errors on the terminal
/// itself. Buffer and file errors never end the session.
pub fn run(opts: Opts) -> io::Result<()> {
    let store = DiskStorage;
    let mut session = EditorSession::open(opts.file, opts.max_lines, &store);

    let tty = TtySession::new()?;
    let mut events = EventSource::new(tty.resize_flag());
    let mut presenter = Presenter::new(io::stdout());

    let (mut width, mut height) = tty.size()?;
    tracing::info!(width, height, lines = session.buffer().len(), "session started");
    present(&mut presenter, &session, width, height)?;

    loop {
        match events.next_event()? {
            Event::Resize {
                width: new_width,
                height: new_height,
            } => {
                width = new_width;
                height = new_height;
                session.handle_resize(visible_rows(height));
            }
            Event::Byte(byte) => {
                match session.handle_byte(byte, visible_rows(height), &store) {
                    Flow::Quit => break,
                    Flow::Continue => {}
                }
            }
        }
        present(&mut presenter, &session, width, height)?;
    }

    tracing::info!("session ended");
    drop(tty);
    Ok(())
}

fn present<W: io::Write>(
    presenter: &mut Presenter<W>,
    session: &EditorSession,
    width: u16,
    height: u16,
) -> io::Result<()> {
    let image = render(
        session.buffer(),
        session.viewport(),
        session.pending(),
        session.status(),
        width,
        height,
    );
    presenter.present(&image)
}
