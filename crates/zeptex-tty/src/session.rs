#![forbid(unsafe_code)]

//! Terminal session lifecycle guard.
//!
//! RAII-based terminal lifecycle management that ensures cleanup even on
//! panic. The guard owns raw-mode entry/exit and tracks the terminal state
//! changes it made.
//!
//! # Lifecycle Guarantees
//!
//! 1. Creating a session enters raw mode, switches to the alternate screen
//!    and hides the cursor.
//! 2. Drop restores everything in reverse order: show cursor, leave the
//!    alternate screen, exit raw mode, flush.
//! 3. A once-installed panic hook performs the same best-effort cleanup
//!    before the panic message prints, so a crash never leaves the shell
//!    on the alternate screen with a hidden cursor.
//! 4. On unix, SIGINT/SIGTERM run the cleanup and exit with `128 + signo`;
//!    SIGWINCH sets a level-triggered resize flag the editor loop polls.
//!
//! # Contract
//!
//! Only one `TtySession` should exist at a time; creating more than one
//! causes undefined terminal behavior.

use std::io::{self, Write};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(unix)]
use signal_hook::consts::signal::{SIGINT, SIGTERM, SIGWINCH};
#[cfg(unix)]
use signal_hook::iterator::Signals;

/// A terminal session that manages raw mode and cleanup.
#[derive(Debug)]
pub struct TtySession {
    resize: Arc<AtomicBool>,
    alternate_screen_enabled: bool,
    #[cfg(unix)]
    signal_guard: Option<SignalGuard>,
}

impl TtySession {
    /// Enter raw mode, switch to the alternate screen, and hide the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled or the escape
    /// sequences cannot be written.
    pub fn new() -> io::Result<Self> {
        install_panic_hook();

        crossterm::terminal::enable_raw_mode()?;
        #[cfg(feature = "tracing")]
        tracing::info!("terminal raw mode enabled");

        let resize = Arc::new(AtomicBool::new(false));
        let mut session = Self {
            resize: Arc::clone(&resize),
            alternate_screen_enabled: false,
            #[cfg(unix)]
            signal_guard: None,
        };

        let mut stdout = io::stdout();
        crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
        session.alternate_screen_enabled = true;
        #[cfg(feature = "tracing")]
        tracing::info!("alternate screen enabled");

        crossterm::execute!(stdout, crossterm::cursor::Hide)?;

        #[cfg(unix)]
        {
            session.signal_guard = Some(SignalGuard::new(resize)?);
        }

        Ok(session)
    }

    /// Get the current terminal size (columns, rows).
    ///
    /// # Errors
    ///
    /// Returns an error if the size query fails.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }

    /// The level-triggered resize flag, shared with the signal handler.
    #[must_use]
    pub fn resize_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.resize)
    }

    /// Consume the resize flag: returns true if a resize was pending and
    /// clears it.
    pub fn take_resize(&self) -> bool {
        self.resize.swap(false, Ordering::SeqCst)
    }

    /// Cleanup helper (shared between drop and the signal path).
    fn cleanup(&mut self) {
        #[cfg(unix)]
        let _ = self.signal_guard.take();

        let mut stdout = io::stdout();

        // Always show the cursor before leaving
        let _ = crossterm::execute!(stdout, crossterm::cursor::Show);

        if self.alternate_screen_enabled {
            let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
            #[cfg(feature = "tracing")]
            tracing::info!("alternate screen disabled");
        }

        // Exit raw mode last
        let _ = crossterm::terminal::disable_raw_mode();
        #[cfg(feature = "tracing")]
        tracing::info!("terminal raw mode disabled");

        let _ = stdout.flush();
    }
}

impl Drop for TtySession {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_cleanup();
            previous(info);
        }));
    });
}

fn best_effort_cleanup() {
    let mut stdout = io::stdout();
    let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
    let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = stdout.flush();
}

#[cfg(unix)]
#[derive(Debug)]
struct SignalGuard {
    handle: signal_hook::iterator::Handle,
    thread: Option<std::thread::JoinHandle<()>>,
}

#[cfg(unix)]
impl SignalGuard {
    fn new(resize: Arc<AtomicBool>) -> io::Result<Self> {
        let mut signals = Signals::new([SIGINT, SIGTERM, SIGWINCH]).map_err(io::Error::other)?;
        let handle = signals.handle();
        let thread = std::thread::spawn(move || {
            for signal in signals.forever() {
                match signal {
                    SIGWINCH => {
                        resize.store(true, Ordering::SeqCst);
                        #[cfg(feature = "tracing")]
                        tracing::debug!("SIGWINCH received");
                    }
                    SIGINT | SIGTERM => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!("termination signal received, cleaning up");
                        best_effort_cleanup();
                        std::process::exit(128 + signal);
                    }
                    _ => {}
                }
            }
        });
        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

#[cfg(unix)]
impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
