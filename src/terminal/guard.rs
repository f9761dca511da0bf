//! Terminal mode setup and teardown.

use crate::config::SurfaceConfig;
use crossterm::{
    cursor,
    event::DisableMouseCapture,
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use tracing::debug;

/// Puts the terminal in UI mode and restores it when dropped.
///
/// Each step records whether it succeeded, so a failure halfway through
/// [`TerminalGuard::enter`] still undoes the steps that did run.
#[derive(Debug)]
pub struct TerminalGuard {
    raw_mode: bool,
    alternate_screen: bool,
    cursor_hidden: bool,
}

impl TerminalGuard {
    /// Enter raw mode, the alternate screen (if configured) and hide the
    /// cursor.
    ///
    /// # Errors
    ///
    /// Returns the first failing terminal operation. Anything already
    /// changed has been restored by then.
    pub fn enter(config: &SurfaceConfig) -> io::Result<Self> {
        let mut guard = Self {
            raw_mode: false,
            alternate_screen: false,
            cursor_hidden: false,
        };

        terminal::enable_raw_mode()?;
        guard.raw_mode = true;

        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
            guard.alternate_screen = true;
        }
        execute!(stdout, cursor::Hide)?;
        guard.cursor_hidden = true;

        debug!(alternate_screen = config.alternate_screen, "terminal entered ui mode");
        Ok(guard)
    }

    /// Undo everything [`TerminalGuard::enter`] did. Safe to call twice.
    pub fn restore(&mut self) {
        let mut stdout = io::stdout();
        // Mouse capture is switched on by the surface, not by enter()
        let _ = execute!(stdout, DisableMouseCapture);
        if self.cursor_hidden {
            let _ = execute!(stdout, cursor::Show);
            self.cursor_hidden = false;
        }
        if self.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
            self.alternate_screen = false;
        }
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
            self.raw_mode = false;
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}
