//! Terminal ownership for the chat UI.
//!
//! [`TerminalManager`] puts the terminal into TUI mode on creation and
//! restores it on drop, so every exit path (normal return, `?` error, panic
//! unwinding) leaves the user's shell usable.
//!
//! ```no_run
//! use chatbot::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     manager.terminal().draw(|frame| {
//!         frame.render_widget("Chatbot AI", frame.area());
//!     })?;
//!     manager.restore()
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Owns the ratatui terminal and undoes TUI mode when dropped.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl TerminalManager {
    /// Enter TUI mode and clear the screen.
    pub fn new() -> Result<Self> {
        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;
        if !setup::push_keyboard_enhancements(&mut stdout) {
            tracing::debug!("Keyboard enhancements not available");
        }

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal now. Later calls, and the drop, are no-ops.
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        setup::pop_keyboard_enhancements(self.terminal.backend_mut());
        leave_tui_mode(self.terminal.backend_mut());
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        if !self.restored {
            self.restored = true;
            setup::pop_keyboard_enhancements(self.terminal.backend_mut());
            leave_tui_mode(self.terminal.backend_mut());
        }
    }
}
