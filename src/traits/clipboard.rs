//! Clipboard trait abstraction.

use crate::error::ClipboardError;

/// Something that can receive text for the system clipboard.
///
/// Not `Send`: some platform clipboards must stay on the thread that opened
/// them, and the UI loop never moves the app across threads.
pub trait ClipboardProvider {
    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
