//! Clipboard errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The system clipboard could not be opened (no display, permission denied).
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard was opened but rejected the write.
    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),

    /// The requested code block does not exist.
    #[error("No code block {0} to copy")]
    NoSuchBlock(usize),
}
