//! AppMessage enum for async communication within the application.

use crate::error::ChatError;

/// Messages sent back to the UI loop by spawned tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// A request finished. `request_id` identifies which submit it belongs
    /// to; completions for anything but the current request are dropped.
    AnswerReady {
        request_id: u64,
        outcome: Result<String, ChatError>,
    },
}
