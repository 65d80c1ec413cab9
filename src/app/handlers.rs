//! Message handling for the App.

use tracing::{debug, info};

use super::{App, AppMessage};

impl App {
    /// Apply a message from a spawned task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::AnswerReady {
                request_id,
                outcome,
            } => {
                if self.in_flight != Some(request_id) {
                    debug!(request_id, current = ?self.in_flight, "Dropping answer for unknown request");
                    return;
                }
                self.in_flight = None;

                let succeeded = outcome.is_ok();
                if self.session.complete(outcome) {
                    info!(request_id, succeeded, "Request completed");
                    self.answer_scroll = 0;
                    self.selected_block = None;
                    self.refresh_answer();
                    self.mark_dirty();
                }
            }
        }
    }
}
