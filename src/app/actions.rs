//! User-triggered operations: submit, clear, toggle theme, copy, scroll.

use tracing::{debug, error, info};

use crate::clipboard::{copied_notice, copy_block_at};
use crate::error::{ChatError, GeminiError};
use crate::session::SubmitOutcome;

use super::{App, AppMessage, PAGE_SCROLL};

impl App {
    /// Submit the current question.
    ///
    /// A blank question only sets the validation message. While a request is
    /// in flight this does nothing. Otherwise the previous answer is cleared
    /// and one request is spawned; its result comes back as
    /// [`AppMessage::AnswerReady`].
    pub fn submit(&mut self) {
        self.sync_question();
        self.mark_dirty();

        let question = match self.session.begin_submit() {
            SubmitOutcome::Accepted(question) => question,
            SubmitOutcome::Rejected(err) => {
                debug!(error = %err, "Submit rejected");
                return;
            }
            SubmitOutcome::Ignored => {
                debug!("Submit ignored, request already in flight");
                return;
            }
        };

        let request_id = self.allocate_request_id();
        self.in_flight = Some(request_id);
        self.answer_scroll = 0;
        self.selected_block = None;
        self.refresh_answer();

        info!(request_id, question_len = question.len(), "Submitting question");

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let outcome = client.ask(&question).await.map_err(|err| {
                log_request_failure(request_id, &err);
                ChatError::from_gemini(&err)
            });
            if tx.send(AppMessage::AnswerReady { request_id, outcome }).is_err() {
                debug!(request_id, "UI loop gone, dropping answer");
            }
        });
    }

    /// Reset question, answer and error. A request still in flight keeps
    /// running and its answer is applied when it arrives.
    pub fn clear(&mut self) {
        if let Some(request_id) = self.in_flight {
            debug!(request_id, "Clearing with request in flight");
        }
        self.session.clear();
        self.input.clear();
        self.answer_scroll = 0;
        self.selected_block = None;
        self.notice = None;
        self.refresh_answer();
        self.mark_dirty();
    }

    pub fn toggle_theme(&mut self) {
        self.session.toggle_theme();
        debug!(dark_mode = self.session.dark_mode(), "Theme toggled");
        self.refresh_answer();
        self.mark_dirty();
    }

    /// Copy code block `index` (1-based) and select it.
    pub fn copy_block(&mut self, index: usize) {
        match copy_block_at(self.clipboard.as_mut(), &self.rendered, index) {
            Ok(()) => {
                self.selected_block = Some(index);
                self.set_notice(copied_notice(index), false);
            }
            Err(err) => self.set_notice(err.to_string(), true),
        }
    }

    /// Copy the selected block, or the first one if none is selected.
    pub fn copy_selected_block(&mut self) {
        self.copy_block(self.selected_block.unwrap_or(1));
    }

    pub fn select_next_block(&mut self) {
        let count = self.rendered.code_blocks.len();
        if count == 0 {
            return;
        }
        let next = match self.selected_block {
            Some(index) if index < count => index + 1,
            _ => 1,
        };
        self.select_block(next);
    }

    pub fn select_previous_block(&mut self) {
        let count = self.rendered.code_blocks.len();
        if count == 0 {
            return;
        }
        let previous = match self.selected_block {
            Some(index) if index > 1 => index - 1,
            _ => count,
        };
        self.select_block(previous);
    }

    fn select_block(&mut self, index: usize) {
        self.selected_block = Some(index);
        if let Some(block) = self.rendered.block(index) {
            let row = self.rendered.wrapped_row_of(block.line, self.answer_width);
            self.answer_scroll = u16::try_from(row).unwrap_or(u16::MAX);
        }
        self.mark_dirty();
    }

    pub fn clear_selection(&mut self) {
        if self.selected_block.take().is_some() {
            self.mark_dirty();
        }
    }

    pub fn scroll_answer_up(&mut self, lines: u16) {
        self.answer_scroll = self.answer_scroll.saturating_sub(lines);
        self.mark_dirty();
    }

    /// Scroll down, stopping once the last wrapped row is on screen.
    pub fn scroll_answer_down(&mut self, lines: u16) {
        self.answer_scroll = self
            .answer_scroll
            .saturating_add(lines)
            .min(self.answer_max_scroll);
        self.mark_dirty();
    }

    pub fn page_up(&mut self) {
        self.scroll_answer_up(PAGE_SCROLL);
    }

    pub fn page_down(&mut self) {
        self.scroll_answer_down(PAGE_SCROLL);
    }
}

fn log_request_failure(request_id: u64, err: &GeminiError) {
    match err {
        GeminiError::Api { status, body, .. } => {
            error!(request_id, status, %err, "generateContent failed");
            debug!(request_id, body = %body, "Error response body");
        }
        _ => error!(request_id, %err, "generateContent failed"),
    }
}
