//! Application state and logic for the TUI.
//!
//! [`App`] is the chat session controller. It owns the [`Session`], the
//! question editor and the derived answer view, and is only ever touched by
//! the UI loop. Requests run on spawned tasks that report back through
//! [`AppMessage`].

mod actions;
mod handlers;
mod keys;
mod messages;

pub use keys::{command_for, Command};
pub use messages::AppMessage;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::gemini::GeminiClient;
use crate::markdown::RenderedAnswer;
use crate::session::Session;
use crate::traits::ClipboardProvider;
use crate::widgets::QuestionInput;

/// Ticks a notice stays on screen (ticks are [`TICK_RATE_MS`] apart).
pub const NOTICE_TICKS: u64 = 25;

/// Interval between UI ticks, in milliseconds.
pub const TICK_RATE_MS: u64 = 80;

/// Lines moved by PageUp/PageDown.
pub const PAGE_SCROLL: u16 = 10;

/// A transient line in the footer (copy confirmations, clipboard errors).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
    /// Tick at which the notice disappears
    pub expires_at: u64,
}

pub struct App {
    pub session: Session,
    pub input: QuestionInput,
    pub client: Arc<GeminiClient>,
    pub clipboard: Box<dyn ClipboardProvider>,
    /// `session.answer()` rendered for the current theme
    pub rendered: RenderedAnswer,
    /// 1-based index of the selected copyable block
    pub selected_block: Option<usize>,
    /// First visible row of the wrapped answer
    pub answer_scroll: u16,
    /// Inner width of the answer panel at the last draw (0 before the first)
    pub answer_width: u16,
    /// Largest useful `answer_scroll`, recomputed on every draw
    pub answer_max_scroll: u16,
    pub notice: Option<Notice>,
    pub tick_count: u64,
    pub needs_redraw: bool,
    pub should_quit: bool,
    /// Id of the request whose answer will be applied
    pub in_flight: Option<u64>,
    next_request_id: u64,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    pub fn new(client: GeminiClient, clipboard: Box<dyn ClipboardProvider>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            session: Session::new(),
            input: QuestionInput::new(),
            client: Arc::new(client),
            clipboard,
            rendered: RenderedAnswer::default(),
            selected_block: None,
            answer_scroll: 0,
            answer_width: 0,
            answer_max_scroll: 0,
            notice: None,
            tick_count: 0,
            needs_redraw: true,
            should_quit: false,
            in_flight: None,
            next_request_id: 0,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance animations and expire the notice.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.session.loading() {
            self.mark_dirty();
        }
        if self
            .notice
            .as_ref()
            .is_some_and(|notice| self.tick_count >= notice.expires_at)
        {
            self.notice = None;
            self.mark_dirty();
        }
    }

    pub fn set_notice(&mut self, text: impl Into<String>, is_error: bool) {
        self.notice = Some(Notice {
            text: text.into(),
            is_error,
            expires_at: self.tick_count + NOTICE_TICKS,
        });
        self.mark_dirty();
    }

    /// Re-render the answer after it or the theme changed.
    fn refresh_answer(&mut self) {
        self.rendered =
            crate::markdown::render_answer(self.session.answer(), self.session.dark_mode());
        if self
            .selected_block
            .is_some_and(|index| index > self.rendered.code_blocks.len())
        {
            self.selected_block = None;
        }
    }

    fn allocate_request_id(&mut self) -> u64 {
        self.next_request_id += 1;
        self.next_request_id
    }

    /// Push the editor's text into the session.
    fn sync_question(&mut self) {
        self.session.set_question(self.input.content());
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::adapters::{MockClipboard, MockHttpClient};
    use crate::config::ChatConfig;

    pub fn app_with(http: &MockHttpClient, clipboard: &MockClipboard) -> App {
        let config = ChatConfig::default()
            .with_api_key("test-key")
            .with_base_url("https://api.test");
        let client = GeminiClient::with_http_client(config, Arc::new(http.clone()));
        App::new(client, Box::new(clipboard.clone()))
    }

    pub fn app() -> App {
        app_with(&MockHttpClient::new(), &MockClipboard::new())
    }
}
