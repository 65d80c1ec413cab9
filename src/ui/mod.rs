//! UI rendering for the chat screen.
//!
//! One screen, top to bottom: header with the theme toggle hint, the
//! question box, an error line (only when there is an error), action hints
//! or the loading spinner, the answer panel, and the footer.

mod answer;
mod footer;
mod header;
mod helpers;
mod layout;
mod question;
mod theme;

pub use answer::PLACEHOLDER as ANSWER_PLACEHOLDER;
pub use footer::FOOTER_TEXT;
pub use header::{theme_hint, TITLE};
pub use helpers::{spinner_frame, SPINNER_FRAMES};
pub use layout::{content_column, screen_layout, ScreenLayout};
pub use question::{LOADING_LABEL, PLACEHOLDER as QUESTION_PLACEHOLDER, SUBMIT_LABEL};
pub use theme::{palette, Palette, DARK, LIGHT};

use ratatui::{
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::App;

/// Draw the whole screen. Layout-dependent scroll limits are written back
/// to `app`.
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = palette(app.session.dark_mode());
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let error = app.session.error_message();
    let layout = screen_layout(area, app.input.line_count(), !error.is_empty());

    header::render_header(frame, layout.header, app.session.dark_mode(), palette);
    question::render_question(frame, layout.question, app, palette);
    question::render_error(frame, layout.error, error, palette);
    question::render_actions(frame, layout.actions, app, palette);
    answer::render_answer(frame, layout.answer, app, palette);
    footer::render_footer(frame, layout.footer, app.notice.as_ref(), palette);
}
