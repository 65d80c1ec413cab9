//! Vertical layout of the single screen.

use ratatui::layout::{Constraint, Layout, Rect};

/// Widest the content column gets; wider terminals get side margins.
pub const MAX_COLUMN_WIDTH: u16 = 100;

/// Question rows shown before the editor scrolls.
pub const MAX_QUESTION_ROWS: u16 = 6;

/// Areas for each section, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub question: Rect,
    /// Zero height when there is no error
    pub error: Rect,
    pub actions: Rect,
    pub answer: Rect,
    pub footer: Rect,
}

/// Center a column of at most [`MAX_COLUMN_WIDTH`] in `area`.
pub fn content_column(area: Rect) -> Rect {
    let width = area.width.min(MAX_COLUMN_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Lay out the screen. `question_lines` sizes the question box (bordered).
pub fn screen_layout(area: Rect, question_lines: usize, has_error: bool) -> ScreenLayout {
    let column = content_column(area);
    let question_rows = (question_lines.max(1) as u16).min(MAX_QUESTION_ROWS);

    let [header, question, error, actions, answer, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(question_rows + 2),
        Constraint::Length(u16::from(has_error)),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(column);

    ScreenLayout {
        header,
        question,
        error,
        actions,
        answer,
        footer,
    }
}
