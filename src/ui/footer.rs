use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::Palette;
use crate::app::Notice;

pub const FOOTER_TEXT: &str = "Powered by Google Generative AI";

/// The footer line, replaced by the current notice while one is showing.
pub fn render_footer(frame: &mut Frame, area: Rect, notice: Option<&Notice>, palette: &Palette) {
    let line = match notice {
        Some(notice) => {
            let color = if notice.is_error {
                palette.error
            } else {
                palette.success
            };
            Line::from(Span::styled(notice.text.clone(), Style::default().fg(color)))
        }
        None => Line::from(Span::styled(FOOTER_TEXT, Style::default().fg(palette.dim))),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
