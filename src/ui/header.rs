use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::key_hint;
use super::theme::Palette;

pub const TITLE: &str = "Chatbot AI";

/// The mode the toggle would switch to.
pub fn theme_hint(dark_mode: bool) -> &'static str {
    if dark_mode {
        "Light Mode"
    } else {
        "Dark Mode"
    }
}

pub fn render_header(frame: &mut Frame, area: Rect, dark_mode: bool, palette: &Palette) {
    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, area);

    let hint = Paragraph::new(Line::from(key_hint("Ctrl+T", theme_hint(dark_mode), palette)))
        .alignment(Alignment::Right);
    frame.render_widget(hint, area);
}
