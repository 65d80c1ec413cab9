use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::Palette;
use crate::app::App;
use crate::markdown::{copy_label, MarkdownStyles};

pub const PLACEHOLDER: &str = "Your answer will appear here.";

/// Answer lines with the selected block's label highlighted.
pub fn answer_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = app.rendered.lines.clone();
    let selected = app
        .selected_block
        .and_then(|index| app.rendered.block(index));
    if let Some(block) = selected {
        if let Some(line) = lines.get_mut(block.line) {
            let styles = MarkdownStyles::for_mode(app.session.dark_mode());
            *line = copy_label(block, styles.copy_label_selected);
        }
    }
    lines
}

/// Draw the answer panel and record its inner width and scroll limit on
/// `app`.
pub fn render_answer(frame: &mut Frame, area: Rect, app: &mut App, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(" Answer ", Style::default().fg(palette.dim)));

    let inner = block.inner(area);
    app.answer_width = inner.width;
    let total_rows = app.rendered.wrapped_height(inner.width);
    app.answer_max_scroll =
        u16::try_from(total_rows.saturating_sub(inner.height as usize)).unwrap_or(u16::MAX);
    app.answer_scroll = app.answer_scroll.min(app.answer_max_scroll);

    if app.rendered.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(palette.dim),
        )))
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let paragraph = Paragraph::new(answer_lines(app))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.answer_scroll, 0));
    frame.render_widget(paragraph, area);
}
