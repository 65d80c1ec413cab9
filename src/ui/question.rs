use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::helpers::{key_hint, spinner_frame};
use super::theme::Palette;
use crate::app::App;
use crate::widgets::QuestionInputWidget;

pub const PLACEHOLDER: &str = "Ask anything...";
pub const SUBMIT_LABEL: &str = "Generate Answer";
pub const LOADING_LABEL: &str = "Generating...";

pub fn render_question(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let loading = app.session.loading();
    let border = if loading {
        palette.border
    } else {
        palette.border_focus
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(" Question ", Style::default().fg(palette.dim)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = QuestionInputWidget::new(&app.input)
        .placeholder(PLACEHOLDER)
        .text_style(Style::default().fg(palette.text))
        .placeholder_style(Style::default().fg(palette.dim));
    frame.render_widget(input, inner);
}

pub fn render_error(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    if area.height == 0 || message.is_empty() {
        return;
    }
    let line = Line::from(Span::styled(message.to_string(), Style::default().fg(palette.error)));
    frame.render_widget(Paragraph::new(line), area);
}

/// Submit hint (or spinner), clear hint, and code block hints when the
/// answer has copyable blocks.
pub fn render_actions(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut spans = Vec::new();

    if app.session.loading() {
        spans.push(Span::styled(
            format!("{} {}", spinner_frame(app.tick_count), LOADING_LABEL),
            Style::default().fg(palette.accent),
        ));
    } else {
        spans.extend(key_hint("Enter", SUBMIT_LABEL, palette));
    }

    spans.push(Span::raw("   "));
    spans.extend(key_hint("Ctrl+L", "Clear", palette));

    if !app.rendered.code_blocks.is_empty() {
        spans.push(Span::raw("   "));
        spans.extend(key_hint("Tab", "Select block", palette));
        spans.push(Span::raw("   "));
        spans.extend(key_hint("Ctrl+Y", "Copy", palette));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
