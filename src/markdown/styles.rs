//! Styles for markdown rendering, one set per theme.

use ratatui::style::{Color, Modifier, Style};

/// Every style the renderer applies. Picked once per render from the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownStyles {
    pub body: Style,
    pub heading: Style,
    pub inline_code: Style,
    /// Fenced blocks without a language tag and indented blocks
    pub plain_code: Style,
    pub link: Style,
    pub link_url: Style,
    pub bullet: Style,
    pub quote: Style,
    pub rule: Style,
    pub table_border: Style,
    pub table_header: Style,
    /// `[n] copy` label above a highlighted block
    pub copy_label: Style,
    /// The same label while the block is selected
    pub copy_label_selected: Style,
}

impl MarkdownStyles {
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn dark() -> Self {
        Self {
            body: Style::new().fg(Color::Rgb(229, 231, 235)),
            heading: Style::new()
                .fg(Color::Rgb(96, 165, 250))
                .add_modifier(Modifier::BOLD),
            inline_code: Style::new().fg(Color::Rgb(244, 114, 182)),
            plain_code: Style::new().fg(Color::Rgb(156, 163, 175)),
            link: Style::new()
                .fg(Color::Rgb(96, 165, 250))
                .add_modifier(Modifier::UNDERLINED),
            link_url: Style::new().fg(Color::Rgb(107, 114, 128)),
            bullet: Style::new().fg(Color::Rgb(96, 165, 250)),
            quote: Style::new()
                .fg(Color::Rgb(156, 163, 175))
                .add_modifier(Modifier::ITALIC),
            rule: Style::new().fg(Color::Rgb(75, 85, 99)),
            table_border: Style::new().fg(Color::Rgb(75, 85, 99)),
            table_header: Style::new()
                .fg(Color::Rgb(96, 165, 250))
                .add_modifier(Modifier::BOLD),
            copy_label: Style::new().fg(Color::Rgb(156, 163, 175)),
            copy_label_selected: Style::new()
                .fg(Color::Rgb(17, 24, 39))
                .bg(Color::Rgb(96, 165, 250))
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn light() -> Self {
        Self {
            body: Style::new().fg(Color::Rgb(31, 41, 55)),
            heading: Style::new()
                .fg(Color::Rgb(37, 99, 235))
                .add_modifier(Modifier::BOLD),
            inline_code: Style::new().fg(Color::Rgb(190, 24, 93)),
            plain_code: Style::new().fg(Color::Rgb(75, 85, 99)),
            link: Style::new()
                .fg(Color::Rgb(37, 99, 235))
                .add_modifier(Modifier::UNDERLINED),
            link_url: Style::new().fg(Color::Rgb(107, 114, 128)),
            bullet: Style::new().fg(Color::Rgb(37, 99, 235)),
            quote: Style::new()
                .fg(Color::Rgb(107, 114, 128))
                .add_modifier(Modifier::ITALIC),
            rule: Style::new().fg(Color::Rgb(209, 213, 219)),
            table_border: Style::new().fg(Color::Rgb(209, 213, 219)),
            table_header: Style::new()
                .fg(Color::Rgb(37, 99, 235))
                .add_modifier(Modifier::BOLD),
            copy_label: Style::new().fg(Color::Rgb(107, 114, 128)),
            copy_label_selected: Style::new()
                .fg(Color::Rgb(255, 255, 255))
                .bg(Color::Rgb(37, 99, 235))
                .add_modifier(Modifier::BOLD),
        }
    }
}
