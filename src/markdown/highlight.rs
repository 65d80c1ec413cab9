//! Syntax highlighting for tagged code blocks using syntect.

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Syntect theme used in dark mode.
pub const DARK_THEME: &str = "base16-ocean.dark";

/// Syntect theme used in light mode.
pub const LIGHT_THEME: &str = "InspiredGitHub";

struct HighlightAssets {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

// Loading the default syntaxes takes tens of milliseconds; do it once.
fn assets() -> &'static HighlightAssets {
    static ASSETS: OnceLock<HighlightAssets> = OnceLock::new();
    ASSETS.get_or_init(|| HighlightAssets {
        syntax_set: SyntaxSet::load_defaults_newlines(),
        theme_set: ThemeSet::load_defaults(),
    })
}

fn find_syntax<'a>(syntax_set: &'a SyntaxSet, language: &str) -> Option<&'a SyntaxReference> {
    if language.is_empty() {
        return None;
    }
    syntax_set
        .find_syntax_by_token(language)
        .or_else(|| syntax_set.find_syntax_by_extension(language))
}

fn theme(dark_mode: bool) -> Option<&'static Theme> {
    let name = if dark_mode { DARK_THEME } else { LIGHT_THEME };
    assets().theme_set.themes.get(name)
}

fn to_ratatui(style: syntect::highlighting::Style) -> Style {
    let fg = style.foreground;
    let mut out = Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b));
    if style.font_style.contains(FontStyle::BOLD) {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        out = out.add_modifier(Modifier::ITALIC);
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        out = out.add_modifier(Modifier::UNDERLINED);
    }
    out
}

/// Split code into one unstyled line per source line.
pub fn plain_lines(code: &str, style: Style) -> Vec<Line<'static>> {
    code.lines()
        .map(|line| Line::from(Span::styled(line.to_string(), style)))
        .collect()
}

/// Highlight `code` as `language`, one [`Line`] per source line.
///
/// Unknown languages, and any highlighting failure, fall back to
/// [`plain_lines`] with `fallback`.
pub fn highlight_code(
    code: &str,
    language: &str,
    dark_mode: bool,
    fallback: Style,
) -> Vec<Line<'static>> {
    let assets = assets();
    let (Some(syntax), Some(theme)) = (find_syntax(&assets.syntax_set, language), theme(dark_mode))
    else {
        return plain_lines(code, fallback);
    };

    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut lines = Vec::new();

    for source_line in LinesWithEndings::from(code) {
        let Ok(ranges) = highlighter.highlight_line(source_line, &assets.syntax_set) else {
            tracing::debug!(language, "Highlighting failed, rendering block as plain text");
            return plain_lines(code, fallback);
        };

        let spans: Vec<Span<'static>> = ranges
            .into_iter()
            .filter_map(|(style, text)| {
                let text = text.trim_end_matches(['\n', '\r']);
                if text.is_empty() {
                    None
                } else {
                    Some(Span::styled(text.to_string(), to_ratatui(style)))
                }
            })
            .collect();
        lines.push(Line::from(spans));
    }

    lines
}
