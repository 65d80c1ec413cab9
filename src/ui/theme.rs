//! Light and dark color palettes.

use ratatui::style::Color;

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    /// Placeholders, hints, footer
    pub dim: Color,
    /// Title and key names
    pub accent: Color,
    pub border: Color,
    /// Border of the question box while it can be submitted
    pub border_focus: Color,
    pub error: Color,
    pub success: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(249, 250, 251),
    text: Color::Rgb(17, 24, 39),
    dim: Color::Rgb(107, 114, 128),
    accent: Color::Rgb(37, 99, 235),
    border: Color::Rgb(209, 213, 219),
    border_focus: Color::Rgb(37, 99, 235),
    error: Color::Rgb(220, 38, 38),
    success: Color::Rgb(22, 163, 74),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(17, 24, 39),
    text: Color::Rgb(243, 244, 246),
    dim: Color::Rgb(156, 163, 175),
    accent: Color::Rgb(96, 165, 250),
    border: Color::Rgb(55, 65, 81),
    border_focus: Color::Rgb(96, 165, 250),
    error: Color::Rgb(248, 113, 113),
    success: Color::Rgb(74, 222, 128),
};

pub fn palette(dark_mode: bool) -> &'static Palette {
    if dark_mode {
        &DARK
    } else {
        &LIGHT
    }
}
