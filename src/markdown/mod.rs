//! Markdown rendering for the answer panel.
//!
//! Converts the answer text to styled ratatui Lines. Fenced code blocks that
//! carry a language tag are syntax highlighted and collected as
//! [`CodeBlock`]s so the UI can offer to copy them; untagged blocks and
//! inline code render as plain monospace text.
//!
//! Output is recomputed only when the answer or the theme changes, so there
//! is no memoization layer here.

pub mod highlight;
mod styles;

pub use styles::MarkdownStyles;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

/// Width of the line drawn for `---`.
const RULE_WIDTH: usize = 24;

/// A fenced code block with a language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// 1-based position among copyable blocks
    pub index: usize,
    /// The tag after the opening fence (`rust` in ```` ```rust ````)
    pub language: String,
    /// Block contents exactly as written, including the final newline
    pub text: String,
    /// Index into [`RenderedAnswer::lines`] of the block's copy label
    pub line: usize,
}

/// The answer rendered for display.
#[derive(Debug, Clone, Default)]
pub struct RenderedAnswer {
    pub lines: Vec<Line<'static>>,
    pub code_blocks: Vec<CodeBlock>,
}

impl RenderedAnswer {
    /// Copyable block by 1-based index.
    pub fn block(&self, index: usize) -> Option<&CodeBlock> {
        index
            .checked_sub(1)
            .and_then(|i| self.code_blocks.get(i))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Screen rows the answer takes when wrapped to `width` cells.
    pub fn wrapped_height(&self, width: u16) -> usize {
        wrapped_rows(&self.lines, width)
    }

    /// Screen row at which line `line` starts when wrapped to `width`.
    pub fn wrapped_row_of(&self, line: usize, width: u16) -> usize {
        wrapped_rows(&self.lines[..line.min(self.lines.len())], width)
    }
}

fn wrapped_rows(lines: &[Line<'static>], width: u16) -> usize {
    if width == 0 {
        return lines.len();
    }
    Paragraph::new(lines.to_vec())
        .wrap(Wrap { trim: false })
        .line_count(width)
}

/// The `[n] copy` label shown above a highlighted block.
pub fn copy_label(block: &CodeBlock, style: Style) -> Line<'static> {
    Line::from(Span::styled(
        format!("[{}] copy · {}", block.index, block.language),
        style,
    ))
}

/// Render markdown answer text.
///
/// Empty input renders to no lines so the caller can show its own
/// placeholder.
pub fn render_answer(text: &str, dark_mode: bool) -> RenderedAnswer {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut renderer = Renderer::new(MarkdownStyles::for_mode(dark_mode), dark_mode);
    for event in Parser::new_ext(text, options) {
        renderer.handle(event);
    }
    renderer.finish()
}

struct PendingCode {
    language: Option<String>,
    text: String,
}

#[derive(Default)]
struct TableState {
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    cell: String,
}

struct Renderer {
    styles: MarkdownStyles,
    dark_mode: bool,
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    style_stack: Vec<Style>,
    /// One entry per open list: `Some(next number)` for ordered lists
    list_stack: Vec<Option<u64>>,
    code: Option<PendingCode>,
    link_url: Option<String>,
    link_text: String,
    table: Option<TableState>,
    code_blocks: Vec<CodeBlock>,
}

impl Renderer {
    fn new(styles: MarkdownStyles, dark_mode: bool) -> Self {
        Self {
            styles,
            dark_mode,
            lines: Vec::new(),
            spans: Vec::new(),
            style_stack: vec![styles.body],
            list_stack: Vec::new(),
            code: None,
            link_url: None,
            link_text: String::new(),
            table: None,
            code_blocks: Vec::new(),
        }
    }

    fn current_style(&self) -> Style {
        self.style_stack.last().copied().unwrap_or(self.styles.body)
    }

    fn push_modifier(&mut self, modifier: Modifier) {
        let style = self.current_style().add_modifier(modifier);
        self.style_stack.push(style);
    }

    fn pop_style(&mut self) {
        if self.style_stack.len() > 1 {
            self.style_stack.pop();
        }
    }

    fn flush(&mut self) {
        if !self.spans.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.spans)));
        }
    }

    /// Blank separator line before a new block, never doubled and never at
    /// the top.
    fn gap(&mut self) {
        let last_blank = self
            .lines
            .last()
            .map(|line| line.spans.iter().all(|s| s.content.is_empty()));
        if last_blank == Some(false) {
            self.lines.push(Line::default());
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                if let Some(table) = self.table.as_mut() {
                    table.cell.push_str(&code);
                } else {
                    self.spans
                        .push(Span::styled(code.to_string(), self.styles.inline_code));
                }
            }
            Event::Html(html) | Event::InlineHtml(html) => self.text(&html),
            Event::SoftBreak => {
                if let Some(table) = self.table.as_mut() {
                    table.cell.push(' ');
                } else {
                    let style = self.current_style();
                    self.spans.push(Span::styled(" ", style));
                }
            }
            Event::HardBreak => {
                if let Some(table) = self.table.as_mut() {
                    table.cell.push(' ');
                } else {
                    self.flush();
                }
            }
            Event::Rule => {
                self.flush();
                self.gap();
                self.lines.push(Line::from(Span::styled(
                    "─".repeat(RULE_WIDTH),
                    self.styles.rule,
                )));
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                // Inside a list item the text continues after the bullet.
                if self.list_stack.is_empty() {
                    self.flush();
                    self.gap();
                }
            }
            Tag::Heading { .. } => {
                self.flush();
                self.gap();
                self.style_stack.push(self.styles.heading);
            }
            Tag::BlockQuote(_) => {
                self.flush();
                self.gap();
                self.style_stack.push(self.styles.quote);
            }
            Tag::CodeBlock(kind) => {
                self.flush();
                self.gap();
                let language = match kind {
                    CodeBlockKind::Fenced(info) => {
                        info.split_whitespace().next().map(str::to_string)
                    }
                    CodeBlockKind::Indented => None,
                };
                self.code = Some(PendingCode {
                    language,
                    text: String::new(),
                });
            }
            Tag::List(start) => {
                self.flush();
                if self.list_stack.is_empty() {
                    self.gap();
                }
                self.list_stack.push(start);
            }
            Tag::Item => {
                self.flush();
                let depth = self.list_stack.len().saturating_sub(1);
                let marker = match self.list_stack.last_mut() {
                    Some(Some(number)) => {
                        let marker = format!("{}. ", number);
                        *number += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                self.spans.push(Span::styled(
                    format!("{}{}", "  ".repeat(depth), marker),
                    self.styles.bullet,
                ));
            }
            Tag::Emphasis => self.push_modifier(Modifier::ITALIC),
            Tag::Strong => self.push_modifier(Modifier::BOLD),
            Tag::Strikethrough => self.push_modifier(Modifier::CROSSED_OUT),
            Tag::Link { dest_url, .. } => {
                self.link_url = Some(dest_url.to_string());
                self.link_text.clear();
                let style = self.current_style().patch(self.styles.link);
                self.style_stack.push(style);
            }
            Tag::Table(_) => {
                self.flush();
                self.gap();
                self.table = Some(TableState::default());
            }
            Tag::TableHead | Tag::TableRow => {
                if let Some(table) = self.table.as_mut() {
                    table.row.clear();
                }
            }
            Tag::TableCell => {
                if let Some(table) = self.table.as_mut() {
                    table.cell.clear();
                }
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph | TagEnd::Item => self.flush(),
            TagEnd::Heading(_) | TagEnd::BlockQuote(_) => {
                self.flush();
                self.pop_style();
            }
            TagEnd::CodeBlock => {
                if let Some(code) = self.code.take() {
                    self.finish_code_block(code);
                }
            }
            TagEnd::List(_) => {
                self.flush();
                self.list_stack.pop();
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => self.pop_style(),
            TagEnd::Link => {
                self.pop_style();
                if let Some(url) = self.link_url.take() {
                    let text = std::mem::take(&mut self.link_text);
                    if !url.is_empty() && text != url {
                        self.spans
                            .push(Span::styled(format!(" ({})", url), self.styles.link_url));
                    }
                }
            }
            TagEnd::TableCell => {
                if let Some(table) = self.table.as_mut() {
                    let cell = std::mem::take(&mut table.cell);
                    table.row.push(cell);
                }
            }
            TagEnd::TableHead | TagEnd::TableRow => {
                if let Some(table) = self.table.as_mut() {
                    if !table.row.is_empty() {
                        let row = std::mem::take(&mut table.row);
                        table.rows.push(row);
                    }
                }
            }
            TagEnd::Table => {
                if let Some(table) = self.table.take() {
                    self.render_table(&table.rows);
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(code) = self.code.as_mut() {
            code.text.push_str(text);
            return;
        }
        if let Some(table) = self.table.as_mut() {
            table.cell.push_str(text);
            return;
        }
        if self.link_url.is_some() {
            self.link_text.push_str(text);
        }

        let style = self.current_style();
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                self.flush();
            }
            if !part.is_empty() {
                self.spans.push(Span::styled(part.to_string(), style));
            }
        }
    }

    fn finish_code_block(&mut self, code: PendingCode) {
        match code.language {
            Some(language) => {
                let block = CodeBlock {
                    index: self.code_blocks.len() + 1,
                    language,
                    text: code.text,
                    line: self.lines.len(),
                };
                self.lines.push(copy_label(&block, self.styles.copy_label));
                self.lines.extend(highlight::highlight_code(
                    &block.text,
                    &block.language,
                    self.dark_mode,
                    self.styles.plain_code,
                ));
                self.code_blocks.push(block);
            }
            None => {
                self.lines
                    .extend(highlight::plain_lines(&code.text, self.styles.plain_code));
            }
        }
    }

    fn render_table(&mut self, rows: &[Vec<String>]) {
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        if columns == 0 {
            return;
        }

        let mut widths = vec![3usize; columns];
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.trim().width());
            }
        }

        let border = self.styles.table_border;
        self.lines
            .push(Line::from(Span::styled(table_border(&widths, '┌', '┬', '┐'), border)));

        for (row_index, row) in rows.iter().enumerate() {
            let style = if row_index == 0 {
                self.styles.table_header
            } else {
                self.styles.body
            };
            let mut spans = vec![Span::styled("│", border)];
            for (i, width) in widths.iter().enumerate() {
                let content = row.get(i).map(|c| c.trim()).unwrap_or("");
                let padding = width.saturating_sub(content.width());
                spans.push(Span::styled(
                    format!(" {}{} ", content, " ".repeat(padding)),
                    style,
                ));
                spans.push(Span::styled("│", border));
            }
            self.lines.push(Line::from(spans));

            if row_index == 0 && rows.len() > 1 {
                self.lines
                    .push(Line::from(Span::styled(table_border(&widths, '├', '┼', '┤'), border)));
            }
        }

        self.lines
            .push(Line::from(Span::styled(table_border(&widths, '└', '┴', '┘'), border)));
    }

    fn finish(mut self) -> RenderedAnswer {
        self.flush();
        if let Some(code) = self.code.take() {
            self.finish_code_block(code);
        }
        while self
            .lines
            .last()
            .is_some_and(|line| line.spans.iter().all(|s| s.content.is_empty()))
        {
            self.lines.pop();
        }
        RenderedAnswer {
            lines: self.lines,
            code_blocks: self.code_blocks,
        }
    }
}

fn table_border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut border = String::new();
    border.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            border.push(mid);
        }
        border.push_str(&"─".repeat(width + 2));
    }
    border.push(right);
    border
}
