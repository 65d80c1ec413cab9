use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthChar;

/// Multi-line text editor for the question.
///
/// The cursor is a byte offset into `content` and always sits on a char
/// boundary. Columns are measured in terminal cells, so wide characters
/// take two.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionInput {
    content: String,
    cursor: usize,
}

impl QuestionInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Byte offset of the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Replace the content and put the cursor at the end.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.content.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Insert pasted text, normalizing CRLF and lone CR line endings.
    pub fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.content.insert_str(self.cursor, &normalized);
        self.cursor += normalized.len();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.content.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.content.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    /// Start of the current line.
    pub fn move_home(&mut self) {
        self.cursor = self.line_start(self.cursor);
    }

    /// End of the current line.
    pub fn move_end(&mut self) {
        self.cursor = self.line_end(self.cursor);
    }

    pub fn move_up(&mut self) {
        let start = self.line_start(self.cursor);
        if start == 0 {
            self.cursor = 0;
            return;
        }
        let column = self.column_of(start, self.cursor);
        let prev_start = self.line_start(start - 1);
        self.cursor = self.offset_at_column(prev_start, column);
    }

    pub fn move_down(&mut self) {
        let end = self.line_end(self.cursor);
        if end == self.content.len() {
            self.cursor = end;
            return;
        }
        let column = self.column_of(self.line_start(self.cursor), self.cursor);
        self.cursor = self.offset_at_column(end + 1, column);
    }

    /// Number of lines (an empty input has one).
    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }

    /// `(line, column)` of the cursor, column in terminal cells.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let line = self.content[..self.cursor].matches('\n').count();
        let column = self.column_of(self.line_start(self.cursor), self.cursor);
        (line, column)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.content[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.content[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    fn line_start(&self, offset: usize) -> usize {
        self.content[..offset].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(&self, offset: usize) -> usize {
        self.content[offset..]
            .find('\n')
            .map_or(self.content.len(), |i| offset + i)
    }

    fn column_of(&self, start: usize, offset: usize) -> usize {
        self.content[start..offset]
            .chars()
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    /// Byte offset on the line starting at `start` closest to `column`
    /// without passing it.
    fn offset_at_column(&self, start: usize, column: usize) -> usize {
        let end = self.line_end(start);
        let mut width = 0;
        for (i, c) in self.content[start..end].char_indices() {
            let w = c.width().unwrap_or(0);
            if width + w > column {
                return start + i;
            }
            width += w;
        }
        end
    }

    /// First visible line and column so the cursor stays inside a
    /// `width` x `height` viewport.
    pub fn scroll_for(&self, width: u16, height: u16) -> (usize, usize) {
        let (line, column) = self.cursor_line_col();
        let top = line.saturating_sub(height.saturating_sub(1) as usize);
        // One cell is kept free for the cursor block.
        let left = column.saturating_sub(width.saturating_sub(1) as usize);
        (top, left)
    }
}

/// Renders a [`QuestionInput`] into an area (no border; the caller draws
/// the surrounding block).
pub struct QuestionInputWidget<'a> {
    input: &'a QuestionInput,
    placeholder: &'a str,
    text_style: Style,
    placeholder_style: Style,
    show_cursor: bool,
}

impl<'a> QuestionInputWidget<'a> {
    pub fn new(input: &'a QuestionInput) -> Self {
        Self {
            input,
            placeholder: "",
            text_style: Style::default(),
            placeholder_style: Style::default(),
            show_cursor: true,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn text_style(mut self, style: Style) -> Self {
        self.text_style = style;
        self
    }

    pub fn placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    pub fn show_cursor(mut self, show: bool) -> Self {
        self.show_cursor = show;
        self
    }
}

impl Widget for QuestionInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let cursor_style = self.text_style.add_modifier(Modifier::REVERSED);

        if self.input.is_empty() {
            buf.set_stringn(
                area.x,
                area.y,
                self.placeholder,
                area.width as usize,
                self.placeholder_style,
            );
            if self.show_cursor {
                buf[(area.x, area.y)].set_style(cursor_style);
            }
            return;
        }

        let (top, left) = self.input.scroll_for(area.width, area.height);

        for (row, line) in self
            .input
            .content()
            .split('\n')
            .skip(top)
            .take(area.height as usize)
            .enumerate()
        {
            let y = area.y + row as u16;
            let mut column = 0usize;
            for c in line.chars() {
                let w = c.width().unwrap_or(0);
                if column < left {
                    column += w;
                    continue;
                }
                let x = column - left;
                if x + w > area.width as usize {
                    break;
                }
                buf.set_string(area.x + x as u16, y, c.to_string(), self.text_style);
                column += w;
            }
        }

        if self.show_cursor {
            let (line, column) = self.input.cursor_line_col();
            let x = column.saturating_sub(left);
            let y = line.saturating_sub(top);
            if x < area.width as usize && y < area.height as usize {
                buf[(area.x + x as u16, area.y + y as u16)].set_style(cursor_style);
            }
        }
    }
}
