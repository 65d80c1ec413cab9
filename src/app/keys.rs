//! Keyboard and paste handling.
//!
//! Keys are first mapped to a [`Command`] by [`command_for`], a pure function
//! of the key event, and then dispatched against the app.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use super::App;

/// Everything a key press can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    InsertChar(char),
    InsertNewline,
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,
    Submit,
    Clear,
    ToggleTheme,
    CopySelected,
    CopyBlock(usize),
    NextBlock,
    PreviousBlock,
    PageUp,
    PageDown,
    /// Quit, or drop the block selection when there is a question typed
    Escape,
    Quit,
}

/// Map a key press to a command.
pub fn command_for(key: &KeyEvent) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    let command = match key.code {
        KeyCode::Char('c') if ctrl => Command::Quit,
        KeyCode::Char('l') if ctrl => Command::Clear,
        KeyCode::Char('t') if ctrl => Command::ToggleTheme,
        KeyCode::Char('y') if ctrl => Command::CopySelected,
        KeyCode::Char('j') if ctrl => Command::InsertNewline,
        KeyCode::Char(c @ '1'..='9') if alt => Command::CopyBlock(c as usize - '0' as usize),
        KeyCode::Char(_) if ctrl || alt => return None,
        KeyCode::Char(c) => Command::InsertChar(c),
        KeyCode::Enter if shift || alt => Command::InsertNewline,
        KeyCode::Enter => Command::Submit,
        KeyCode::Backspace => Command::Backspace,
        KeyCode::Delete => Command::Delete,
        KeyCode::Left => Command::CursorLeft,
        KeyCode::Right => Command::CursorRight,
        KeyCode::Up => Command::CursorUp,
        KeyCode::Down => Command::CursorDown,
        KeyCode::Home => Command::CursorHome,
        KeyCode::End => Command::CursorEnd,
        KeyCode::Tab => Command::NextBlock,
        KeyCode::BackTab => Command::PreviousBlock,
        KeyCode::PageUp => Command::PageUp,
        KeyCode::PageDown => Command::PageDown,
        KeyCode::Esc => Command::Escape,
        _ => return None,
    };
    Some(command)
}

impl App {
    /// Handle one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Paste(text) => self.handle_paste(&text),
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                self.mark_dirty();
            }
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(command) = command_for(&key) else {
            return;
        };
        self.mark_dirty();
        self.run_command(command);
    }

    pub fn handle_paste(&mut self, text: &str) {
        self.input.insert_str(text);
        self.sync_question();
        self.mark_dirty();
    }

    pub fn run_command(&mut self, command: Command) {
        match command {
            Command::InsertChar(c) => self.edit(|input| input.insert_char(c)),
            Command::InsertNewline => self.edit(|input| input.insert_newline()),
            Command::Backspace => self.edit(|input| input.backspace()),
            Command::Delete => self.edit(|input| input.delete()),
            Command::CursorLeft => self.input.move_left(),
            Command::CursorRight => self.input.move_right(),
            Command::CursorUp => self.input.move_up(),
            Command::CursorDown => self.input.move_down(),
            Command::CursorHome => self.input.move_home(),
            Command::CursorEnd => self.input.move_end(),
            Command::Submit => self.submit(),
            Command::Clear => self.clear(),
            Command::ToggleTheme => self.toggle_theme(),
            Command::CopySelected => self.copy_selected_block(),
            Command::CopyBlock(index) => self.copy_block(index),
            Command::NextBlock => self.select_next_block(),
            Command::PreviousBlock => self.select_previous_block(),
            Command::PageUp => self.page_up(),
            Command::PageDown => self.page_down(),
            Command::Escape => {
                if self.input.is_empty() {
                    self.quit();
                } else {
                    self.clear_selection();
                }
            }
            Command::Quit => self.quit(),
        }
    }

    fn edit(&mut self, f: impl FnOnce(&mut crate::widgets::QuestionInput)) {
        f(&mut self.input);
        self.sync_question();
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app;
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn plain(code: KeyCode) -> KeyEvent {
        key(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(plain(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_command_mapping() {
        assert_eq!(command_for(&plain(KeyCode::Enter)), Some(Command::Submit));
        assert_eq!(
            command_for(&key(KeyCode::Enter, KeyModifiers::SHIFT)),
            Some(Command::InsertNewline)
        );
        assert_eq!(
            command_for(&key(KeyCode::Enter, KeyModifiers::ALT)),
            Some(Command::InsertNewline)
        );
        assert_eq!(
            command_for(&key(KeyCode::Char('j'), KeyModifiers::CONTROL)),
            Some(Command::InsertNewline)
        );
        assert_eq!(
            command_for(&key(KeyCode::Char('l'), KeyModifiers::CONTROL)),
            Some(Command::Clear)
        );
        assert_eq!(
            command_for(&key(KeyCode::Char('t'), KeyModifiers::CONTROL)),
            Some(Command::ToggleTheme)
        );
        assert_eq!(
            command_for(&key(KeyCode::Char('3'), KeyModifiers::ALT)),
            Some(Command::CopyBlock(3))
        );
        assert_eq!(
            command_for(&key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Command::InsertChar('A'))
        );
        assert_eq!(command_for(&key(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
        assert_eq!(command_for(&key(KeyCode::Char('0'), KeyModifiers::ALT)), None);
        assert_eq!(command_for(&plain(KeyCode::F(1))), None);
    }

    #[test]
    fn test_typing_updates_session_question() {
        let mut app = app();
        type_text(&mut app, "hi");
        app.handle_key(plain(KeyCode::Backspace));
        assert_eq!(app.input.content(), "h");
        assert_eq!(app.session.question(), "h");
    }

    #[test]
    fn test_paste_updates_session_question() {
        let mut app = app();
        app.handle_event(Event::Paste("line one\r\nline two".to_string()));
        assert_eq!(app.session.question(), "line one\nline two");
    }

    #[test]
    fn test_enter_on_blank_question_shows_validation() {
        let mut app = app();
        app.handle_key(plain(KeyCode::Enter));
        assert_eq!(app.session.error_message(), "Please enter a question.");
    }

    #[tokio::test]
    async fn test_enter_while_loading_is_ignored() {
        let mut app = app();
        type_text(&mut app, "q");
        app.handle_key(plain(KeyCode::Enter));
        let first = app.in_flight;
        app.handle_key(plain(KeyCode::Enter));
        assert_eq!(app.in_flight, first);
    }

    #[tokio::test]
    async fn test_typing_while_loading_is_allowed() {
        let mut app = app();
        type_text(&mut app, "q");
        app.handle_key(plain(KeyCode::Enter));
        type_text(&mut app, "2");
        assert_eq!(app.session.question(), "q2");
        assert!(app.session.loading());
    }

    #[test]
    fn test_escape_quits_only_when_empty() {
        let mut app = app();
        type_text(&mut app, "q");
        app.handle_key(plain(KeyCode::Esc));
        assert!(!app.should_quit);

        app.handle_key(key(KeyCode::Char('l'), KeyModifiers::CONTROL));
        app.handle_key(plain(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        type_text(&mut app, "unsent");
        app.handle_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = app();
        let mut release = plain(KeyCode::Char('x'));
        release.kind = KeyEventKind::Release;
        app.handle_event(Event::Key(release));
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_toggle_theme_key() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('t'), KeyModifiers::CONTROL));
        assert!(app.session.dark_mode());
    }
}
