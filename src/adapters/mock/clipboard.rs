//! In-memory clipboard for testing.

use std::sync::{Arc, Mutex};

use crate::error::ClipboardError;
use crate::traits::ClipboardProvider;

/// Records every write. Clones share the same history, so a test can keep a
/// handle after moving one into the app.
#[derive(Debug, Clone, Default)]
pub struct MockClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<ClipboardError>>>,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with `error`.
    pub fn fail_with(&self, error: ClipboardError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    /// Most recent successful write.
    pub fn contents(&self) -> Option<String> {
        self.writes.lock().unwrap().last().cloned()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl ClipboardProvider for MockClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_are_shared_between_clones() {
        let observer = MockClipboard::new();
        let mut writer = observer.clone();
        writer.set_text("one").unwrap();
        writer.set_text("two").unwrap();
        assert_eq!(observer.contents().as_deref(), Some("two"));
        assert_eq!(observer.writes().len(), 2);
    }

    #[test]
    fn test_failure() {
        let mut clipboard = MockClipboard::new();
        clipboard.fail_with(ClipboardError::Unavailable("no display".to_string()));
        assert!(clipboard.set_text("x").is_err());
        assert!(clipboard.contents().is_none());
    }
}
