//! System clipboard adapter using `arboard`.

use crate::error::ClipboardError;
use crate::traits::ClipboardProvider;

/// [`ClipboardProvider`] backed by the OS clipboard (NSPasteboard on macOS,
/// X11/Wayland on Linux, the Win32 clipboard on Windows).
///
/// The handle is opened lazily on first copy and then kept: on X11 the
/// copied text is only served while the owning handle is alive.
#[derive(Default)]
pub struct ArboardClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self { inner: None }
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard not initialized".to_string()))
    }
}

impl ClipboardProvider for ArboardClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = self.handle()?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
