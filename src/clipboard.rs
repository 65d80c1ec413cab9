//! Copying code blocks to the system clipboard.
//!
//! Self-contained: knows about [`CodeBlock`] and the clipboard seam, nothing
//! about the UI or the session.

use tracing::{debug, warn};

use crate::error::ClipboardError;
use crate::markdown::{CodeBlock, RenderedAnswer};
use crate::traits::ClipboardProvider;

/// The text placed on the clipboard for a block: its exact contents with at
/// most one trailing newline removed.
pub fn clipboard_text(code: &str) -> &str {
    code.strip_suffix('\n').unwrap_or(code)
}

/// Copy a single block.
pub fn copy_code_block(
    clipboard: &mut dyn ClipboardProvider,
    block: &CodeBlock,
) -> Result<(), ClipboardError> {
    let text = clipboard_text(&block.text);
    match clipboard.set_text(text) {
        Ok(()) => {
            debug!(index = block.index, bytes = text.len(), "Copied code block");
            Ok(())
        }
        Err(err) => {
            warn!(index = block.index, error = %err, "Failed to copy code block");
            Err(err)
        }
    }
}

/// Copy block `index` (1-based) of a rendered answer.
pub fn copy_block_at(
    clipboard: &mut dyn ClipboardProvider,
    rendered: &RenderedAnswer,
    index: usize,
) -> Result<(), ClipboardError> {
    let block = rendered
        .block(index)
        .ok_or(ClipboardError::NoSuchBlock(index))?;
    copy_code_block(clipboard, block)
}

/// Confirmation shown after a successful copy.
pub fn copied_notice(index: usize) -> String {
    format!("Copied code block {} to clipboard", index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockClipboard;
    use crate::markdown::render_answer;

    fn block(text: &str) -> CodeBlock {
        CodeBlock {
            index: 1,
            language: "rust".to_string(),
            text: text.to_string(),
            line: 0,
        }
    }

    #[test]
    fn test_clipboard_text_trims_one_newline() {
        assert_eq!(clipboard_text("let x = 1;\n"), "let x = 1;");
        assert_eq!(clipboard_text("a\n\n"), "a\n");
        assert_eq!(clipboard_text("no newline"), "no newline");
        assert_eq!(clipboard_text(""), "");
        assert_eq!(clipboard_text("  indented  \n"), "  indented  ");
    }

    #[test]
    fn test_copy_code_block_writes_trimmed_text() {
        let mut clipboard = MockClipboard::new();
        copy_code_block(&mut clipboard, &block("let x = 1;\n")).unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("let x = 1;"));
    }

    #[test]
    fn test_copy_code_block_propagates_failure() {
        let mut clipboard = MockClipboard::new();
        clipboard.fail_with(ClipboardError::Unavailable("headless".to_string()));
        let err = copy_code_block(&mut clipboard, &block("x\n")).unwrap_err();
        assert_eq!(err, ClipboardError::Unavailable("headless".to_string()));
    }

    #[test]
    fn test_copy_block_at() {
        let rendered = render_answer("```sh\necho hi\n```\n\n```py\nprint(2)\n```", true);
        let mut clipboard = MockClipboard::new();

        copy_block_at(&mut clipboard, &rendered, 2).unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("print(2)"));

        let err = copy_block_at(&mut clipboard, &rendered, 5).unwrap_err();
        assert_eq!(err, ClipboardError::NoSuchBlock(5));
        assert_eq!(clipboard.writes().len(), 1);
    }

    #[test]
    fn test_copied_notice() {
        assert_eq!(copied_notice(2), "Copied code block 2 to clipboard");
    }
}
