//! Error types for the chat client.
//!
//! Only two kinds ever reach the user, both as a single line under the
//! question box:
//!
//! | Kind | Origin | Message |
//! |------|--------|---------|
//! | Validation | blank question, never reaches the network | `Please enter a question.` |
//! | Request | network, HTTP or parse failure | server `error.message`, else a generic fallback |
//!
//! Internal failures ([`GeminiError`]) are logged with full detail and then
//! folded into [`ChatError::Request`] at the controller boundary.

mod clipboard;
mod gemini;

pub use clipboard::ClipboardError;
pub use gemini::GeminiError;

use thiserror::Error;

/// Message shown when the question is empty or whitespace-only.
pub const VALIDATION_MESSAGE: &str = "Please enter a question.";

/// Message shown when a request fails and the server gave no usable message.
pub const GENERIC_REQUEST_MESSAGE: &str =
    "An error occurred while generating the answer. Please try again.";

/// User-facing error. Both variants are recoverable: the user edits the
/// question and submits again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,

    #[error("{message}")]
    Request { message: String },
}

impl ChatError {
    /// A request error carrying the given message.
    pub fn request(message: impl Into<String>) -> Self {
        ChatError::Request {
            message: message.into(),
        }
    }

    /// Convert an internal API error, preferring the server's own message.
    pub fn from_gemini(err: &GeminiError) -> Self {
        match err.server_message() {
            Some(message) => ChatError::request(message),
            None => ChatError::request(GENERIC_REQUEST_MESSAGE),
        }
    }

    /// The single line shown to the user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ChatError::Validation)
    }
}

impl From<GeminiError> for ChatError {
    fn from(err: GeminiError) -> Self {
        ChatError::from_gemini(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::HttpError;

    #[test]
    fn test_validation_message() {
        assert_eq!(ChatError::Validation.user_message(), "Please enter a question.");
        assert!(ChatError::Validation.is_validation());
    }

    #[test]
    fn test_from_gemini_prefers_server_message() {
        let err = GeminiError::Api {
            status: 429,
            message: Some("quota exceeded".to_string()),
            body: r#"{"error":{"message":"quota exceeded"}}"#.to_string(),
        };
        assert_eq!(
            ChatError::from_gemini(&err),
            ChatError::request("quota exceeded")
        );
    }

    #[test]
    fn test_from_gemini_falls_back_to_generic() {
        let err = GeminiError::Api {
            status: 503,
            message: None,
            body: String::new(),
        };
        assert_eq!(ChatError::from_gemini(&err).user_message(), GENERIC_REQUEST_MESSAGE);

        let err: GeminiError = HttpError::Timeout("elapsed".to_string()).into();
        let chat: ChatError = err.into();
        assert_eq!(chat.user_message(), GENERIC_REQUEST_MESSAGE);
        assert!(!chat.is_validation());
    }

    #[test]
    fn test_from_gemini_json_error_is_generic() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = GeminiError::Json(json_err);
        assert_eq!(ChatError::from_gemini(&err).user_message(), GENERIC_REQUEST_MESSAGE);
    }
}
