//! Errors from the generative-language API call.

use crate::traits::HttpError;
use thiserror::Error;

/// Everything that can go wrong between sending the question and holding a
/// parsed response body.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("transport error: {0}")]
    Http(#[from] HttpError),

    /// The API answered with a non-2xx status.
    #[error("API error (HTTP {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        /// `error.message` from the response body, if it had one
        message: Option<String>,
        /// Raw response body, kept for the log
        body: String,
    },

    /// A 2xx response whose body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),
}

impl GeminiError {
    /// The human-readable message supplied by the server, when present.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            GeminiError::Api {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// HTTP status for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            GeminiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
