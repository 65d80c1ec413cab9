//! Request body for `generateContent`.

use serde::{Deserialize, Serialize};

/// One content entry: an ordered list of parts, optionally tagged with a role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Option<Vec<Part>>,
}

impl Content {
    /// A content entry holding a single text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: Some(vec![Part::text(text)]),
        }
    }
}

/// A fragment of content. Only text parts are used by this client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// `{"contents":[{"parts":[{"text":"..."}]}]}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// A request whose sole content is the question, sent as typed.
    pub fn from_question(question: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::text(question)],
        }
    }
}
