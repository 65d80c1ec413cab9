//! Response bodies: the success shape and the error shape.
//!
//! A successful body is kept as raw JSON and read by path. The API omits
//! `candidates` when a prompt is blocked and `parts` when a candidate
//! finished without output, and any step may be `null` or of an unexpected
//! type; all of these mean "no answer", not a parse error. Only a body that
//! is not JSON at all fails to parse.

use serde::Deserialize;
use serde_json::Value;

const FIRST_TEXT: &str = "/candidates/0/content/parts/0/text";
const FIRST_FINISH_REASON: &str = "/candidates/0/finishReason";

/// Successful `generateContent` response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct GenerateContentResponse(Value);

impl GenerateContentResponse {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// `candidates[0].content.parts[0].text`, if every step exists and the
    /// text is a non-empty string.
    pub fn first_text(&self) -> Option<&str> {
        self.0
            .pointer(FIRST_TEXT)
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Number of candidates, 0 when the field is absent or not an array.
    pub fn candidate_count(&self) -> usize {
        self.0
            .get("candidates")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// `finishReason` of the first candidate (`STOP`, `SAFETY`, ...).
    pub fn finish_reason(&self) -> Option<&str> {
        self.0.pointer(FIRST_FINISH_REASON).and_then(Value::as_str)
    }
}

/// `{"error": {...}}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl ApiErrorBody {
    /// `error.message` from a raw body, or `None` if the body is not the
    /// expected JSON or carries no message.
    pub fn message_from_bytes(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<ApiErrorBody>(body)
            .ok()?
            .error?
            .message
            .filter(|message| !message.trim().is_empty())
    }
}
