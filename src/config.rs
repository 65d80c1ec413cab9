//! Client configuration for the generative-language endpoint.
//!
//! The API key is resolved when the binary is built, from the
//! `GEMINI_API_KEY` environment variable. It is not configurable at runtime
//! by the end user. A missing key is not rejected here: the request goes out
//! with an empty key and the API's error message is surfaced at first use.

use std::fmt;

/// Production endpoint host.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used for every request.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Build-time environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// The API key captured at compile time (empty when unset).
pub fn build_time_api_key() -> &'static str {
    option_env!("GEMINI_API_KEY").unwrap_or("")
}

/// Configuration for [`GeminiClient`](crate::gemini::GeminiClient).
///
/// # Example
///
/// ```
/// use chatbot::config::ChatConfig;
///
/// let config = ChatConfig::default()
///     .with_api_key("test-key")
///     .with_base_url("http://127.0.0.1:8080/");
/// assert_eq!(
///     config.endpoint_url(),
///     "http://127.0.0.1:8080/v1beta/models/gemini-1.5-flash:generateContent?key=test-key"
/// );
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// API key appended to the endpoint as the `key` query parameter
    pub api_key: String,
    /// Model identifier used in the endpoint path
    pub model: String,
    /// Scheme and host of the API, without a trailing path
    pub base_url: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

impl ChatConfig {
    /// Configuration using the key baked in at build time.
    pub fn from_build_env() -> Self {
        Self {
            api_key: build_time_api_key().to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the client at a different host (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Whether a non-empty API key is configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Path of the `generateContent` call, without host or query.
    pub fn endpoint_path(&self) -> String {
        format!("/v1beta/models/{}:generateContent", self.model)
    }

    /// Full request URL including the key.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}{}?key={}",
            self.base_url.trim_end_matches('/'),
            self.endpoint_path(),
            self.api_key
        )
    }
}

// The key must never end up in the log file.
impl fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatConfig")
            .field("api_key", &if self.has_api_key() { "<set>" } else { "<missing>" })
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}
