//! Client for the `generateContent` endpoint.

use std::sync::Arc;

use tracing::{debug, info};

use crate::adapters::ReqwestHttpClient;
use crate::config::ChatConfig;
use crate::error::GeminiError;
use crate::models::{ApiErrorBody, GenerateContentRequest, GenerateContentResponse};
use crate::traits::{json_headers, HttpClient};

/// Answer used when a successful response carries no extractable text.
pub const NO_ANSWER_PLACEHOLDER: &str = "No answer available.";

/// Sends one question per call. Holds no per-request state, so a single
/// instance can be shared behind an `Arc` by every spawned request task.
pub struct GeminiClient {
    config: ChatConfig,
    http: Arc<dyn HttpClient>,
}

impl GeminiClient {
    /// Client using the production reqwest transport.
    pub fn new(config: ChatConfig) -> Self {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::new()))
    }

    /// Client using an injected transport.
    pub fn with_http_client(config: ChatConfig, http: Arc<dyn HttpClient>) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// POST the question and parse the success body.
    ///
    /// Any non-2xx status is an error, with the server's `error.message`
    /// attached when the body has one.
    pub async fn generate_content(
        &self,
        question: &str,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let body = serde_json::to_string(&GenerateContentRequest::from_question(question))?;
        let url = self.config.endpoint_url();

        debug!(
            model = %self.config.model,
            question_len = question.len(),
            "Sending generateContent request"
        );

        let response = self.http.post(&url, &body, &json_headers()).await?;

        if !response.is_success() {
            return Err(GeminiError::Api {
                status: response.status,
                message: ApiErrorBody::message_from_bytes(&response.body),
                body: response.text(),
            });
        }

        let parsed: GenerateContentResponse = response.json()?;
        info!(
            status = response.status,
            candidates = parsed.candidate_count(),
            finish_reason = ?parsed.finish_reason(),
            "generateContent succeeded"
        );
        Ok(parsed)
    }

    /// Ask a question and return the answer text, or
    /// [`NO_ANSWER_PLACEHOLDER`] when the response has none.
    pub async fn ask(&self, question: &str) -> Result<String, GeminiError> {
        let response = self.generate_content(question).await?;
        Ok(response
            .first_text()
            .unwrap_or(NO_ANSWER_PLACEHOLDER)
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse};
    use crate::traits::{HttpError, Response};
    use serde_json::json;

    fn client(mock: &MockHttpClient) -> GeminiClient {
        let config = ChatConfig::default()
            .with_api_key("k")
            .with_base_url("https://api.test");
        GeminiClient::with_http_client(config, Arc::new(mock.clone()))
    }

    #[tokio::test]
    async fn test_ask_returns_first_text() {
        let mock = MockHttpClient::new();
        mock.push_response(MockResponse::json(
            200,
            json!({"candidates": [{"content": {"parts": [{"text": "4"}]}}]}),
        ));

        let answer = client(&mock).ask("2+2?").await.unwrap();
        assert_eq!(answer, "4");

        let requests = mock.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url,
            "https://api.test/v1beta/models/gemini-1.5-flash:generateContent?key=k"
        );
        assert_eq!(
            requests[0].headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(
            requests[0].json(),
            json!({"contents": [{"parts": [{"text": "2+2?"}]}]})
        );
    }

    #[tokio::test]
    async fn test_ask_without_text_uses_placeholder() {
        let mock = MockHttpClient::new();
        mock.push_response(MockResponse::json(200, json!({"candidates": []})));
        mock.push_response(MockResponse::json(200, json!({})));
        mock.push_response(MockResponse::json(
            200,
            json!({"candidates": [{"content": {"parts": [{"text": ""}]}}]}),
        ));
        mock.push_response(MockResponse::json(200, json!({"candidates": [null]})));
        mock.push_response(MockResponse::json(200, json!({"candidates": [{"content": null}]})));
        mock.push_response(MockResponse::json(
            200,
            json!({"candidates": [{"content": {"parts": [{"text": 5}]}}]}),
        ));

        let client = client(&mock);
        for _ in 0..6 {
            assert_eq!(client.ask("q").await.unwrap(), NO_ANSWER_PLACEHOLDER);
        }
    }

    #[tokio::test]
    async fn test_non_success_status_carries_server_message() {
        let mock = MockHttpClient::new();
        mock.push_response(MockResponse::json(
            429,
            json!({"error": {"code": 429, "message": "quota exceeded", "status": "RESOURCE_EXHAUSTED"}}),
        ));

        let err = client(&mock).ask("q").await.unwrap_err();
        assert_eq!(err.status(), Some(429));
        assert_eq!(err.server_message(), Some("quota exceeded"));
    }

    #[tokio::test]
    async fn test_non_success_status_without_json_body() {
        let mock = MockHttpClient::new();
        mock.push_response(MockResponse::Success(Response::new(502, "Bad Gateway")));

        let err = client(&mock).ask("q").await.unwrap_err();
        match err {
            GeminiError::Api { status, message, body } => {
                assert_eq!(status, 502);
                assert_eq!(message, None);
                assert_eq!(body, "Bad Gateway");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_success_body_is_json_error() {
        let mock = MockHttpClient::new();
        mock.push_response(MockResponse::Success(Response::new(200, "not json")));

        let err = client(&mock).ask("q").await.unwrap_err();
        assert!(matches!(err, GeminiError::Json(_)));
    }

    #[tokio::test]
    async fn test_transport_error() {
        let mock = MockHttpClient::new();
        mock.push_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));

        let err = client(&mock).ask("q").await.unwrap_err();
        assert!(matches!(err, GeminiError::Http(HttpError::ConnectionFailed(_))));
    }
}
