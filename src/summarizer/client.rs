//! HTTP client for the Anthropic Messages API

use std::time::Duration;

use reqwest::{Client as ReqwestClient, StatusCode};
use tracing::{debug, error};

use crate::error::{Error, Result};
use crate::summarizer::types::{Message, MessagesRequest, MessagesResponse};

/// Default timeout for API requests in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// API version header value required by the messages endpoint
const API_VERSION: &str = "2023-06-01";

/// Client for the Anthropic Messages API
///
/// Handles authentication headers, request formatting, and response
/// parsing for the single message-creation call the summarizer needs.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    client: ReqwestClient,
    base_url: String,
    api_key: String,
}

#[cfg(test)]
impl AnthropicClient {
    /// Set the base URL (for testing only)
    pub fn set_base_url(&mut self, url: String) {
        self.base_url = url;
    }
}

impl AnthropicClient {
    /// Create a new client with an API key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: "https://api.anthropic.com".to_string(),
            api_key: api_key.into(),
        }
    }

    /// Create a message from a single user prompt
    pub async fn create_message(
        &self,
        model: &str,
        max_tokens: u32,
        prompt: &str,
    ) -> Result<MessagesResponse> {
        let request = MessagesRequest {
            model: model.to_string(),
            max_tokens,
            messages: vec![Message::user(prompt)],
        };

        let url = format!("{}/v1/messages", self.base_url);
        debug!("Sending messages request to model {}", model);

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Summarize(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Summarize(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            error!("API error: {} - {}", status, body);
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    Error::Summarize("Invalid API key or credentials".to_string())
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    Error::Summarize("API quota exhausted".to_string())
                }
                _ => Error::Summarize(format!("API error: {} - {}", status, body)),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse response: {}", e);
            Error::Summarize(format!("Unexpected response format: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_create_message_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/messages")
            .match_header("x-api-key", "test-key")
            .match_header("anthropic-version", API_VERSION)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"content": [{"type": "text", "text": "{\"has_vacancies\": true}"}]}"#)
            .expect(1)
            .create_async()
            .await;

        let mut client = AnthropicClient::with_api_key("test-key");
        client.set_base_url(server.url());

        let response = client
            .create_message("claude-3-5-sonnet-20241022", 1024, "extract")
            .await
            .unwrap();
        assert!(response.text().unwrap().contains("has_vacancies"));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_summarize_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/messages")
            .with_status(401)
            .with_body(r#"{"error": {"type": "authentication_error"}}"#)
            .create_async()
            .await;

        let mut client = AnthropicClient::with_api_key("bad-key");
        client.set_base_url(server.url());

        let result = client.create_message("model", 1024, "extract").await;
        match result {
            Err(Error::Summarize(msg)) => assert!(msg.contains("credentials")),
            other => panic!("expected summarize error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_response_body_is_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/messages")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let mut client = AnthropicClient::with_api_key("test-key");
        client.set_base_url(server.url());

        let result = client.create_message("model", 1024, "extract").await;
        assert!(matches!(result, Err(Error::Summarize(_))));
    }
}
