//! OpenRouter HTTP client

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::debug;

use crate::core::providers::ChatCompletionBackend;
use crate::core::types::{ChatCompletionRequest, ChatCompletionResponse};

use super::config::OpenRouterConfig;
use super::error::OpenRouterError;

/// Client for the OpenRouter chat completions API
///
/// Constructed once at startup and shared across requests. Authentication
/// and the caller-identifying headers are baked into the underlying
/// `reqwest::Client` as default headers.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    client: Client,
    base_url: String,
}

impl OpenRouterClient {
    /// Create a new client from configuration
    pub fn new(config: &OpenRouterConfig) -> Result<Self, OpenRouterError> {
        config.validate().map_err(OpenRouterError::Configuration)?;

        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {}", config.api_key.trim());
        let mut auth_value = HeaderValue::from_str(&bearer).map_err(|e| {
            OpenRouterError::Configuration(format!("Invalid API key value: {}", e))
        })?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(
            "http-referer",
            HeaderValue::from_str(config.site_url.trim()).map_err(|e| {
                OpenRouterError::Configuration(format!("Invalid site URL header: {}", e))
            })?,
        );
        headers.insert(
            "x-title",
            HeaderValue::from_str(config.site_name.trim()).map_err(|e| {
                OpenRouterError::Configuration(format!("Invalid site name header: {}", e))
            })?,
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(headers)
            .build()
            .map_err(|e| {
                OpenRouterError::Network(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Execute a POST request against an API endpoint
    async fn execute_request<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        body: serde_json::Value,
    ) -> Result<T, OpenRouterError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OpenRouterError::Timeout(format!("Request to {} timed out", url))
                } else if e.is_connect() {
                    OpenRouterError::Network(format!("Connection failed to {}: {}", url, e))
                } else {
                    OpenRouterError::Network(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(parse_error_body(status.as_u16(), &error_text));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| OpenRouterError::Network(format!("Failed to read response: {}", e)))?;

        debug!(
            provider = "openrouter",
            response_text = %response_text,
            "Raw HTTP response received"
        );

        serde_json::from_str(&response_text)
            .map_err(|e| OpenRouterError::Parsing(format!("Failed to parse response: {}", e)))
    }
}

/// Map a non-2xx upstream response into an `Api` error
///
/// OpenRouter error bodies carry `{"error": {"message": ...}}`. The full
/// body is preserved as details so callers can relay it verbatim; a body
/// that is not JSON is kept as a raw string.
fn parse_error_body(status: u16, body: &str) -> OpenRouterError {
    let details = serde_json::from_str::<serde_json::Value>(body)
        .unwrap_or_else(|_| serde_json::Value::String(body.to_string()));
    let message = details
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .unwrap_or("OpenRouter API error")
        .to_string();

    OpenRouterError::Api {
        status,
        message,
        details,
    }
}

#[async_trait]
impl ChatCompletionBackend for OpenRouterClient {
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, OpenRouterError> {
        let body = serde_json::to_value(&request)?;
        debug!(
            provider = "openrouter",
            model = %request.model,
            "Sending chat completion request"
        );

        self.execute_request("chat/completions", body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_structured_error_body() {
        let body = r#"{"error": {"message": "rate limited", "code": 429}}"#;
        let err = parse_error_body(429, body);

        match err {
            OpenRouterError::Api {
                status,
                message,
                details,
            } => {
                assert_eq!(status, 429);
                assert_eq!(message, "rate limited");
                assert_eq!(details["error"]["code"], 429);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_body_without_message() {
        let err = parse_error_body(500, r#"{"error": {}}"#);
        match err {
            OpenRouterError::Api { message, .. } => {
                assert_eq!(message, "OpenRouter API error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_non_json_error_body() {
        let err = parse_error_body(502, "bad gateway");
        match err {
            OpenRouterError::Api {
                status, details, ..
            } => {
                assert_eq!(status, 502);
                assert_eq!(details, serde_json::Value::String("bad gateway".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = OpenRouterConfig::new("or-test-key").with_base_url("");
        assert!(matches!(
            OpenRouterClient::new(&config),
            Err(OpenRouterError::Configuration(_))
        ));
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let config =
            OpenRouterConfig::new("or-test-key").with_base_url("https://openrouter.ai/api/v1/");
        let client = OpenRouterClient::new(&config).unwrap();
        assert_eq!(client.base_url, "https://openrouter.ai/api/v1");
    }
}
