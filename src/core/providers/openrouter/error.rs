//! OpenRouter error types

use thiserror::Error;

/// OpenRouter specific errors
#[derive(Error, Debug)]
pub enum OpenRouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Parsing error
    #[error("Failed to parse response: {0}")]
    Parsing(String),

    /// API error with upstream status and the raw error body
    #[error("API error (status {status}): {message}")]
    Api {
        /// Upstream HTTP status code
        status: u16,
        /// Upstream error message
        message: String,
        /// Raw upstream error body
        details: serde_json::Value,
    },
}

impl From<serde_json::Error> for OpenRouterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parsing(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = OpenRouterError::Api {
            status: 429,
            message: "rate limited".to_string(),
            details: serde_json::json!({"error": {"message": "rate limited"}}),
        };
        assert_eq!(err.to_string(), "API error (status 429): rate limited");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: OpenRouterError = json_err.into();
        assert!(matches!(err, OpenRouterError::Parsing(_)));
    }
}
