//! OpenRouter provider configuration

use serde::{Deserialize, Serialize};

/// OpenRouter provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRouterConfig {
    /// API key for OpenRouter
    pub api_key: String,
    /// Base URL for the OpenRouter API
    pub base_url: String,
    /// Site URL sent as the `HTTP-Referer` header
    pub site_url: String,
    /// Site name sent as the `X-Title` header
    pub site_name: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://openrouter.ai/api/v1".to_string(),
            site_url: "http://localhost:3000".to_string(),
            site_name: "Nano Banana".to_string(),
            timeout_seconds: 120,
        }
    }
}

impl OpenRouterConfig {
    /// Create a new OpenRouter configuration
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_key: std::env::var("OPENROUTER_API_KEY").unwrap_or_default(),
            base_url: std::env::var("OPENROUTER_BASE_URL").unwrap_or(defaults.base_url),
            site_url: std::env::var("OPENROUTER_SITE_URL").unwrap_or(defaults.site_url),
            site_name: std::env::var("OPENROUTER_SITE_NAME").unwrap_or(defaults.site_name),
            timeout_seconds: std::env::var("OPENROUTER_TIMEOUT")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.timeout_seconds),
        }
    }

    /// Whether an API key is present
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Validate configuration
    ///
    /// The API key is intentionally not required here; its absence is
    /// surfaced per request by the generate endpoint.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("OpenRouter base URL is required".to_string());
        }
        if !self.base_url.starts_with("http") {
            return Err("OpenRouter base URL must start with http:// or https://".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set site URL for the `HTTP-Referer` request header
    pub fn with_site_url(mut self, site_url: impl Into<String>) -> Self {
        self.site_url = site_url.into();
        self
    }

    /// Set site name for the `X-Title` request header
    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = site_name.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OpenRouterConfig::default();
        assert_eq!(config.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.site_url, "http://localhost:3000");
        assert_eq!(config.site_name, "Nano Banana");
        assert_eq!(config.timeout_seconds, 120);
        assert!(config.api_key.is_empty());
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_config_without_api_key_validates() {
        // Missing credential is a per-request error, not a startup error
        let config = OpenRouterConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = OpenRouterConfig::new("or-test-key")
            .with_base_url("https://custom.api.com/v1")
            .with_site_url("https://example.com")
            .with_site_name("Test Site")
            .with_timeout(60);

        assert_eq!(config.api_key, "or-test-key");
        assert_eq!(config.base_url, "https://custom.api.com/v1");
        assert_eq!(config.site_url, "https://example.com");
        assert_eq!(config.site_name, "Test Site");
        assert_eq!(config.timeout_seconds, 60);
        assert!(config.has_api_key());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let mut config = OpenRouterConfig::new("or-test-key");
        config.base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_base_url() {
        let mut config = OpenRouterConfig::new("or-test-key");
        config.base_url = "invalid-url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let mut config = OpenRouterConfig::new("or-test-key");
        config.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let config = OpenRouterConfig::new("   ");
        assert!(!config.has_api_key());
    }
}
