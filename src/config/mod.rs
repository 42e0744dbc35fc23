//! Configuration management for the gateway
//!
//! All configuration is environment-driven. `run_server` loads a `.env`
//! file when present, then builds the configuration from process
//! environment variables with sensible defaults.

use crate::core::providers::openrouter::OpenRouterConfig;
use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Main configuration struct for the gateway
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// OpenRouter upstream configuration
    pub openrouter: OpenRouterConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            server: ServerConfig::from_env(),
            openrouter: OpenRouterConfig::from_env(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the loaded configuration
    ///
    /// A missing API key is deliberately not a startup failure: the
    /// endpoint reports it per request so the service still serves
    /// health checks and a clear error body.
    pub fn validate(&self) -> Result<()> {
        self.server
            .validate()
            .map_err(GatewayError::Config)?;
        self.openrouter
            .validate()
            .map_err(GatewayError::Config)?;
        Ok(())
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// Load server configuration from `HOST` / `PORT`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = std::env::var("HOST").unwrap_or(defaults.host);
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        Self { host, port }
    }

    /// Validate server configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host is required".to_string());
        }
        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        Ok(())
    }
}
