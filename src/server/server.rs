//! HTTP server core implementation

use crate::config::{Config, ServerConfig};
use crate::core::providers::openrouter::OpenRouterClient;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer as ActixHttpServer, web};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    ///
    /// Builds the OpenRouter client once and injects it into the shared
    /// application state.
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let client = OpenRouterClient::new(&config.openrouter)?;

        Ok(Self {
            config: config.server.clone(),
            state: AppState::new(config.clone(), Arc::new(client)),
        })
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = format!("{}:{}", self.config.host, self.config.port);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .app_data(json_config())
                .wrap(Cors::permissive())
                .wrap(TracingLogger::default())
                .configure(routes::configure_routes)
        })
        .bind(&bind_addr)
        .map_err(|e| GatewayError::Config(format!("Failed to bind {}: {}", bind_addr, e)))?
        .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::Internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// JSON extractor configuration
///
/// Keeps malformed-payload rejections in the same `{"error": ...}` body
/// shape the rest of the API uses.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(serde_json::json!({"error": message})),
        )
        .into()
    })
}
