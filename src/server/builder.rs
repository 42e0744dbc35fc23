//! Server startup
//!
//! Loads environment configuration and runs the HTTP server.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::{info, warn};

/// Run the server with configuration loaded from the environment
pub async fn run_server() -> Result<()> {
    info!("Starting Nano Banana gateway");

    // Pick up a local .env file when present
    if dotenvy::dotenv().is_ok() {
        info!("Loaded environment from .env file");
    }

    let config = Config::from_env()?;
    if !config.openrouter.has_api_key() {
        warn!("OPENROUTER_API_KEY is not set; edit requests will fail until it is configured");
    }

    let server = HttpServer::new(&config)?;
    info!(
        "Server starting at: http://{}:{}",
        config.server.host, config.server.port
    );
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /api/generate - Image edit via OpenRouter");

    server.start().await
}
