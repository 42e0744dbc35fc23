//! Health check endpoint

use actix_web::{HttpResponse, Result as ActixResult};
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// Health status payload
#[derive(Debug, Serialize)]
struct HealthStatus {
    status: Cow<'static, str>,
    version: Cow<'static, str>,
    timestamp: chrono::DateTime<chrono::Utc>,
}

/// Basic health check endpoint
///
/// Returns a simple health status indicating if the service is running.
pub async fn health_check() -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    let health_status = HealthStatus {
        status: Cow::Borrowed("healthy"),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        timestamp: chrono::Utc::now(),
    };

    Ok(HttpResponse::Ok().json(health_status))
}
