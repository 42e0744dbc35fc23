//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::providers::ChatCompletionBackend;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Holds the read-only configuration and the upstream backend, both built
/// once at startup. The backend is held behind the `ChatCompletionBackend`
/// trait so handlers can be exercised with a substitute in tests.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Upstream chat completions backend
    pub backend: Arc<dyn ChatCompletionBackend>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, backend: Arc<dyn ChatCompletionBackend>) -> Self {
        Self {
            config: Arc::new(config),
            backend,
        }
    }
}
