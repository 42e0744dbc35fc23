//! Upstream provider clients

pub mod openrouter;

use crate::core::types::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use openrouter::OpenRouterError;

/// Abstraction over the upstream chat completions call
///
/// Handlers depend on this trait instead of a concrete client so tests can
/// substitute the upstream without network access.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatCompletionBackend: Send + Sync {
    /// Execute a single chat completion request
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, OpenRouterError>;
}
