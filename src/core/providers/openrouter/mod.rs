//! OpenRouter provider
//!
//! Client for OpenRouter's OpenAI-compatible chat completions API.

mod client;
mod config;
mod error;

pub use client::OpenRouterClient;
pub use config::OpenRouterConfig;
pub use error::OpenRouterError;
