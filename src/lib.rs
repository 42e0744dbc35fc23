//! # nanobanana-rs
//!
//! A small HTTP gateway that relays image edit requests to a hosted
//! multimodal model through OpenRouter's OpenAI-compatible chat completions
//! API.
//!
//! The service exposes a single business endpoint, `POST /api/generate`,
//! which takes an image URL and a text prompt, forwards them as one
//! two-part user message to a fixed model, and returns the model's text
//! and generated images to the caller.
//!
//! ```rust,no_run
//! use nanobanana_rs::server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     server::builder::run_server().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use crate::config::Config;
pub use crate::core::providers::ChatCompletionBackend;
pub use crate::core::providers::openrouter::{
    OpenRouterClient, OpenRouterConfig, OpenRouterError,
};
pub use crate::utils::error::{GatewayError, Result};
