//! Core gateway logic
//!
//! Wire types for the OpenAI-compatible chat completions schema and the
//! upstream provider client.

pub mod providers;
pub mod types;
