//! Wire types for the OpenAI-compatible chat completions API

mod chat;
mod content;

pub use chat::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ImageData,
    MessageRole, ResponseMessage,
};
pub use content::{ContentPart, ImageUrl};
