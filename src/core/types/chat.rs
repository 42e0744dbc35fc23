//! Chat completion request and response types
//!
//! Request types serialize into the OpenAI-compatible schema OpenRouter
//! accepts. Response types tolerate absent fields: `content` may be null
//! and the non-standard `images` extension may be missing entirely.

use super::content::{ContentPart, ImageUrl};
use serde::{Deserialize, Serialize};

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System message
    System,
    /// User message
    User,
    /// Assistant message
    Assistant,
}

/// Outbound chat message with multimodal content parts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role
    pub role: MessageRole,
    /// Ordered content parts
    pub content: Vec<ContentPart>,
}

impl ChatMessage {
    /// Create a user message from content parts
    pub fn user(content: Vec<ContentPart>) -> Self {
        Self {
            role: MessageRole::User,
            content,
        }
    }
}

/// Chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
}

impl ChatCompletionRequest {
    /// Create a chat completion request
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
        }
    }
}

/// Chat completion response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    /// Response identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Model that produced the response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Response choices
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// A single response choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChoice {
    /// Choice index
    #[serde(default)]
    pub index: u32,
    /// Response message
    pub message: ResponseMessage,
    /// Finish reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// The chat completion response message
///
/// `images` is an OpenRouter extension carried by image generation models;
/// it is absent for text-only responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMessage {
    /// Message role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Text content, may be null
    #[serde(default)]
    pub content: Option<String>,
    /// Generated images, empty when the field is absent
    #[serde(default)]
    pub images: Vec<ImageData>,
}

/// A generated image reference returned by the model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageData {
    /// Part type, `image_url` in practice
    #[serde(rename = "type")]
    pub kind: String,
    /// Image location
    pub image_url: ImageUrl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization_shape() {
        let request = ChatCompletionRequest::new(
            "google/gemini-2.5-flash-image-preview",
            vec![ChatMessage::user(vec![
                ContentPart::text("add a hat"),
                ContentPart::image_url("https://example.com/cat.png"),
            ])],
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "google/gemini-2.5-flash-image-preview");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"][0]["type"], "text");
        assert_eq!(json["messages"][0]["content"][1]["type"], "image_url");
    }

    #[test]
    fn test_response_with_images() {
        let json = serde_json::json!({
            "id": "gen-1",
            "model": "google/gemini-2.5-flash-image-preview",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": "done",
                    "images": [
                        {"type": "image_url", "image_url": {"url": "http://x/1.png"}}
                    ]
                },
                "finish_reason": "stop"
            }]
        });

        let response: ChatCompletionResponse = serde_json::from_value(json).unwrap();
        let message = &response.choices[0].message;
        assert_eq!(message.content.as_deref(), Some("done"));
        assert_eq!(message.images.len(), 1);
        assert_eq!(message.images[0].image_url.url, "http://x/1.png");
    }

    #[test]
    fn test_response_without_images_field() {
        let json = serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "ok"}}]
        });

        let response: ChatCompletionResponse = serde_json::from_value(json).unwrap();
        assert!(response.choices[0].message.images.is_empty());
    }

    #[test]
    fn test_response_with_null_content() {
        let json = serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        });

        let response: ChatCompletionResponse = serde_json::from_value(json).unwrap();
        assert!(response.choices[0].message.content.is_none());
    }

    #[test]
    fn test_response_with_no_choices() {
        let response: ChatCompletionResponse =
            serde_json::from_value(serde_json::json!({"id": "gen-2"})).unwrap();
        assert!(response.choices.is_empty());
    }
}
