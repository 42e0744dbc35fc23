//! Content part types for multimodal messages

use serde::{Deserialize, Serialize};

/// Content part (multimodal support)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContentPart {
    /// Text content
    #[serde(rename = "text")]
    Text { text: String },

    /// Image URL
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

impl ContentPart {
    /// Create a text part
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create an image URL part
    pub fn image_url(url: impl Into<String>) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl { url: url.into() },
        }
    }
}

/// Image URL structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUrl {
    /// Image URL
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_part_serialization() {
        let part = ContentPart::text("make it blue");
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "text", "text": "make it blue"})
        );
    }

    #[test]
    fn test_image_url_part_serialization() {
        let part = ContentPart::image_url("https://example.com/cat.png");
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "image_url",
                "image_url": {"url": "https://example.com/cat.png"}
            })
        );
    }

    #[test]
    fn test_part_deserialization() {
        let part: ContentPart =
            serde_json::from_value(serde_json::json!({"type": "text", "text": "hi"})).unwrap();
        assert!(matches!(part, ContentPart::Text { text } if text == "hi"));
    }
}
