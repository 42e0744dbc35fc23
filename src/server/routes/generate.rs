//! Image edit endpoint
//!
//! `POST /api/generate` takes an image URL and a prompt, forwards them as
//! one two-part user message to the edit model, and relays the model's
//! text and image output.

use crate::core::types::{
    ChatCompletionRequest, ChatMessage, ContentPart, ImageData, ResponseMessage,
};
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// The hosted model every edit request is routed to
pub const EDIT_MODEL: &str = "google/gemini-2.5-flash-image-preview";

/// Incoming edit request
///
/// Both fields are optional at the serde level so that absent and empty
/// values fall through to the same validation error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRequest {
    /// URL of the image to edit
    #[serde(default)]
    pub image_url: Option<String>,
    /// Edit instruction
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Successful edit response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditResponse {
    /// Always true on the success path
    pub success: bool,
    /// Model text output, null when the model returned none
    pub result: Option<String>,
    /// Generated images
    pub images: Vec<ImageData>,
    /// Whether `images` is non-empty
    pub has_images: bool,
}

impl From<ResponseMessage> for EditResponse {
    fn from(message: ResponseMessage) -> Self {
        let has_images = !message.images.is_empty();
        Self {
            success: true,
            result: message.content,
            images: message.images,
            has_images,
        }
    }
}

/// Image edit endpoint
pub async fn generate(
    state: web::Data<AppState>,
    request: web::Json<EditRequest>,
) -> Result<HttpResponse> {
    let EditRequest { image_url, prompt } = request.into_inner();

    let image_url = image_url.filter(|url| !url.is_empty());
    let prompt = prompt.filter(|prompt| !prompt.is_empty());
    let (Some(image_url), Some(prompt)) = (image_url, prompt) else {
        warn!("Rejected edit request with missing image URL or prompt");
        return Err(GatewayError::Validation(
            "Image URL and prompt are required".to_string(),
        ));
    };

    if !state.config.openrouter.has_api_key() {
        error!("OPENROUTER_API_KEY is not set");
        return Err(GatewayError::Config("API key not configured".to_string()));
    }

    info!(model = EDIT_MODEL, "Forwarding image edit request");

    let upstream_request = ChatCompletionRequest::new(
        EDIT_MODEL,
        vec![ChatMessage::user(vec![
            ContentPart::text(prompt),
            ContentPart::image_url(image_url),
        ])],
    );

    let response = state
        .backend
        .chat_completion(upstream_request)
        .await
        .map_err(|e| {
            error!("Image edit request failed: {}", e);
            GatewayError::from(e)
        })?;

    let message = response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message)
        .ok_or_else(|| {
            error!("Upstream response contained no choices");
            GatewayError::Internal("Failed to generate image".to_string())
        })?;

    let edit_response = EditResponse::from(message);
    info!(
        has_images = edit_response.has_images,
        image_count = edit_response.images.len(),
        "Image edit request completed"
    );

    Ok(HttpResponse::Ok().json(edit_response))
}
