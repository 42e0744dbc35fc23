//! Error types and HTTP response mapping for the gateway

use crate::core::providers::openrouter::OpenRouterError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
///
/// Each variant maps to one failure class of the generate endpoint:
/// client input, missing configuration, a structured upstream error that
/// is relayed with its original status, or anything else as a 500.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Invalid client input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Structured upstream API error, relayed with its original status
    #[error("Upstream error (status {status}): {message}")]
    Upstream {
        /// Upstream HTTP status code
        status: u16,
        /// Upstream error message
        message: String,
        /// Raw upstream error body
        details: serde_json::Value,
    },

    /// Any other failure
    #[error("{0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::Validation(message) | Self::Config(message) | Self::Internal(message) => {
                ErrorBody {
                    error: message.clone(),
                    details: None,
                }
            }
            Self::Upstream {
                message, details, ..
            } => ErrorBody {
                error: message.clone(),
                details: Some(details.clone()),
            },
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<OpenRouterError> for GatewayError {
    fn from(err: OpenRouterError) -> Self {
        match err {
            OpenRouterError::Api {
                status,
                message,
                details,
            } => Self::Upstream {
                status,
                message,
                details,
            },
            OpenRouterError::Configuration(message) => Self::Config(message),
            OpenRouterError::Network(message)
            | OpenRouterError::Timeout(message)
            | OpenRouterError::Parsing(message) => Self::Internal(message),
        }
    }
}
