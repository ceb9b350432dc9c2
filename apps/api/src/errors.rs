use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::contact::relay::RelayError;
use crate::content::ContentError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Relay error: {0}")]
    Relay(#[from] RelayError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_ERROR",
                    "Server configuration error".to_string(),
                )
            }
            AppError::Content(e) => {
                tracing::error!("Content error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONTENT_ERROR",
                    "Failed to load profile".to_string(),
                )
            }
            AppError::Relay(RelayError::Rejected { status, message }) => {
                tracing::warn!("Relay rejected submission ({status}): {message}");
                (
                    StatusCode::from_u16(*status)
                        .ok()
                        .filter(|s| !s.is_success())
                        .unwrap_or(StatusCode::BAD_GATEWAY),
                    "RELAY_REJECTED",
                    message.clone(),
                )
            }
            AppError::Relay(RelayError::NonJson { status }) => {
                tracing::error!("Relay returned a non-JSON response (status {status})");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RELAY_ERROR",
                    "Invalid response from form service".to_string(),
                )
            }
            AppError::Relay(RelayError::RateLimited { retries }) => {
                tracing::warn!("Relay still rate limiting after {retries} attempts");
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    "RELAY_BUSY",
                    "Form service is busy, please try again later".to_string(),
                )
            }
            AppError::Relay(e) => {
                tracing::error!("Relay error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RELAY_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        // `message` is mirrored at the top level for form clients.
        let body = Json(json!({
            "success": false,
            "message": message,
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
