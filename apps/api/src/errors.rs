use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

pub const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please try again later.";
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Could not parse AI response as JSON";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{ "error": "<message>" }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// A required credential or setting is absent. Surfaced verbatim.
    #[error("{0}")]
    Configuration(String),

    #[error("Rate limited by the analysis provider")]
    RateLimited,

    #[error("Malformed analysis response: {0}")]
    MalformedResponse(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingApiKey => AppError::Configuration("LLM_API_KEY not configured".into()),
            LlmError::RateLimited => AppError::RateLimited,
            LlmError::Api { status, .. } => AppError::Llm(format!("AI API error: {status}")),
            LlmError::EmptyContent => AppError::Llm("No response from AI".to_string()),
            other => AppError::Llm(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::RateLimited => {
                tracing::warn!("Analysis provider rate limited the request");
                (StatusCode::TOO_MANY_REQUESTS, RATE_LIMIT_MESSAGE.to_string())
            }
            AppError::MalformedResponse(detail) => {
                tracing::error!("Malformed analysis response: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MALFORMED_RESPONSE_MESSAGE.to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// `CatchPanicLayer` handler: renders a panic as a 500 `{error}` via
/// `AppError::Internal`.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    AppError::Internal(anyhow::anyhow!("request handler panicked: {detail}")).into_response()
}
