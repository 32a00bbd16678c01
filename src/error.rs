// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 400 Bad Request (missing input text, missing result fields)
    BadRequest(String),

    // 500: the model answered, but no usable question array could be
    // recovered from its output. Carries the raw model text so an
    // operator can see what actually came back.
    MalformedAiResponse { raw: String },

    // 500: network/auth/quota failure calling the AI provider
    UpstreamService(String),

    // 500: inbound bot payload did not deserialize
    WebhookDecode(String),

    // 500 Internal Server Error (persistence and everything else)
    InternalServerError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::MalformedAiResponse { raw } => {
                tracing::error!("Unparsable model output ({} bytes)", raw.len());
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Failed to parse JSON from AI response.",
                        "ai_response": raw,
                    }),
                )
            }
            AppError::UpstreamService(msg) => {
                tracing::error!("Upstream AI service error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg }))
            }
            AppError::WebhookDecode(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg }))
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal Server Error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Converts `sqlx::Error` into `AppError::InternalServerError`.
/// Allows using `?` operator on database queries.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

/// Transport-level failures toward the AI provider (connect, timeout,
/// TLS, non-JSON body) all surface as upstream errors.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::UpstreamService(err.to_string())
    }
}
