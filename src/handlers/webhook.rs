// src/handlers/webhook.rs

use axum::{extract::State, response::IntoResponse};
use teloxide::types::Update;

use crate::{bot, error::AppError, state::AppState};

/// Receives Telegram updates pushed by the platform and hands them to the
/// bot command handler. Deserialize-and-forward only.
///
/// Answers 200 for any well-formed update so Telegram does not
/// re-deliver it; only an undeserializable payload is an error.
pub async fn telegram_webhook(
    State(state): State<AppState>,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let update: Update = serde_json::from_str(&body).map_err(|e| {
        tracing::warn!("Undeserializable webhook payload: {}", e);
        AppError::WebhookDecode(e.to_string())
    })?;

    if let Err(e) = bot::handle_update(&state.bot, &state.config, update).await {
        // The inbound update itself was well-formed; a delivery failure
        // toward Telegram is logged, not surfaced.
        tracing::error!("Failed to handle bot update: {:?}", e);
    }

    Ok("OK")
}
