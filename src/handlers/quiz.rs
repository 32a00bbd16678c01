// src/handlers/quiz.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;

use crate::{error::AppError, services::gemini::QuizGenerator};

/// Body of `POST /generate_test`.
#[derive(Debug, Deserialize)]
pub struct GenerateTestRequest {
    pub text: Option<String>,
}

/// Generates a fresh quiz from the submitted study text.
///
/// The quiz goes straight back to the caller and is never stored
/// server-side; the browser keeps the answer key for scoring.
pub async fn generate_test(
    State(generator): State<QuizGenerator>,
    Json(payload): Json<GenerateTestRequest>,
) -> Result<impl IntoResponse, AppError> {
    let text = payload
        .text
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::BadRequest("No text provided".to_string()))?;

    let questions = generator.generate(text).await?;

    tracing::info!("Generated a quiz with {} questions", questions.len());

    Ok(Json(json!({
        "success": true,
        "questions": questions,
    })))
}
