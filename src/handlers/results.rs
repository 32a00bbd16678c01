// src/handlers/results.rs

use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::result::{QuizResult, SaveResultRequest, UNGROUPED, group_by_student_group},
};

/// Persists one quiz attempt.
///
/// Id and timestamp are assigned here, never by the client. Rows are
/// append-only; a failed validation writes nothing.
pub async fn save_result(
    State(pool): State<SqlitePool>,
    Json(payload): Json<SaveResultRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let name = payload
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty());

    let (Some(name), Some(score)) = (name, payload.score) else {
        return Err(AppError::BadRequest("Name or score is missing".to_string()));
    };

    let group = payload
        .group
        .as_deref()
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .unwrap_or(UNGROUPED);

    sqlx::query(
        r#"
        INSERT INTO results (student_name, student_group, score, timestamp)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(name)
    .bind(group)
    .bind(score)
    .bind(Utc::now())
    .execute(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to insert result: {:?}", e);
        AppError::from(e)
    })?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Result saved successfully"
    })))
}

/// Dashboard data: every stored attempt, newest first, bucketed by group.
pub async fn list_results(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let results = sqlx::query_as::<_, QuizResult>(
        r#"
        SELECT id, student_name, student_group, score, timestamp
        FROM results
        ORDER BY timestamp DESC, id DESC
        "#,
    )
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch results: {:?}", e);
        AppError::from(e)
    })?;

    Ok(Json(group_by_student_group(results)))
}
