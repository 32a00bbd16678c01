// src/routes.rs

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{
    handlers::{quiz, results, webhook},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Static pages for the student quiz and the teacher dashboard.
/// * JSON API routes for generation, submission and dashboard data.
/// * The Telegram webhook on its configured path.
/// * Global middleware (Trace, CORS) and shared state.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let webhook_path = state.config.webhook_path.clone();

    Router::new()
        .route_service("/", ServeFile::new("static/index.html"))
        .route_service("/teacher", ServeFile::new("static/teacher.html"))
        .nest_service("/static", ServeDir::new("static"))
        .route("/generate_test", post(quiz::generate_test))
        .route("/save_result", post(results::save_result))
        .route("/results", get(results::list_results))
        .route(&webhook_path, post(webhook::telegram_webhook))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
