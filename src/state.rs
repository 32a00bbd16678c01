use crate::config::Config;
use crate::services::gemini::QuizGenerator;
use axum::extract::FromRef;
use sqlx::SqlitePool;
use teloxide::Bot;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
    pub generator: QuizGenerator,
    pub bot: Bot,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for QuizGenerator {
    fn from_ref(state: &AppState) -> Self {
        state.generator.clone()
    }
}

impl FromRef<AppState> for Bot {
    fn from_ref(state: &AppState) -> Self {
        state.bot.clone()
    }
}
