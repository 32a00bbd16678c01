// src/config.rs

use dotenvy::dotenv;
use std::env;
use url::Url;

/// TLS termination mode, fixed at startup.
#[derive(Debug, Clone)]
pub enum TlsMode {
    /// The hosting platform terminates TLS; the app binds plain HTTP.
    Platform,
    /// Local development: serve HTTPS directly from mkcert files.
    Local { cert_path: String, key_path: String },
}

/// Immutable application configuration, built once in `main` and passed
/// into components through the shared state. Nothing reads the process
/// environment after startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub telegram_bot_token: String,
    pub webhook_path: String,
    pub app_url: Url,
    pub tls: TlsMode,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://results.db".to_string());

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());

        let gemini_api_key = env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set");

        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string());

        let gemini_api_base = env::var("GEMINI_API_BASE")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string());

        let telegram_bot_token =
            env::var("TELEGRAM_BOT_TOKEN").expect("TELEGRAM_BOT_TOKEN must be set");

        let webhook_path = env::var("WEBHOOK_PATH").unwrap_or_else(|_| "/webhook".to_string());

        let app_url: Url = env::var("APP_URL")
            .expect("APP_URL must be set")
            .parse()
            .expect("APP_URL must be a valid URL");

        // PLATFORM_TLS marks a deployment where the platform terminates
        // TLS in front of the app. Without it we serve HTTPS ourselves
        // from local mkcert files.
        let tls = if env::var("PLATFORM_TLS").is_ok() {
            TlsMode::Platform
        } else {
            TlsMode::Local {
                cert_path: env::var("TLS_CERT_PATH")
                    .unwrap_or_else(|_| "localhost+2.pem".to_string()),
                key_path: env::var("TLS_KEY_PATH")
                    .unwrap_or_else(|_| "localhost+2-key.pem".to_string()),
            }
        };

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            database_url,
            bind_addr,
            gemini_api_key,
            gemini_model,
            gemini_api_base,
            telegram_bot_token,
            webhook_path,
            app_url,
            tls,
            rust_log,
        }
    }
}
