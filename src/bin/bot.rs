// src/bin/bot.rs
//
// Standalone long-polling process for the notification bot. The web app
// exposes the same handler behind its webhook route; this binary is for
// deployments where no public HTTPS endpoint is available.

use quizgen_backend::bot::{self, Command};
use quizgen_backend::config::Config;
use teloxide::prelude::*;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.rust_log))
        .with(fmt::layer().with_target(false))
        .init();

    tracing::info!("Starting notification bot...");

    let bot = Bot::new(config.telegram_bot_token.clone());

    let handler = Update::filter_message()
        .filter_command::<Command>()
        .endpoint(bot::answer);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![config])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
