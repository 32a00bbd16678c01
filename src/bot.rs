// src/bot.rs

use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, UpdateKind},
    utils::command::BotCommands,
};

use crate::config::Config;

/// Commands understood by the notification bot.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "открыть приложение с тестами")]
    Start,
}

const START_TEXT: &str = "Привет! Нажми кнопку ниже 👇";
const BUTTON_TEXT: &str = "🚀 Открыть мини-апку";

/// Replies to /start with a single inline button deep-linking to the
/// web app. The bot shares nothing with the quiz flow except this URL.
pub async fn answer(bot: Bot, msg: Message, command: Command, config: Config) -> ResponseResult<()> {
    match command {
        Command::Start => {
            let keyboard = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::url(
                BUTTON_TEXT,
                config.app_url.clone(),
            )]]);

            bot.send_message(msg.chat.id, START_TEXT)
                .reply_markup(keyboard)
                .await?;
        }
    }
    Ok(())
}

/// Entry point for updates arriving over the webhook route.
///
/// Parses the command out of the message text; anything that is not a
/// known command is acknowledged and dropped.
pub async fn handle_update(bot: &Bot, config: &Config, update: Update) -> ResponseResult<()> {
    if let UpdateKind::Message(msg) = update.kind {
        if let Some(text) = msg.text() {
            if let Ok(command) = Command::parse(text, "") {
                return answer(bot.clone(), msg, command, config.clone()).await;
            }
        }
    }
    Ok(())
}
