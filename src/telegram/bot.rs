//! Bot instance creation and Telegram-side command menu setup

use reqwest::ClientBuilder;
use teloxide::prelude::*;
use teloxide::types::BotCommand;

use crate::core::config;

/// Creates a Bot instance with a timeout-configured HTTP client
pub fn create_bot() -> anyhow::Result<Bot> {
    let token = config::TELEGRAM_BOT_TOKEN.as_str();
    if token.is_empty() {
        anyhow::bail!("TELEGRAM_BOT_TOKEN is not set");
    }

    let client = ClientBuilder::new()
        .timeout(config::network::telegram_timeout())
        .build()?;

    Ok(Bot::with_client(token, client))
}

/// Registers the command menu shown by the Telegram client
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(vec![
        BotCommand::new("start", "apresentação inicial do bot"),
        BotCommand::new("corridas", "lista todas as corridas disponíveis"),
        BotCommand::new("favoritos", "suas corridas favoritas"),
        BotCommand::new("ajuda", "central de ajuda"),
        BotCommand::new("contato", "informações de contato"),
        BotCommand::new("sobre", "sobre a VELOX e o bot"),
        BotCommand::new("patrocinio", "como patrocinar o projeto"),
    ])
    .await?;

    Ok(())
}
