//! Telegram platform adapter
//!
//! Renders [`CommandOutput`] into Telegram messages: converts keyboards
//! through the callback codec, shares locations, maps formats to parse modes
//! and falls back to plain text when formatted delivery fails. Also hosts the
//! callback dispatch entry for inline-button taps.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{
    ChatId, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup, MessageId,
    ParseMode, ReplyMarkup, User,
};
use url::Url;

use crate::callback::codec::{self, MAX_CALLBACK_DATA_BYTES};
use crate::callback::manager::CallbackManager;
use crate::core::error::{BotError, BotResult};
use crate::core::types::{
    CommandInput, CommandOutput, InteractionKeyboard, MessageFormat, Platform, UserRef,
};
use crate::platform::PlatformAdapter;
use crate::presentation::messages;

pub struct TelegramAdapter {
    bot: Bot,
}

impl TelegramAdapter {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn parse_mode(format: MessageFormat) -> Option<ParseMode> {
        match format {
            MessageFormat::Plain => None,
            MessageFormat::Markdown => Some(ParseMode::Markdown),
            MessageFormat::Html => Some(ParseMode::Html),
        }
    }

    fn convert_button(button: &crate::core::types::InteractionButton) -> Option<InlineKeyboardButton> {
        if let Some(data) = &button.callback_data {
            let wire = codec::serialize(data);
            if wire.len() > MAX_CALLBACK_DATA_BYTES {
                // The platform rejects oversized payloads outright
                log::warn!(
                    "Callback data exceeds {} bytes, button dropped: {}",
                    MAX_CALLBACK_DATA_BYTES,
                    wire
                );
                return None;
            }
            return Some(InlineKeyboardButton::callback(button.text.clone(), wire));
        }

        if let Some(url) = &button.url {
            return match Url::parse(url) {
                Ok(parsed) => Some(InlineKeyboardButton::url(button.text.clone(), parsed)),
                Err(e) => {
                    log::warn!("Invalid URL button dropped ({}): {}", url, e);
                    None
                }
            };
        }

        None
    }

    fn convert_keyboard(keyboard: &InteractionKeyboard) -> Option<ReplyMarkup> {
        if keyboard.inline {
            Some(ReplyMarkup::InlineKeyboard(Self::inline_markup(keyboard)))
        } else {
            let rows = keyboard
                .buttons
                .iter()
                .map(|row| row.iter().map(|b| KeyboardButton::new(b.text.clone())).collect())
                .collect::<Vec<Vec<_>>>();
            Some(ReplyMarkup::Keyboard(
                KeyboardMarkup::new(rows).resize_keyboard().one_time_keyboard(),
            ))
        }
    }

    fn inline_markup(keyboard: &InteractionKeyboard) -> InlineKeyboardMarkup {
        let rows = keyboard
            .buttons
            .iter()
            .map(|row| row.iter().filter_map(Self::convert_button).collect())
            .collect::<Vec<Vec<_>>>();
        InlineKeyboardMarkup::new(rows)
    }

    /// Sends a fresh message (location first when present)
    pub async fn send(&self, chat_id: ChatId, output: &CommandOutput) -> BotResult<()> {
        if let Some(location) = output.location {
            self.bot
                .send_location(chat_id, location.latitude, location.longitude)
                .await?;
        }

        let markup = output.keyboard.as_ref().and_then(Self::convert_keyboard);
        let bodies: Vec<&str> = if output.messages.is_empty() {
            vec![output.text.as_str()]
        } else {
            output.messages.iter().map(String::as_str).collect()
        };

        for body in bodies {
            let mut request = self.bot.send_message(chat_id, body);
            if let Some(mode) = Self::parse_mode(output.format) {
                request = request.parse_mode(mode);
            }
            if let Some(markup) = markup.clone() {
                request = request.reply_markup(markup);
            }

            if let Err(e) = request.await {
                log::error!("Failed to send formatted message to {}: {}", chat_id, e);
                // Plain-text fallback so the user still gets an answer
                self.bot.send_message(chat_id, strip_formatting(body)).await?;
            }
        }

        Ok(())
    }

    /// Edits a message in place, falling back to a fresh send
    pub async fn edit(&self, chat_id: ChatId, message_id: MessageId, output: &CommandOutput) -> BotResult<()> {
        // Location payloads cannot be edited into an existing text message
        if output.location.is_some() {
            return self.send(chat_id, output).await;
        }

        let mut request = self.bot.edit_message_text(chat_id, message_id, &output.text);
        if let Some(mode) = Self::parse_mode(output.format) {
            request = request.parse_mode(mode);
        }
        if let Some(keyboard) = output.keyboard.as_ref().filter(|k| k.inline) {
            request = request.reply_markup(Self::inline_markup(keyboard));
        }

        if let Err(e) = request.await {
            log::warn!("Failed to edit message {} in chat {}: {}", message_id, chat_id, e);
            return self.send(chat_id, output).await;
        }

        Ok(())
    }

    /// Dispatch entry for an inline-button tap
    ///
    /// Decode failure is terminal for the event: the user gets the generic
    /// "could not process" reply and the tap is dropped, never retried.
    pub async fn handle_callback(
        &self,
        raw: &str,
        chat_id: ChatId,
        message_id: MessageId,
        user: &User,
        callbacks: &CallbackManager,
    ) -> BotResult<()> {
        let data = match codec::deserialize(raw) {
            Ok(data) => data,
            Err(e) => {
                log::error!("Failed to decode callback data {:?}: {}", raw, e);
                self.send(chat_id, &CommandOutput::html(messages::errors::ACTION_PROCESS_ERROR))
                    .await?;
                return Ok(());
            }
        };

        let input = CommandInput {
            platform: Some(Platform::Telegram),
            user: Some(UserRef {
                id: user.id.0.to_string(),
                name: Some(user.first_name.clone()),
            }),
            message_id: Some(message_id.0),
            ..Default::default()
        };

        let output = callbacks.handle_callback(data, input).await;
        if output.is_empty() {
            return Ok(());
        }

        if output.edit_message {
            self.edit(chat_id, message_id, &output).await
        } else {
            self.send(chat_id, &output).await
        }
    }
}

#[async_trait]
impl PlatformAdapter for TelegramAdapter {
    async fn send_message(&self, chat_id: &str, output: &CommandOutput) -> BotResult<()> {
        let id = parse_chat_id(chat_id)?;
        self.send(id, output).await
    }

    async fn edit_message(&self, chat_id: &str, message_id: &str, output: &CommandOutput) -> BotResult<()> {
        let id = parse_chat_id(chat_id)?;
        let message_id = message_id
            .parse::<i32>()
            .map_err(|_| BotError::Validation(format!("invalid message id: {}", message_id)))?;
        self.edit(id, MessageId(message_id), output).await
    }
}

fn parse_chat_id(chat_id: &str) -> BotResult<ChatId> {
    chat_id
        .parse::<i64>()
        .map(ChatId)
        .map_err(|_| BotError::Validation(format!("invalid chat id: {}", chat_id)))
}

/// Strips HTML tags and markdown markers for the plain-text fallback path
fn strip_formatting(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            '*' | '_' | '`' if !in_tag => {}
            c if !in_tag => result.push(c),
            _ => {}
        }
    }
    result
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_formatting_removes_tags_and_markers() {
        assert_eq!(strip_formatting("<b>Olá</b> *mundo*"), "Olá mundo");
        assert_eq!(strip_formatting("a &lt; b &amp; c"), "a < b & c");
    }

    #[test]
    fn test_parse_chat_id() {
        assert!(parse_chat_id("123456").is_ok());
        assert!(parse_chat_id("-1001234").is_ok());
        assert!(parse_chat_id("abc").is_err());
    }

    #[test]
    fn test_parse_mode_mapping() {
        assert_eq!(TelegramAdapter::parse_mode(MessageFormat::Plain), None);
        assert_eq!(
            TelegramAdapter::parse_mode(MessageFormat::Html),
            Some(ParseMode::Html)
        );
    }
}
