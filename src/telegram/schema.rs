//! Dispatcher schema and update handlers
//!
//! Builds the handler tree used with teloxide's Dispatcher: one branch for
//! text messages (media gate → command parse → router) and one for callback
//! queries (codec → callback manager). The same schema serves production and
//! integration tests.

use std::sync::Arc;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use crate::callback::manager::CallbackManager;
use crate::command::router::CommandRouter;
use crate::command::parse_command;
use crate::core::types::{
    ChatKind, CommandInput, ExtractedMessageData, MessageKind, Platform, UserRef,
};
use crate::middleware::check_media_restriction;

use super::adapter::TelegramAdapter;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by update handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub callbacks: Arc<CallbackManager>,
    pub router: Arc<CommandRouter>,
}

/// Creates the main dispatcher schema for the Telegram bot
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_messages = deps.clone();
    let deps_callback = deps;

    dptree::entry()
        .branch(Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
            let deps = deps_messages.clone();
            async move { handle_telegram_message(bot, msg, deps).await }
        }))
        .branch(Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
            let deps = deps_callback.clone();
            async move { handle_telegram_callback(bot, q, deps).await }
        }))
}

/// Decodes a teloxide message into the neutral boundary shape
pub fn extract_message_data(msg: &Message) -> ExtractedMessageData {
    let chat_kind = if msg.chat.is_private() {
        ChatKind::Private
    } else if msg.chat.is_supergroup() {
        ChatKind::Supergroup
    } else if msg.chat.is_channel() {
        ChatKind::Channel
    } else {
        ChatKind::Group
    };

    // Private chats have no title; build one from the person's name
    let chat_title = if chat_kind == ChatKind::Private {
        match (msg.chat.first_name(), msg.chat.last_name()) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(first), None) => Some(first.to_string()),
            _ => None,
        }
    } else {
        msg.chat.title().map(str::to_string)
    };

    ExtractedMessageData {
        message_id: msg.id.0,
        chat_id: msg.chat.id.0.to_string(),
        chat_kind,
        chat_title,
        chat_username: msg.chat.username().map(str::to_string),
        text: msg.text().map(str::to_string),
        kind: classify_message(msg),
        reply_to_id: msg.reply_to_message().map(|m| m.id.0.to_string()),
    }
}

fn classify_message(msg: &Message) -> MessageKind {
    if msg.text().is_some() {
        MessageKind::Text
    } else if msg.photo().is_some() {
        MessageKind::Photo
    } else if msg.video().is_some() {
        MessageKind::Video
    } else if msg.document().is_some() {
        MessageKind::Document
    } else if msg.audio().is_some() {
        MessageKind::Audio
    } else if msg.voice().is_some() {
        MessageKind::Voice
    } else if msg.location().is_some() {
        MessageKind::Location
    } else if msg.contact().is_some() {
        MessageKind::Contact
    } else if msg.poll().is_some() {
        MessageKind::Poll
    } else {
        MessageKind::Other
    }
}

fn user_ref(msg: &Message) -> Option<UserRef> {
    msg.from.as_ref().map(|user| UserRef {
        id: user.id.0.to_string(),
        name: Some(user.first_name.clone()),
    })
}

/// Handler for inbound text messages
pub async fn handle_telegram_message(bot: Bot, msg: Message, deps: HandlerDeps) -> Result<(), HandlerError> {
    let adapter = TelegramAdapter::new(bot);
    let extracted = extract_message_data(&msg);

    log::debug!(
        "Message received (chat: {}, kind: {:?})",
        extracted.chat_id,
        extracted.kind
    );

    let mut input = CommandInput {
        platform: Some(Platform::Telegram),
        user: user_ref(&msg),
        raw: Some(extracted),
        message_id: Some(msg.id.0),
        ..Default::default()
    };

    // The media gate can short-circuit before any command parsing happens
    if let Some(output) = check_media_restriction(&input) {
        adapter.send(msg.chat.id, &output).await?;
        return Ok(());
    }

    let Some(text) = msg.text() else {
        return Ok(());
    };
    let Some(parsed) = parse_command(text) else {
        return Ok(());
    };

    log::debug!("Command parsed: {} (args: {:?})", parsed.command, parsed.args);
    input.args = parsed.args;

    let output = deps.router.route(&parsed.command, input).await;
    if output.is_empty() {
        log::warn!("No output for command /{}; skipping message", parsed.command);
        return Ok(());
    }

    adapter.send(msg.chat.id, &output).await?;
    Ok(())
}

/// Handler for inline-button taps
pub async fn handle_telegram_callback(bot: Bot, q: CallbackQuery, deps: HandlerDeps) -> Result<(), HandlerError> {
    let callback_id = q.id.clone();

    if let (Some(message), Some(data)) = (q.message.as_ref(), q.data.as_deref()) {
        let chat_id = message.chat().id;
        let message_id = message.id();

        log::info!(
            "Callback received: {:?} (chat: {}, user: {})",
            data,
            chat_id,
            q.from.id
        );

        let adapter = TelegramAdapter::new(bot.clone());
        adapter
            .handle_callback(data, chat_id, message_id, &q.from, &deps.callbacks)
            .await?;
    }

    // Acknowledge so the client stops the button spinner
    bot.answer_callback_query(callback_id).await?;
    Ok(())
}
