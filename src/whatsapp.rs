//! WhatsApp adapter (stub)
//!
//! The WhatsApp transport is not wired yet; this module keeps the message
//! shape and the adapter surface in place so dispatch stays platform-neutral.
//! Sends are logged and dropped.

use async_trait::async_trait;
use serde::Deserialize;

use crate::core::error::BotResult;
use crate::core::types::{ChatKind, CommandOutput, ExtractedMessageData, MessageKind};
use crate::platform::PlatformAdapter;

/// Raw WhatsApp message shape
#[derive(Debug, Clone, Deserialize)]
pub struct WhatsAppMessage {
    pub id: String,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub message_type: String,
    pub timestamp: i64,
}

/// Decodes a WhatsApp message into the neutral boundary shape
pub fn extract_message_data(msg: &WhatsAppMessage) -> ExtractedMessageData {
    ExtractedMessageData {
        // WhatsApp ids are opaque strings; no numeric message id exists
        message_id: 0,
        chat_id: msg.from.clone(),
        chat_kind: ChatKind::Private,
        chat_title: None,
        chat_username: None,
        text: msg.text.clone(),
        kind: classify_message_type(&msg.message_type),
        reply_to_id: None,
    }
}

fn classify_message_type(message_type: &str) -> MessageKind {
    match message_type {
        "text" => MessageKind::Text,
        "image" => MessageKind::Photo,
        "video" => MessageKind::Video,
        "document" => MessageKind::Document,
        "audio" => MessageKind::Audio,
        "voice" => MessageKind::Voice,
        "location" => MessageKind::Location,
        "contact" => MessageKind::Contact,
        _ => MessageKind::Other,
    }
}

#[derive(Default)]
pub struct WhatsAppAdapter;

impl WhatsAppAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PlatformAdapter for WhatsAppAdapter {
    async fn send_message(&self, chat_id: &str, output: &CommandOutput) -> BotResult<()> {
        log::warn!(
            "WhatsApp transport not implemented; dropping message to {} ({} chars)",
            chat_id,
            output.text.len()
        );
        Ok(())
    }

    async fn edit_message(&self, chat_id: &str, message_id: &str, output: &CommandOutput) -> BotResult<()> {
        log::warn!(
            "WhatsApp transport not implemented; dropping edit of {} in {} ({} chars)",
            message_id,
            chat_id,
            output.text.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type_classification() {
        assert_eq!(classify_message_type("text"), MessageKind::Text);
        assert_eq!(classify_message_type("image"), MessageKind::Photo);
        assert_eq!(classify_message_type("sticker"), MessageKind::Other);
    }

    #[test]
    fn test_extraction_maps_sender_to_chat() {
        let msg = WhatsAppMessage {
            id: "wamid.1".to_string(),
            from: "5511999990000".to_string(),
            to: "5511888880000".to_string(),
            text: Some("/corridas".to_string()),
            message_type: "text".to_string(),
            timestamp: 1_755_000_000,
        };
        let extracted = extract_message_data(&msg);
        assert_eq!(extracted.chat_id, "5511999990000");
        assert_eq!(extracted.kind, MessageKind::Text);
        assert_eq!(extracted.text.as_deref(), Some("/corridas"));
    }
}
