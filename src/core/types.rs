//! Request/response envelopes shared by both routers and all platform adapters
//!
//! Raw platform message shapes never cross this boundary: adapters decode
//! whatever the platform hands them into [`ExtractedMessageData`] before
//! building a [`CommandInput`].

use crate::callback::data::CallbackData;

/// Chat platform an event arrived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Telegram,
    WhatsApp,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Telegram => "telegram",
            Platform::WhatsApp => "whatsapp",
        }
    }
}

/// The user behind an inbound event, as much as the platform tells us
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserRef {
    /// Platform user id, stringified (Telegram ids are numeric, WhatsApp ids are not)
    pub id: String,
    /// Display name, when available
    pub name: Option<String>,
}

/// Kind of an inbound message, after adapter classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Text,
    Photo,
    Video,
    Document,
    Audio,
    Voice,
    Location,
    Contact,
    Poll,
    Other,
}

/// Kind of chat the message arrived in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Channel,
}

/// Neutral view of an inbound platform message
///
/// This is the only message shape core dispatch ever sees; the Telegram and
/// WhatsApp adapters each produce it from their own raw payloads.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedMessageData {
    pub message_id: i32,
    pub chat_id: String,
    pub chat_kind: ChatKind,
    pub chat_title: Option<String>,
    pub chat_username: Option<String>,
    pub text: Option<String>,
    pub kind: MessageKind,
    pub reply_to_id: Option<String>,
}

/// Generic request envelope flowing into command and callback handlers
#[derive(Debug, Clone, Default)]
pub struct CommandInput {
    pub platform: Option<Platform>,
    pub user: Option<UserRef>,
    /// CLI-style arguments parsed from the command text
    pub args: Vec<String>,
    /// Neutral view of the raw inbound message, when one exists
    pub raw: Option<ExtractedMessageData>,
    /// Decoded callback data, present on the callback path
    pub callback_data: Option<CallbackData>,
    /// Message id of the tapped message, needed for edit-in-place
    pub message_id: Option<i32>,
}

impl CommandInput {
    /// Stringified user id, the key used by the favorites and analytics APIs
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }
}

/// Output text format tag, mapped to platform parse modes by adapters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessageFormat {
    #[default]
    Plain,
    Markdown,
    Html,
}

/// A single inline button: either callback-bearing or a raw URL link
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionButton {
    pub text: String,
    pub callback_data: Option<CallbackData>,
    pub url: Option<String>,
}

impl InteractionButton {
    pub fn callback(text: impl Into<String>, data: CallbackData) -> Self {
        Self {
            text: text.into(),
            callback_data: Some(data),
            url: None,
        }
    }

    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: None,
            url: Some(url.into()),
        }
    }
}

/// Ordered rows of buttons attached to a response
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionKeyboard {
    pub buttons: Vec<Vec<InteractionButton>>,
    /// Inline keyboards attach to the message; reply keyboards replace the input field
    pub inline: bool,
}

impl InteractionKeyboard {
    pub fn inline(buttons: Vec<Vec<InteractionButton>>) -> Self {
        Self { buttons, inline: true }
    }
}

/// Geographic coordinates for location-sharing responses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Generic response envelope produced by handlers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandOutput {
    pub text: String,
    pub format: MessageFormat,
    /// Additional message bodies sent after `text`, each as its own message
    pub messages: Vec<String>,
    pub keyboard: Option<InteractionKeyboard>,
    /// Edit the tapped message in place instead of sending a new one
    pub edit_message: bool,
    /// Coordinates to share alongside the text
    pub location: Option<GeoPoint>,
}

impl CommandOutput {
    /// Plain HTML text response
    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: MessageFormat::Html,
            ..Default::default()
        }
    }

    /// HTML text response that edits the originating message
    pub fn html_edit(text: impl Into<String>) -> Self {
        Self {
            edit_message: true,
            ..Self::html(text)
        }
    }

    pub fn with_keyboard(mut self, keyboard: InteractionKeyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    /// True when there is nothing to deliver; adapters skip these
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_output_detection() {
        assert!(CommandOutput::default().is_empty());
        assert!(!CommandOutput::html("oi").is_empty());
    }

    #[test]
    fn test_platform_tags() {
        assert_eq!(Platform::Telegram.as_str(), "telegram");
        assert_eq!(Platform::WhatsApp.as_str(), "whatsapp");
    }
}
