//! Media restriction gate
//!
//! Runs before command parsing: non-text messages short-circuit dispatch with
//! an explanatory reply. Classification errors fail open so a malformed
//! payload never blocks a real user.

use crate::core::types::{CommandInput, CommandOutput, MessageKind};
use crate::presentation::messages::basic;

const RESTRICTED_KINDS: [MessageKind; 9] = [
    MessageKind::Photo,
    MessageKind::Video,
    MessageKind::Document,
    MessageKind::Audio,
    MessageKind::Voice,
    MessageKind::Location,
    MessageKind::Contact,
    MessageKind::Poll,
    MessageKind::Other,
];

/// Returns the short-circuit response for restricted media, or `None` to
/// continue dispatch
pub fn check_media_restriction(input: &CommandInput) -> Option<CommandOutput> {
    let kind = input.raw.as_ref().map(|raw| raw.kind)?;

    if RESTRICTED_KINDS.contains(&kind) {
        log::info!(
            "Media restriction triggered (kind: {:?}, platform: {:?}, user: {:?})",
            kind,
            input.platform,
            input.user_id()
        );
        return Some(CommandOutput::html(basic::MEDIA_RESTRICTION));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ChatKind, ExtractedMessageData};

    fn input_with_kind(kind: MessageKind) -> CommandInput {
        CommandInput {
            raw: Some(ExtractedMessageData {
                message_id: 1,
                chat_id: "100".to_string(),
                chat_kind: ChatKind::Private,
                chat_title: None,
                chat_username: None,
                text: None,
                kind,
                reply_to_id: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_text_passes() {
        assert!(check_media_restriction(&input_with_kind(MessageKind::Text)).is_none());
    }

    #[test]
    fn test_media_kinds_short_circuit() {
        for kind in RESTRICTED_KINDS {
            let output = check_media_restriction(&input_with_kind(kind))
                .unwrap_or_else(|| panic!("{:?} should be restricted", kind));
            assert!(output.text.contains("Apenas mensagens de texto"));
        }
    }

    #[test]
    fn test_missing_raw_fails_open() {
        assert!(check_media_restriction(&CommandInput::default()).is_none());
    }
}
