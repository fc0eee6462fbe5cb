//! Platform adapter contract
//!
//! Adapters render the generic [`CommandOutput`] into platform-specific
//! messages and keyboards. Chat ids travel as strings at this boundary:
//! Telegram ids are numeric, WhatsApp ids are not.

use async_trait::async_trait;

use crate::core::error::BotResult;
use crate::core::types::CommandOutput;

#[async_trait]
pub trait PlatformAdapter: Send + Sync {
    /// Delivers a fresh message to the chat
    async fn send_message(&self, chat_id: &str, output: &CommandOutput) -> BotResult<()>;

    /// Rewrites an existing message in place
    async fn edit_message(&self, chat_id: &str, message_id: &str, output: &CommandOutput) -> BotResult<()>;
}
