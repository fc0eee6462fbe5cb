//! Telegram integration: bot construction, adapter and dispatcher schema

pub mod adapter;
pub mod bot;
pub mod schema;

pub use adapter::TelegramAdapter;
pub use bot::{create_bot, setup_bot_commands};
pub use schema::{schema, HandlerDeps, HandlerError};
