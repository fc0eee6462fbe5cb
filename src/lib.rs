//! DashBot - chat-bot router for the VELOX running-race discovery service
//!
//! The core of this crate is the callback-data codec and dispatch pair: a
//! compact `:`-delimited encoding that packs UI interaction state into the
//! 64-byte inline-button budget, and the registries that route decoded
//! payloads and slash commands back to typed handlers.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging, health server, alerts, envelopes
//! - `callback`: callback data model, wire codec, handler registry, dispatch
//! - `command`: slash-command parsing, registry and router
//! - `services`: backend race/favorites/analytics API wrappers
//! - `presentation`: pt-BR texts, keyboards and view builders
//! - `middleware`: media gate and interception hooks
//! - `telegram` / `whatsapp`: platform adapters

pub mod callback;
pub mod command;
pub mod core;
pub mod middleware;
pub mod platform;
pub mod presentation;
pub mod services;
pub mod telegram;
pub mod whatsapp;

// Re-export commonly used types for convenience
pub use crate::callback::{CallbackData, CallbackManager, CallbackRegistry};
pub use crate::command::{CommandDeps, CommandRouter};
pub use crate::core::{BotError, BotResult};
