//! Core utilities: configuration, errors, logging, health, alerts and the
//! request/response envelopes

pub mod alerts;
pub mod config;
pub mod error;
pub mod health;
pub mod logging;
pub mod types;

pub use error::{BotError, BotResult};
pub use logging::{init_logger, log_startup_configuration};
