//! Callback-data codec and dispatch core
//!
//! The pipeline: an opaque ≤64-byte wire string arrives from the platform,
//! [`codec`] decodes it into a [`data::CallbackData`] variant, and
//! [`manager`] routes it to the first registered handler that accepts it.
//! [`registry`] owns the one-time, idempotent registration pass.

pub mod codec;
pub mod data;
pub mod handlers;
pub mod manager;
pub mod registry;

pub use data::CallbackData;
pub use manager::{CallbackHandler, CallbackManager};
pub use registry::CallbackRegistry;
