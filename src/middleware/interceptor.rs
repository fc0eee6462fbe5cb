//! Message interception hooks around command dispatch
//!
//! Currently a no-op extension point: the router calls `incoming` before a
//! handler runs and `outgoing` after the output exists. Future message
//! persistence hangs off these hooks without touching the router.

use crate::core::types::{CommandInput, CommandOutput};

#[derive(Default)]
pub struct MessageInterceptor;

impl MessageInterceptor {
    pub fn new() -> Self {
        Self
    }

    /// Pre-dispatch hook; must never fail the request
    pub async fn incoming(&self, input: &CommandInput) {
        log::debug!(
            "Intercepting incoming message (platform: {:?}, user: {:?})",
            input.platform,
            input.user_id()
        );
    }

    /// Post-dispatch hook; must never fail the request
    pub async fn outgoing(&self, input: &CommandInput, output: &CommandOutput) {
        log::debug!(
            "Intercepting outgoing message (user: {:?}, chars: {})",
            input.user_id(),
            output.text.len()
        );
    }
}
