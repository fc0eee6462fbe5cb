//! Callback dispatch: resolves decoded callback data to its handler
//!
//! Handlers are scanned in registration order and the first one whose
//! `can_handle` accepts the data wins, so predicates must stay mutually
//! exclusive per variant. The manager is populated once at startup and only
//! read afterwards; concurrent events share it without locking.

use std::sync::Arc;

use async_trait::async_trait;

use crate::callback::data::CallbackData;
use crate::core::error::BotResult;
use crate::core::types::{CommandInput, CommandOutput};
use crate::presentation::messages;

/// A unit of business logic bound to one or more callback variants
#[async_trait]
pub trait CallbackHandler: Send + Sync {
    /// Stable identity used for idempotent registration and logging
    fn name(&self) -> &'static str;

    /// Whether this handler accepts the given callback data
    fn can_handle(&self, data: &CallbackData) -> bool;

    /// Executes the interaction; may suspend on backend calls
    async fn handle(&self, input: CommandInput) -> BotResult<CommandOutput>;
}

/// Dispatches decoded callback data to the first matching handler
#[derive(Default)]
pub struct CallbackManager {
    handlers: Vec<Arc<dyn CallbackHandler>>,
}

impl CallbackManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler; resolution order is registration order
    pub(crate) fn register(&mut self, handler: Arc<dyn CallbackHandler>) {
        self.handlers.push(handler);
    }

    /// Number of active handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Resolves and invokes the handler for `data`
    ///
    /// Never propagates handler failures: a missing handler yields the
    /// "action not found" response and an execution error is logged and
    /// converted to a generic error response, so the platform adapter always
    /// receives a well-formed output.
    pub async fn handle_callback(&self, data: CallbackData, input: CommandInput) -> CommandOutput {
        let handler = match self.handlers.iter().find(|h| h.can_handle(&data)) {
            Some(handler) => handler,
            None => {
                log::warn!(
                    "No handler found for callback type: {} (user: {:?})",
                    data.kind(),
                    input.user_id()
                );
                return CommandOutput::html(messages::errors::ACTION_NOT_FOUND);
            }
        };

        let kind = data.kind();
        let handler_name = handler.name();
        let user_id = input.user_id().map(str::to_string);

        let merged = CommandInput {
            callback_data: Some(data),
            ..input
        };

        match handler.handle(merged).await {
            Ok(output) => output,
            Err(e) => {
                log::error!(
                    "Callback handler {} failed for {} (user: {:?}): {}",
                    handler_name,
                    kind,
                    user_id,
                    e
                );
                CommandOutput::html_edit(messages::errors::INTERNAL_ERROR)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::data::Uf;
    use crate::core::error::BotError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RecordingHandler {
        name: &'static str,
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    #[async_trait]
    impl CallbackHandler for RecordingHandler {
        fn name(&self) -> &'static str {
            self.name
        }

        fn can_handle(&self, data: &CallbackData) -> bool {
            matches!(data, CallbackData::UfFilter { .. })
        }

        async fn handle(&self, _input: CommandInput) -> BotResult<CommandOutput> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(BotError::Validation("boom".to_string()));
            }
            Ok(CommandOutput::html(self.name))
        }
    }

    fn recording(name: &'static str, fail: bool) -> (Arc<RecordingHandler>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let handler = Arc::new(RecordingHandler {
            name,
            calls: Arc::clone(&calls),
            fail,
        });
        (handler, calls)
    }

    #[tokio::test]
    async fn test_first_match_wins() {
        let (first, first_calls) = recording("first", false);
        let (second, second_calls) = recording("second", false);

        let mut manager = CallbackManager::new();
        manager.register(first);
        manager.register(second);

        let output = manager
            .handle_callback(CallbackData::uf_filter(Uf::Sp), CommandInput::default())
            .await;

        assert_eq!(output.text, "first");
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_no_handler_yields_not_found_output() {
        let manager = CallbackManager::new();
        let output = manager
            .handle_callback(CallbackData::races_list_favorite(), CommandInput::default())
            .await;

        assert!(output.text.contains("não encontrada"));
    }

    #[tokio::test]
    async fn test_handler_error_is_converted_not_propagated() {
        let (failing, calls) = recording("failing", true);
        let mut manager = CallbackManager::new();
        manager.register(failing);

        let output = manager
            .handle_callback(CallbackData::uf_filter(Uf::Pr), CommandInput::default())
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(output.text.contains("Erro interno"));
    }

    #[tokio::test]
    async fn test_callback_data_is_merged_into_input() {
        struct EchoHandler;

        #[async_trait]
        impl CallbackHandler for EchoHandler {
            fn name(&self) -> &'static str {
                "echo"
            }

            fn can_handle(&self, data: &CallbackData) -> bool {
                matches!(data, CallbackData::RacesFilter { .. })
            }

            async fn handle(&self, input: CommandInput) -> BotResult<CommandOutput> {
                match input.callback_data {
                    Some(CallbackData::RacesFilter { distance }) => {
                        Ok(CommandOutput::html(distance.to_string()))
                    }
                    other => Ok(CommandOutput::html(format!("unexpected: {:?}", other))),
                }
            }
        }

        let mut manager = CallbackManager::new();
        manager.register(Arc::new(EchoHandler));

        let output = manager
            .handle_callback(CallbackData::races_filter(21), CommandInput::default())
            .await;
        assert_eq!(output.text, "21");
    }
}
