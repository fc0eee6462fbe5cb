//! Idempotent handler registration for the callback dispatch table
//!
//! Registration happens once during startup; re-registering the same handler
//! identity is a warning and a no-op, never an error, so modules can register
//! defensively without double-dispatching taps.

use std::collections::HashSet;
use std::sync::Arc;

use super::manager::{CallbackHandler, CallbackManager};

/// Builder for a populated [`CallbackManager`]
#[derive(Default)]
pub struct CallbackRegistry {
    manager: CallbackManager,
    registered: HashSet<&'static str>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler, keyed by its stable name
    ///
    /// Returns true when the handler was newly registered, false when the
    /// identity was already present (logged as a warning).
    pub fn register(&mut self, handler: Arc<dyn CallbackHandler>) -> bool {
        let name = handler.name();
        if !self.registered.insert(name) {
            log::warn!("Handler {} já foi registrado", name);
            return false;
        }

        self.manager.register(handler);
        log::debug!("Callback handler registrado: {}", name);
        true
    }

    /// Names of all active handlers, in registration order is not guaranteed
    pub fn registered_handlers(&self) -> Vec<&'static str> {
        self.registered.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.manager.len()
    }

    pub fn is_empty(&self) -> bool {
        self.manager.is_empty()
    }

    /// Finishes registration and hands the read-only dispatch table over
    pub fn into_manager(self) -> CallbackManager {
        log::info!("Total de {} callback handlers registrados", self.manager.len());
        self.manager
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::data::CallbackData;
    use crate::core::error::BotResult;
    use crate::core::types::{CommandInput, CommandOutput};
    use async_trait::async_trait;

    struct StubHandler;

    #[async_trait]
    impl CallbackHandler for StubHandler {
        fn name(&self) -> &'static str {
            "StubHandler"
        }

        fn can_handle(&self, _data: &CallbackData) -> bool {
            true
        }

        async fn handle(&self, _input: CommandInput) -> BotResult<CommandOutput> {
            Ok(CommandOutput::default())
        }
    }

    #[test]
    fn test_duplicate_registration_is_a_noop() {
        let mut registry = CallbackRegistry::new();

        assert!(registry.register(Arc::new(StubHandler)));
        assert!(!registry.register(Arc::new(StubHandler)));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.registered_handlers(), vec!["StubHandler"]);
    }

    #[test]
    fn test_into_manager_keeps_single_registration() {
        let mut registry = CallbackRegistry::new();
        registry.register(Arc::new(StubHandler));
        registry.register(Arc::new(StubHandler));

        let manager = registry.into_manager();
        assert_eq!(manager.len(), 1);
    }
}
