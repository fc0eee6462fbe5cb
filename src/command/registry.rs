//! Command registry: exact-keyword lookup table for slash commands
//!
//! Aliases map several keywords to the same handler `Arc`, so
//! `/corridas`, `/races` and `/listraces` are literally the same function.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::core::error::BotResult;
use crate::core::types::{CommandInput, CommandOutput};

type CommandFuture = Pin<Box<dyn Future<Output = BotResult<CommandOutput>> + Send>>;

/// A registered command handler function
pub type CommandHandlerFn = Arc<dyn Fn(CommandInput) -> CommandFuture + Send + Sync>;

/// Wraps an async fn (or capturing closure) into a registrable handler
pub fn boxed<F, Fut>(f: F) -> CommandHandlerFn
where
    F: Fn(CommandInput) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = BotResult<CommandOutput>> + Send + 'static,
{
    Arc::new(move |input| Box::pin(f(input)))
}

/// Keyword → handler table, populated once and read-only afterwards
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, CommandHandlerFn>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one keyword; duplicates warn and keep the first registration
    pub fn register(&mut self, name: &str, handler: CommandHandlerFn) {
        let key = name.to_lowercase();
        if self.commands.contains_key(&key) {
            log::warn!("Comando {} já foi registrado", key);
            return;
        }
        log::debug!("Comando registrado: {}", key);
        self.commands.insert(key, handler);
    }

    /// Registers several keywords for the same handler instance
    pub fn register_aliases(&mut self, names: &[&str], handler: CommandHandlerFn) {
        for name in names {
            self.register(name, Arc::clone(&handler));
        }
    }

    pub fn get_handler(&self, name: &str) -> Option<&CommandHandlerFn> {
        self.commands.get(&name.to_lowercase())
    }

    pub fn has_command(&self, name: &str) -> bool {
        self.commands.contains_key(&name.to_lowercase())
    }

    /// All registered keywords, sorted for help-text generation
    pub fn all_commands(&self) -> Vec<String> {
        let mut commands: Vec<String> = self.commands.keys().cloned().collect();
        commands.sort();
        commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_handler(calls: Arc<AtomicUsize>) -> CommandHandlerFn {
        Arc::new(move |_input| {
            let calls = Arc::clone(&calls);
            Box::pin(async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(CommandOutput::html("ok"))
            })
        })
    }

    #[tokio::test]
    async fn test_aliases_share_one_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = CommandRegistry::new();
        registry.register_aliases(&["corridas", "races", "listraces"], counting_handler(Arc::clone(&calls)));

        for name in ["corridas", "RACES", "listRaces"] {
            let handler = registry.get_handler(name).expect(name);
            let output = handler(CommandInput::default()).await.unwrap();
            assert_eq!(output.text, "ok");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        // Same underlying Arc behind every alias
        let a = registry.get_handler("corridas").unwrap();
        let b = registry.get_handler("races").unwrap();
        assert!(Arc::ptr_eq(a, b));
    }

    #[test]
    fn test_duplicate_keeps_first_registration() {
        let first_calls = Arc::new(AtomicUsize::new(0));
        let second_calls = Arc::new(AtomicUsize::new(0));

        let mut registry = CommandRegistry::new();
        registry.register("start", counting_handler(Arc::clone(&first_calls)));
        let first = Arc::clone(registry.get_handler("start").unwrap());
        registry.register("start", counting_handler(Arc::clone(&second_calls)));

        assert_eq!(registry.len(), 1);
        assert!(Arc::ptr_eq(&first, registry.get_handler("start").unwrap()));
    }

    #[test]
    fn test_all_commands_sorted() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = CommandRegistry::new();
        registry.register("sobre", counting_handler(Arc::clone(&calls)));
        registry.register("ajuda", counting_handler(Arc::clone(&calls)));
        registry.register("corridas", counting_handler(calls));

        assert_eq!(registry.all_commands(), vec!["ajuda", "corridas", "sobre"]);
    }
}
