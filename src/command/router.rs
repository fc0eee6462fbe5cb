//! Command routing: keyword lookup, interception hooks, failure conversion
//!
//! The registry is populated lazily on the first dispatch and reused for the
//! life of the process. Population failures are logged, never fatal; routing
//! continues with whatever registered successfully.

use std::sync::{Arc, OnceLock};

use crate::core::types::{CommandInput, CommandOutput};
use crate::middleware::interceptor::MessageInterceptor;
use crate::presentation::messages;
use crate::services::analytics::AnalyticsApiService;
use crate::services::favorites::FavoriteApiService;
use crate::services::races::RaceApiService;

use super::basic;
use super::races;
use super::registry::{boxed, CommandRegistry};

/// Services command handlers close over
#[derive(Clone)]
pub struct CommandDeps {
    pub races: Arc<RaceApiService>,
    pub favorites: Arc<FavoriteApiService>,
    pub analytics: Arc<AnalyticsApiService>,
}

/// Routes slash-command keywords to their handlers
pub struct CommandRouter {
    deps: CommandDeps,
    interceptor: MessageInterceptor,
    registry: OnceLock<CommandRegistry>,
}

impl CommandRouter {
    pub fn new(deps: CommandDeps) -> Self {
        Self {
            deps,
            interceptor: MessageInterceptor::new(),
            registry: OnceLock::new(),
        }
    }

    /// The populated registry, built on first use
    fn registry(&self) -> &CommandRegistry {
        self.registry.get_or_init(|| {
            log::info!("Registrando comandos automaticamente...");
            let registry = build_default_registry(&self.deps);
            log::info!("Total de {} comandos registrados", registry.len());
            registry
        })
    }

    /// Dispatches one command, always yielding a well-formed output
    pub async fn route(&self, command: &str, input: CommandInput) -> CommandOutput {
        self.interceptor.incoming(&input).await;

        let output = match self.registry().get_handler(command) {
            Some(handler) => {
                log::info!("Executando comando /{} (user: {:?})", command, input.user_id());
                match handler(input.clone()).await {
                    Ok(output) => output,
                    Err(e) => {
                        log::error!(
                            "Erro ao executar comando /{} (user: {:?}): {}",
                            command,
                            input.user_id(),
                            e
                        );
                        CommandOutput::html(messages::errors::INTERNAL_ERROR)
                    }
                }
            }
            None => {
                log::warn!("Comando não encontrado: /{} (user: {:?})", command, input.user_id());
                CommandOutput::html(messages::errors::COMMAND_NOT_FOUND)
            }
        };

        self.interceptor.outgoing(&input, &output).await;
        output
    }

    /// Sorted keywords, for help-text generation
    pub fn available_commands(&self) -> Vec<String> {
        self.registry().all_commands()
    }
}

/// The default command table: one registration pass, aliases included
fn build_default_registry(deps: &CommandDeps) -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    registry.register("start", boxed(basic::start_command));
    registry.register_aliases(&["ajuda", "help"], boxed(basic::help_command));
    registry.register_aliases(&["contato", "contact"], boxed(basic::contact_command));
    registry.register_aliases(&["sobre", "about"], boxed(basic::about_command));
    registry.register_aliases(&["patrocinio", "sponsorship"], boxed(basic::sponsorship_command));

    let race_service = Arc::clone(&deps.races);
    registry.register_aliases(
        &["corridas", "races", "listraces"],
        boxed(move |input| {
            let race_service = Arc::clone(&race_service);
            async move { races::list_races_command(&race_service, input).await }
        }),
    );

    let favorites = Arc::clone(&deps.favorites);
    let analytics = Arc::clone(&deps.analytics);
    registry.register_aliases(
        &["favoritos", "favoritas", "favorites"],
        boxed(move |input| {
            let favorites = Arc::clone(&favorites);
            let analytics = Arc::clone(&analytics);
            async move { races::list_favorite_races_command(&favorites, &analytics, input).await }
        }),
    );

    registry
}
