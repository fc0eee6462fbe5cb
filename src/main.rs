use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;

use dashbot::callback::handlers::register_default_handlers;
use dashbot::callback::CallbackRegistry;
use dashbot::command::{CommandDeps, CommandRouter};
use dashbot::core::alerts::AlertService;
use dashbot::core::{config, health, init_logger, log_startup_configuration};
use dashbot::services::{AnalyticsApiService, FavoriteApiService, HttpClient, RaceApiService};
use dashbot::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present
    let _ = dotenv();

    init_logger(&config::LOG_FILE_PATH)?;
    log::info!("Iniciando DashBot...");
    log_startup_configuration();

    // Health check server runs for the whole process lifetime
    let health_port = config::health::port();
    tokio::spawn(async move {
        if let Err(e) = health::start_health_server(health_port).await {
            log::error!("Health server failed: {}", e);
        }
    });

    // Backend API services, shared by both routers
    let http = Arc::new(HttpClient::from_config().map_err(|e| anyhow::anyhow!(e.to_string()))?);
    let races = Arc::new(RaceApiService::new(Arc::clone(&http)));
    let favorites = Arc::new(FavoriteApiService::new(Arc::clone(&http)));
    let analytics = Arc::new(AnalyticsApiService::new(Arc::clone(&http)));

    // One-time callback handler registration pass
    log::info!("Inicializando sistema de callbacks...");
    let mut registry = CallbackRegistry::new();
    register_default_handlers(&mut registry, &races, &favorites, &analytics);
    let callbacks = Arc::new(registry.into_manager());

    let router = Arc::new(CommandRouter::new(CommandDeps {
        races,
        favorites,
        analytics,
    }));

    let platform = config::BOT_PLATFORM.as_str();
    if platform != "telegram" {
        // The WhatsApp transport is a stub; only Telegram can poll for updates
        anyhow::bail!(
            "Unsupported BOT_PLATFORM {:?}. Supported platforms: [\"telegram\"]",
            platform
        );
    }

    let bot = create_bot()?;
    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    let alerts = Arc::new(AlertService::from_config(bot.clone()));
    let started_at = Instant::now();

    // Startup alert goes out after the dispatcher has had time to settle
    let startup_alerts = Arc::clone(&alerts);
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(config::alerts::STARTUP_ALERT_DELAY_SECS)).await;
        startup_alerts.send_startup_alert("telegram").await;
    });

    let deps = HandlerDeps { callbacks, router };

    log::info!("Telegram bot is running...");
    Dispatcher::builder(bot, schema(deps))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    // Dispatcher returned: ctrl-c or a fatal polling error
    log::info!("Dispatcher stopped, shutting down gracefully...");
    alerts.send_shutdown_alert(started_at.elapsed().as_secs()).await;
    log::info!("DashBot encerrado.");

    Ok(())
}
