//! Health check HTTP server
//!
//! Runs alongside the bot so orchestrators can probe liveness. `/health`
//! answers 200 only while the Telegram API is reachable with our token;
//! `/health/detailed` adds process metadata.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tokio::net::TcpListener;

use crate::core::config;

#[derive(Clone)]
struct HealthState {
    started_at: Instant,
}

/// Start the health check server; runs until the process exits
pub async fn start_health_server(port: u16) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let state = HealthState {
        started_at: Instant::now(),
    };

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/health/detailed", get(detailed_health_handler))
        .with_state(state);

    log::info!("Starting health server on http://{}", addr);
    log::info!("  /health          - liveness probe");
    log::info!("  /health/detailed - probe + process metadata");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Result of the Telegram reachability probe
struct BotProbe {
    healthy: bool,
    detail: serde_json::Value,
}

async fn probe_telegram_bot() -> BotProbe {
    let token = config::TELEGRAM_BOT_TOKEN.as_str();
    if token.is_empty() {
        return BotProbe {
            healthy: false,
            detail: json!({"status": "unhealthy", "error": "Bot token not configured"}),
        };
    }

    let client = match reqwest::Client::builder()
        .timeout(config::health::probe_timeout())
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            return BotProbe {
                healthy: false,
                detail: json!({"status": "unhealthy", "error": e.to_string()}),
            }
        }
    };

    let url = format!("https://api.telegram.org/bot{}/getMe", token);
    match client.get(&url).send().await {
        Ok(resp) if resp.status().is_success() => {
            let body: serde_json::Value = resp.json().await.unwrap_or_default();
            BotProbe {
                healthy: true,
                detail: json!({
                    "status": "healthy",
                    "botUsername": body["result"]["username"],
                    "botId": body["result"]["id"],
                }),
            }
        }
        Ok(resp) => BotProbe {
            healthy: false,
            detail: json!({"status": "unhealthy", "error": format!("Bot API answered {}", resp.status())}),
        },
        Err(e) => BotProbe {
            healthy: false,
            detail: json!({"status": "unhealthy", "error": e.to_string()}),
        },
    }
}

async fn health_handler(State(state): State<HealthState>) -> Response {
    let probe = probe_telegram_bot().await;
    let status = if probe.healthy { "healthy" } else { "unhealthy" };
    let code = if probe.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = json!({
        "status": status,
        "checks": { "bot": probe.detail },
        "uptime": state.started_at.elapsed().as_secs(),
    });

    (code, Json(body)).into_response()
}

async fn detailed_health_handler(State(state): State<HealthState>) -> Response {
    let probe = probe_telegram_bot().await;
    let status = if probe.healthy { "healthy" } else { "unhealthy" };
    let code = if probe.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = json!({
        "status": status,
        "checks": { "bot": probe.detail },
        "service": "dashbot",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": config::ENVIRONMENT.as_str(),
        "uptime": state.started_at.elapsed().as_secs(),
        "pid": std::process::id(),
    });

    (code, Json(body)).into_response()
}
