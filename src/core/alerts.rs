//! Operational alerts sent to the admin chat
//!
//! Alerts fire only in production with a configured alert chat, and each
//! alert type is rate limited by a last-sent timestamp map. The map sits
//! behind an async mutex: the read-modify-write must stay atomic once the
//! runtime schedules handlers across OS threads. Alert failures are logged
//! and swallowed, never propagated into the event path.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tokio::sync::Mutex;

use crate::core::config;

/// Alert severity, mapped to a leading emoji
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Warning,
    Error,
    Critical,
}

impl AlertLevel {
    fn emoji(&self) -> &'static str {
        match self {
            AlertLevel::Info => "📢",
            AlertLevel::Warning => "⚠️",
            AlertLevel::Error => "❌",
            AlertLevel::Critical => "🚨",
        }
    }
}

/// Escapes text destined for HTML-mode Telegram messages
fn sanitize_for_telegram(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Sends operational notifications to the configured alert chat
pub struct AlertService {
    bot: Bot,
    alert_chat: Option<String>,
    environment: String,
    cooldown: Duration,
    last_sent: Mutex<HashMap<String, DateTime<Utc>>>,
}

impl AlertService {
    pub fn from_config(bot: Bot) -> Self {
        Self::new(
            bot,
            config::TELEGRAM_ALERT_AGENT.clone(),
            config::ENVIRONMENT.clone(),
        )
    }

    pub fn new(bot: Bot, alert_chat: Option<String>, environment: String) -> Self {
        if alert_chat.is_none() {
            log::warn!("Alert service initialized without TELEGRAM_ALERT_AGENT");
        }

        Self {
            bot,
            alert_chat,
            environment,
            cooldown: Duration::seconds(config::alerts::RATE_LIMIT_COOLDOWN_SECS),
            last_sent: Mutex::new(HashMap::new()),
        }
    }

    /// Whether an alert of `alert_type` may go out right now
    async fn should_send(&self, alert_type: &str) -> bool {
        if self.environment != "production" {
            log::info!("Alert skipped - {} environment (type: {})", self.environment, alert_type);
            return false;
        }

        if self.alert_chat.is_none() {
            log::warn!("Alert skipped - missing configuration (type: {})", alert_type);
            return false;
        }

        let mut last_sent = self.last_sent.lock().await;
        let now = Utc::now();
        if let Some(previous) = last_sent.get(alert_type) {
            if now - *previous < self.cooldown {
                log::info!("Alert skipped - rate limited (type: {})", alert_type);
                return false;
            }
        }
        last_sent.insert(alert_type.to_string(), now);
        true
    }

    /// Sends one alert message; returns whether it went out
    pub async fn send_alert(&self, alert_type: &str, level: AlertLevel, message: String) -> bool {
        if !self.should_send(alert_type).await {
            return false;
        }

        let Some(chat) = self.alert_chat.as_deref() else {
            return false;
        };
        let Ok(chat_id) = chat.parse::<i64>() else {
            log::error!("Invalid alert chat id: {}", chat);
            return false;
        };

        let text = format!("{} {}", level.emoji(), message);
        match self
            .bot
            .send_message(ChatId(chat_id), text)
            .parse_mode(ParseMode::Html)
            .disable_notification(level == AlertLevel::Info)
            .await
        {
            Ok(_) => {
                log::info!("Alert sent (type: {}, level: {:?})", alert_type, level);
                true
            }
            Err(e) => {
                log::error!("Failed to send alert (type: {}): {}", alert_type, e);
                false
            }
        }
    }

    pub async fn send_startup_alert(&self, platform: &str) -> bool {
        let message = format!(
            "✅ <b>DashBot Started Successfully</b>\n\n\
            🚀 <b>Status:</b> Bot is now running\n\
            🕒 <b>Time:</b> {}\n\
            🌍 <b>Environment:</b> {}\n\
            🤖 <b>Platform:</b> {}\n\
            📦 <b>Version:</b> {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
            sanitize_for_telegram(&self.environment),
            sanitize_for_telegram(platform),
            env!("CARGO_PKG_VERSION"),
        );
        self.send_alert("startup", AlertLevel::Info, message).await
    }

    pub async fn send_shutdown_alert(&self, uptime_secs: u64) -> bool {
        let message = format!(
            "⚠️ <b>DashBot Shutdown</b>\n\n\
            🕒 <b>Time:</b> {}\n\
            ⏱ <b>Uptime:</b> {} minutes\n\n\
            🔧 <b>Process is shutting down gracefully</b>",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
            uptime_secs / 60,
        );
        self.send_alert("shutdown", AlertLevel::Warning, message).await
    }

    pub async fn send_error_alert(&self, context: &str, error: &str) -> bool {
        let message = format!(
            "🚨 <b>DashBot Error</b>\n\n\
            ❌ <b>Message:</b> {}\n\
            📋 <b>Context:</b> {}\n\
            🕒 <b>Time:</b> {}\n\n\
            🔧 <b>Please check logs for details</b>",
            sanitize_for_telegram(error),
            sanitize_for_telegram(context),
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        );
        self.send_alert("error", AlertLevel::Error, message).await
    }

    pub async fn send_critical_alert(&self, context: &str, error: &str) -> bool {
        let message = format!(
            "🚨 <b>DashBot Critical Error</b>\n\n\
            💥 <b>Message:</b> {}\n\
            📋 <b>Context:</b> {}\n\
            🕒 <b>Time:</b> {}\n\n\
            ⚠️ <b>Immediate attention required</b>",
            sanitize_for_telegram(error),
            sanitize_for_telegram(context),
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        );
        self.send_alert("critical", AlertLevel::Critical, message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_escapes_html() {
        assert_eq!(sanitize_for_telegram("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
    }

    #[test]
    fn test_level_emojis() {
        assert_eq!(AlertLevel::Critical.emoji(), "🚨");
        assert_eq!(AlertLevel::Info.emoji(), "📢");
    }

    #[tokio::test]
    async fn test_alerts_disabled_outside_production() {
        let bot = Bot::new("123:fake-token");
        let service = AlertService::new(bot, Some("123".to_string()), "development".to_string());
        assert!(!service.should_send("startup").await);
    }

    #[tokio::test]
    async fn test_alerts_require_configured_chat() {
        let bot = Bot::new("123:fake-token");
        let service = AlertService::new(bot, None, "production".to_string());
        assert!(!service.should_send("startup").await);
    }

    #[tokio::test]
    async fn test_rate_limit_blocks_second_send() {
        let bot = Bot::new("123:fake-token");
        let service = AlertService::new(bot, Some("123".to_string()), "production".to_string());
        assert!(service.should_send("error").await);
        assert!(!service.should_send("error").await);
        // A different alert type has its own window
        assert!(service.should_send("shutdown").await);
    }
}
