use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Configuration constants for the bot

/// Telegram bot token
/// Read once at startup from TELEGRAM_BOT_TOKEN
pub static TELEGRAM_BOT_TOKEN: Lazy<String> =
    Lazy::new(|| env::var("TELEGRAM_BOT_TOKEN").unwrap_or_default());

/// Base URL of the backend race API
/// Read from API_BASE_URL, defaults to the local development backend
pub static API_BASE_URL: Lazy<String> =
    Lazy::new(|| env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:4000/api".to_string()));

/// Bearer token sent on every backend API request
/// Read from BOT_BEARER_TOKEN; requests go unauthenticated when unset
pub static BOT_BEARER_TOKEN: Lazy<Option<String>> = Lazy::new(|| env::var("BOT_BEARER_TOKEN").ok());

/// Chat that receives operational alerts (startup, shutdown, errors)
/// Read from TELEGRAM_ALERT_AGENT; alerting is disabled when unset
pub static TELEGRAM_ALERT_AGENT: Lazy<Option<String>> = Lazy::new(|| env::var("TELEGRAM_ALERT_AGENT").ok());

/// Which chat platform to run: "telegram" or "whatsapp"
pub static BOT_PLATFORM: Lazy<String> =
    Lazy::new(|| env::var("BOT_PLATFORM").unwrap_or_else(|_| "telegram".to_string()));

/// Deployment environment: "production" enables alerting
pub static ENVIRONMENT: Lazy<String> =
    Lazy::new(|| env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()));

/// Log file path
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "dashbot.log".to_string()));

/// Returns true when running in production
pub fn is_production() -> bool {
    ENVIRONMENT.as_str() == "production"
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for backend API calls (in seconds)
    pub const API_TIMEOUT_SECS: u64 = 10;

    /// Request timeout for Telegram API calls (in seconds)
    pub const TELEGRAM_TIMEOUT_SECS: u64 = 30;

    /// Backend API request timeout duration
    pub fn api_timeout() -> Duration {
        Duration::from_secs(API_TIMEOUT_SECS)
    }

    /// Telegram request timeout duration
    pub fn telegram_timeout() -> Duration {
        Duration::from_secs(TELEGRAM_TIMEOUT_SECS)
    }
}

/// Health check server configuration
pub mod health {
    use super::Duration;

    /// Default port for the health check HTTP server
    pub const DEFAULT_PORT: u16 = 3001;

    /// Timeout for the Telegram getMe probe (in seconds)
    pub const PROBE_TIMEOUT_SECS: u64 = 5;

    /// Health probe timeout duration
    pub fn probe_timeout() -> Duration {
        Duration::from_secs(PROBE_TIMEOUT_SECS)
    }

    /// Port for the health check server, from HEALTH_PORT
    pub fn port() -> u16 {
        std::env::var("HEALTH_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT)
    }
}

/// Alerting configuration
pub mod alerts {
    /// Cooldown between alerts of the same type (in seconds)
    pub const RATE_LIMIT_COOLDOWN_SECS: i64 = 60;

    /// Delay before the startup alert is sent (in seconds)
    pub const STARTUP_ALERT_DELAY_SECS: u64 = 10;
}

/// Listing configuration
pub mod listing {
    /// Maximum number of race buttons shown in a single list view
    pub const MAX_RACE_BUTTONS: usize = 10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_timeout_is_bounded() {
        assert!(network::api_timeout() <= Duration::from_secs(30));
    }

    #[test]
    fn test_default_health_port() {
        assert_eq!(health::DEFAULT_PORT, 3001);
    }
}
