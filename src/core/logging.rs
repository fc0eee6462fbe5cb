//! Logging initialization and startup diagnostics

use anyhow::Result;
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;

use crate::core::config;

/// Initialize logger for both console and file output
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file =
        File::create(log_file_path).map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs the effective configuration at startup
///
/// Secrets are reported by presence only, never by value.
pub fn log_startup_configuration() {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("🏃 DashBot configuration");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("Environment: {}", config::ENVIRONMENT.as_str());
    log::info!("Platform: {}", config::BOT_PLATFORM.as_str());
    log::info!("API base URL: {}", config::API_BASE_URL.as_str());
    log::info!(
        "Bearer token: {}",
        if config::BOT_BEARER_TOKEN.is_some() { "✅ configured" } else { "⚠️  not set (requests go unauthenticated)" }
    );
    log::info!(
        "Bot token: {}",
        if config::TELEGRAM_BOT_TOKEN.is_empty() { "❌ MISSING" } else { "✅ configured" }
    );

    match config::TELEGRAM_ALERT_AGENT.as_deref() {
        Some(chat) => log::info!("Alert chat: ✅ {}", chat),
        None => log::warn!("Alert chat: not set, operational alerts disabled"),
    }
    log::info!("Health server port: {}", config::health::port());
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_init_logger_accepts_writable_path() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        // A second initialization in the same process fails by design, so
        // only assert that the call terminates either way
        let result = init_logger(path);
        assert!(result.is_ok() || result.is_err());
    }
}
