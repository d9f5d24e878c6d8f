//! Bot configuration, loaded from environment variables.

use anyhow::{anyhow, Result};
use std::env;

pub struct BotConfig {
    pub bot_token: String,
    pub database_url: String,
    pub log_file: String,
    /// Minutes between listing-check cycles.
    pub check_interval_minutes: u64,
    /// Minutes between cleanup cycles.
    pub cleanup_interval_minutes: u64,
    /// Optional Telegram Bot API base URL; when set, requests go there
    /// instead of api.telegram.org (tests point this at a mock server).
    /// Env: `TELEGRAM_API_URL` or `TELOXIDE_API_URL`.
    pub telegram_api_url: Option<String>,
}

impl BotConfig {
    /// Loads configuration from environment variables. The token argument,
    /// when given, overrides `BOT_TOKEN`; a missing token is fatal.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow!("BOT_TOKEN not set"))?,
        };
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:flatbot.db".to_string());
        let log_file = "logs/flatbot.log".to_string();
        let check_interval_minutes = env::var("CHECK_INTERVAL_MINUTES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);
        let cleanup_interval_minutes = env::var("CLEANUP_INTERVAL_MINUTES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(120);

        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        Ok(Self {
            bot_token,
            database_url,
            log_file,
            check_interval_minutes,
            cleanup_interval_minutes,
            telegram_api_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("BOT_TOKEN");
        env::remove_var("DATABASE_URL");
        env::remove_var("CHECK_INTERVAL_MINUTES");
        env::remove_var("CLEANUP_INTERVAL_MINUTES");
        env::remove_var("TELEGRAM_API_URL");
        env::remove_var("TELOXIDE_API_URL");
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "test_token");
        assert_eq!(config.database_url, "sqlite:flatbot.db");
        assert_eq!(config.log_file, "logs/flatbot.log");
        assert_eq!(config.check_interval_minutes, 30);
        assert_eq!(config.cleanup_interval_minutes, 120);
        assert!(config.telegram_api_url.is_none());
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        clear_env();
        env::set_var("BOT_TOKEN", "custom_token");
        env::set_var("DATABASE_URL", "custom.db");
        env::set_var("CHECK_INTERVAL_MINUTES", "5");
        env::set_var("CLEANUP_INTERVAL_MINUTES", "60");
        env::set_var("TELEGRAM_API_URL", "http://127.0.0.1:8081");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "custom_token");
        assert_eq!(config.database_url, "custom.db");
        assert_eq!(config.check_interval_minutes, 5);
        assert_eq!(config.cleanup_interval_minutes, 60);
        assert_eq!(
            config.telegram_api_url.as_deref(),
            Some("http://127.0.0.1:8081")
        );
    }

    #[test]
    #[serial]
    fn test_load_config_with_override_token() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");

        let config = BotConfig::load(Some("override_token".to_string())).unwrap();

        assert_eq!(config.bot_token, "override_token");
    }

    #[test]
    #[serial]
    fn test_load_config_missing_token_fails() {
        clear_env();

        assert!(BotConfig::load(None).is_err());
    }
}
