//! Builds the bot's components from configuration.

use anyhow::Result;
use flatbot_core::Bot;
use std::sync::Arc;
use storage::{DeliveryLedger, SqliteStore};

use crate::cleanup::CleanupEngine;
use crate::config::BotConfig;
use crate::liveness::{HttpUrlProbe, UrlProbe};
use crate::notifier::Notifier;
use crate::telegram::TelegramBotAdapter;
use crate::user_locks::UserLocks;

pub struct BotComponents {
    /// The underlying teloxide bot; the polling runner needs it directly.
    pub tg_bot: teloxide::Bot,
    pub bot: Arc<dyn Bot>,
    pub ledger: DeliveryLedger,
    pub notifier: Arc<Notifier>,
    pub cleanup: Arc<CleanupEngine>,
    pub locks: UserLocks,
}

/// Wires the teloxide bot (honoring the optional API-URL override), the
/// SQLite-backed ledger, the liveness probe, and the notify/cleanup engines.
pub async fn build_components(config: &BotConfig) -> Result<BotComponents> {
    let mut tg_bot = teloxide::Bot::new(config.bot_token.clone());
    if let Some(api_url) = &config.telegram_api_url {
        tg_bot = tg_bot.set_api_url(reqwest::Url::parse(api_url)?);
    }

    let store = SqliteStore::new(&config.database_url).await?;
    let ledger = DeliveryLedger::new(Arc::new(store));

    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(tg_bot.clone()));
    let probe: Arc<dyn UrlProbe> = Arc::new(HttpUrlProbe::new()?);

    let notifier = Arc::new(Notifier::new(bot.clone(), ledger.clone()));
    let cleanup = Arc::new(CleanupEngine::new(bot.clone(), ledger.clone(), probe));
    let locks = UserLocks::new();

    Ok(BotComponents {
        tg_bot,
        bot,
        ledger,
        notifier,
        cleanup,
        locks,
    })
}
