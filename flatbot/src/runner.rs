//! Bot runner: wires components, the handler chain, and the scheduler, then
//! starts long polling.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::chain::HandlerChain;
use crate::components::build_components;
use crate::config::BotConfig;
use crate::handlers::{ArchiveHandler, CommandHandler};
use crate::listings::{ListingFetcher, ListingSourceConfig, RentFilters};
use crate::scheduler::Scheduler;
use crate::telegram::run_repl;

/// Runs the bot until the polling loop ends: periodic listing checks and
/// cleanups in a background task, command handling in the foreground.
pub async fn run_bot(config: BotConfig) -> Result<()> {
    flatbot_core::init_tracing(&config.log_file)?;
    info!("Starting flatbot");

    let components = build_components(&config).await?;

    let chain = HandlerChain::new()
        .add_handler(Arc::new(ArchiveHandler::new(components.ledger.clone())))
        .add_handler(Arc::new(CommandHandler::new(
            components.bot.clone(),
            components.ledger.clone(),
            components.cleanup.clone(),
            components.locks.clone(),
        )));

    let scheduler = Scheduler::new(
        components.notifier.clone(),
        components.cleanup.clone(),
        components.ledger.clone(),
        ListingFetcher::new()?,
        ListingSourceConfig::anflat(RentFilters::default()),
        components.locks.clone(),
        Duration::from_secs(config.check_interval_minutes * 60),
        Duration::from_secs(config.cleanup_interval_minutes * 60),
    );
    tokio::spawn(scheduler.run());

    run_repl(components.tg_bot.clone(), chain).await
}
