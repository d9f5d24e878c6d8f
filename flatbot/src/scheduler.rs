//! Periodic scheduler: listing checks and cleanups on independent intervals.
//!
//! One cooperative loop polls at 1-second granularity and runs whichever task
//! is due, inline. A task's deadline is re-armed after it finishes, so a slow
//! cycle delays its own next run instead of overlapping it. Users are
//! processed sequentially under their per-user lock; one failing user never
//! loses the remaining batch.

use std::sync::Arc;
use std::time::Duration;
use storage::DeliveryLedger;
use tokio::time::{sleep, Instant};
use tracing::{info, warn};

use flatbot_core::Chat;

use crate::cleanup::CleanupEngine;
use crate::listings::{ListingFetcher, ListingSourceConfig};
use crate::notifier::Notifier;
use crate::user_locks::UserLocks;

const POLL_GRANULARITY: Duration = Duration::from_secs(1);

pub struct Scheduler {
    notifier: Arc<Notifier>,
    cleanup: Arc<CleanupEngine>,
    ledger: DeliveryLedger,
    fetcher: ListingFetcher,
    source: ListingSourceConfig,
    locks: UserLocks,
    check_interval: Duration,
    cleanup_interval: Duration,
}

impl Scheduler {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        notifier: Arc<Notifier>,
        cleanup: Arc<CleanupEngine>,
        ledger: DeliveryLedger,
        fetcher: ListingFetcher,
        source: ListingSourceConfig,
        locks: UserLocks,
        check_interval: Duration,
        cleanup_interval: Duration,
    ) -> Self {
        Self {
            notifier,
            cleanup,
            ledger,
            fetcher,
            source,
            locks,
            check_interval,
            cleanup_interval,
        }
    }

    /// Runs forever; spawn as a task next to the polling loop.
    pub async fn run(self) {
        info!(
            check_interval_secs = self.check_interval.as_secs(),
            cleanup_interval_secs = self.cleanup_interval.as_secs(),
            "scheduler started"
        );

        let mut next_check = Instant::now() + self.check_interval;
        let mut next_cleanup = Instant::now() + self.cleanup_interval;

        loop {
            sleep(POLL_GRANULARITY).await;

            if Instant::now() >= next_check {
                self.run_listing_cycle().await;
                next_check = Instant::now() + self.check_interval;
            }

            if Instant::now() >= next_cleanup {
                self.run_cleanup_cycle().await;
                next_cleanup = Instant::now() + self.cleanup_interval;
            }
        }
    }

    /// One listing cycle: fetch once, notify every known user sequentially.
    pub async fn run_listing_cycle(&self) {
        let listings = match self.fetcher.fetch(&self.source).await {
            Ok(listings) => listings,
            Err(e) => {
                warn!(error = %e, "listing fetch failed, skipping cycle");
                return;
            }
        };

        info!(count = listings.len(), "listing cycle started");

        for user in self.known_users().await {
            let Ok(chat_id) = user.parse::<i64>() else {
                warn!(user = %user, "ledger key is not a chat id, skipping");
                continue;
            };
            let chat = Chat::new(chat_id);

            let _guard = self.locks.acquire(&user).await;
            if let Err(e) = self.notifier.notify(&chat, &listings).await {
                warn!(user = %user, error = %e, "notify failed, continuing with remaining users");
            }
        }
    }

    /// One cleanup cycle over every known user, sequentially.
    pub async fn run_cleanup_cycle(&self) {
        info!("cleanup cycle started");

        for user in self.known_users().await {
            let Ok(chat_id) = user.parse::<i64>() else {
                warn!(user = %user, "ledger key is not a chat id, skipping");
                continue;
            };
            let chat = Chat::new(chat_id);

            let _guard = self.locks.acquire(&user).await;
            if let Err(e) = self.cleanup.clear(&chat).await {
                warn!(user = %user, error = %e, "cleanup failed, continuing with remaining users");
            }
        }
    }

    async fn known_users(&self) -> Vec<String> {
        match self.ledger.users().await {
            Ok(users) => users,
            Err(e) => {
                warn!(error = %e, "failed to list users, skipping cycle");
                Vec::new()
            }
        }
    }
}
