//! Notifier: sends new listings to one user, deduplicated against the ledger.

use flatbot_core::{Bot, BotError, Chat, PlatformError};
use std::sync::Arc;
use storage::{DeliveryLedger, EntryCategory};
use tracing::{info, warn};

use crate::listings::Listing;

/// Status message announcing a listing check; recorded under OTHER like
/// every other bot message, so `/clear` sweeps it away later.
pub const CHECK_STATUS_TEXT: &str =
    "Starting the search for new listings. If nothing follows, there is nothing new.";

/// What one notify pass did; feeds logs and tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NotifyReport {
    /// Listing messages sent and recorded.
    pub sent: usize,
    /// Listings skipped because their URL was already in the ledger.
    pub duplicates: usize,
    /// The chat was unreachable and the user's ledger was evicted.
    pub user_evicted: bool,
}

pub struct Notifier {
    bot: Arc<dyn Bot>,
    ledger: DeliveryLedger,
}

impl Notifier {
    pub fn new(bot: Arc<dyn Bot>, ledger: DeliveryLedger) -> Self {
        Self { bot, ledger }
    }

    /// Sends every listing the user has not seen yet, in input order.
    ///
    /// A status message goes out first and is recorded under OTHER; it also
    /// guarantees the user's ledger exists before any dedup query. An
    /// unreachable chat at any send evicts the user's whole ledger and ends
    /// the pass. An individual listing rejection is skipped without retry.
    pub async fn notify(&self, chat: &Chat, listings: &[Listing]) -> Result<NotifyReport, BotError> {
        let user = chat.ledger_key();
        let mut report = NotifyReport::default();

        match self.bot.send_message(chat, CHECK_STATUS_TEXT).await {
            Ok(message_id) => {
                self.ledger
                    .record(&user, &message_id, CHECK_STATUS_TEXT, EntryCategory::Other)
                    .await
                    .map_err(|e| BotError::Storage(e.to_string()))?;
            }
            Err(PlatformError::ChatUnreachable(reason)) => {
                warn!(user = %user, reason = %reason, "chat unreachable, evicting ledger");
                self.ledger
                    .delete_user(&user)
                    .await
                    .map_err(|e| BotError::Storage(e.to_string()))?;
                report.user_evicted = true;
                return Ok(report);
            }
            Err(e) => return Err(e.into()),
        }

        for listing in listings {
            let duplicate = self
                .ledger
                .contains_url(&user, &listing.url)
                .await
                .map_err(|e| BotError::Storage(e.to_string()))?;
            if duplicate {
                report.duplicates += 1;
                continue;
            }

            match self.bot.send_message(chat, &listing.url).await {
                Ok(message_id) => {
                    self.ledger
                        .record(&user, &message_id, &listing.url, EntryCategory::ListingUrl)
                        .await
                        .map_err(|e| BotError::Storage(e.to_string()))?;
                    report.sent += 1;
                }
                Err(PlatformError::ChatUnreachable(reason)) => {
                    warn!(user = %user, reason = %reason, "chat unreachable mid-batch, evicting ledger");
                    self.ledger
                        .delete_user(&user)
                        .await
                        .map_err(|e| BotError::Storage(e.to_string()))?;
                    report.user_evicted = true;
                    return Ok(report);
                }
                Err(e) => {
                    warn!(user = %user, url = %listing.url, error = %e, "listing send rejected, skipping");
                }
            }
        }

        info!(
            user = %user,
            sent = report.sent,
            duplicates = report.duplicates,
            "listing check finished"
        );
        Ok(report)
    }
}
