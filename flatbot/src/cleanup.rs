//! Cleanup engine: deletes obsolete bot messages from a user's chat history.
//!
//! Bot chatter (OTHER) is deleted unconditionally. Forwarded listing links
//! (LISTING_URL) are kept only while their URL is well-formed and still
//! resolves; dead links are deleted along with their ledger entries.

use flatbot_core::{Bot, BotError, Chat, PlatformError};
use std::sync::Arc;
use storage::{DeliveryLedger, EntryCategory};
use tracing::{info, warn};

use crate::liveness::{is_well_formed_url, UrlProbe};

/// Status message announcing a cleanup pass. It is recorded under OTHER
/// before the sweep snapshots the category, so the pass deletes it too.
pub const CLEANUP_STATUS_TEXT: &str = "Starting chat cleanup.";

/// What one cleanup pass did; feeds logs and tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanupReport {
    /// Messages deleted from the chat (or found already gone) and evicted.
    pub deleted: usize,
    /// LISTING_URL entries kept because their URL is still alive.
    pub kept: usize,
    /// The chat was unreachable and the user's ledger was evicted.
    pub user_evicted: bool,
}

/// Outcome of sweeping one category.
enum SweepStatus {
    Completed,
    /// The platform refused a deletion permanently; remaining entries in
    /// this category are left untouched.
    Halted,
    Unreachable,
}

pub struct CleanupEngine {
    bot: Arc<dyn Bot>,
    ledger: DeliveryLedger,
    probe: Arc<dyn UrlProbe>,
}

impl CleanupEngine {
    pub fn new(bot: Arc<dyn Bot>, ledger: DeliveryLedger, probe: Arc<dyn UrlProbe>) -> Self {
        Self { bot, ledger, probe }
    }

    /// Runs one cleanup pass for the user. Idempotent: a missing message is
    /// treated as already deleted, so repeated passes settle.
    pub async fn clear(&self, chat: &Chat) -> Result<CleanupReport, BotError> {
        let user = chat.ledger_key();
        let mut report = CleanupReport::default();

        match self.bot.send_message(chat, CLEANUP_STATUS_TEXT).await {
            Ok(message_id) => {
                self.ledger
                    .record(&user, &message_id, CLEANUP_STATUS_TEXT, EntryCategory::Other)
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

        for category in [EntryCategory::Other, EntryCategory::ListingUrl] {
            match self.sweep(chat, &user, category, &mut report).await? {
                SweepStatus::Completed => {}
                SweepStatus::Halted => {
                    warn!(user = %user, category = category.as_str(), "category sweep halted");
                }
                SweepStatus::Unreachable => {
                    self.ledger
                        .delete_user(&user)
                        .await
                        .map_err(|e| BotError::Storage(e.to_string()))?;
                    report.user_evicted = true;
                    return Ok(report);
                }
            }
        }

        info!(
            user = %user,
            deleted = report.deleted,
            kept = report.kept,
            "cleanup finished"
        );
        Ok(report)
    }

    async fn sweep(
        &self,
        chat: &Chat,
        user: &str,
        category: EntryCategory,
        report: &mut CleanupReport,
    ) -> Result<SweepStatus, BotError> {
        let entries = self
            .ledger
            .entries(user, category)
            .await
            .map_err(|e| BotError::Storage(e.to_string()))?;

        for (message_id, text) in entries {
            if category == EntryCategory::ListingUrl
                && is_well_formed_url(&text)
                && self.probe.is_live(&text).await
            {
                report.kept += 1;
                continue;
            }

            match self.bot.delete_message(chat, &message_id).await {
                Ok(()) | Err(PlatformError::MessageNotFound(_)) => {
                    self.ledger
                        .delete(user, &message_id, category)
                        .await
                        .map_err(|e| BotError::Storage(e.to_string()))?;
                    report.deleted += 1;
                }
                Err(PlatformError::MessageNotDeletable(reason)) => {
                    warn!(user = %user, message_id = %message_id, reason = %reason, "message not deletable");
                    return Ok(SweepStatus::Halted);
                }
                Err(PlatformError::ChatUnreachable(reason)) => {
                    warn!(user = %user, reason = %reason, "chat unreachable during sweep");
                    return Ok(SweepStatus::Unreachable);
                }
                Err(e) => {
                    warn!(user = %user, message_id = %message_id, error = %e, "delete rejected, leaving entry");
                }
            }
        }

        Ok(SweepStatus::Completed)
    }
}
