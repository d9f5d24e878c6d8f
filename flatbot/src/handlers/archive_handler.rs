//! Handler that records every inbound message in the ledger in before().

use async_trait::async_trait;
use flatbot_core::{BotError, Handler, Message, Result};
use storage::{DeliveryLedger, EntryCategory};
use tracing::{debug, error};

/// Archives each inbound message under OTHER before any dispatch, command or
/// not, so `/clear` later removes user chatter along with bot messages.
/// Always continues.
#[derive(Clone)]
pub struct ArchiveHandler {
    ledger: DeliveryLedger,
}

impl ArchiveHandler {
    pub fn new(ledger: DeliveryLedger) -> Self {
        Self { ledger }
    }
}

#[async_trait]
impl Handler for ArchiveHandler {
    async fn before(&self, message: &Message) -> Result<bool> {
        self.ledger
            .record(
                &message.chat.ledger_key(),
                &message.id,
                &message.content,
                EntryCategory::Other,
            )
            .await
            .map_err(|e| {
                error!(error = %e, chat_id = message.chat.id, "Failed to archive message");
                BotError::Storage(e.to_string())
            })?;

        debug!(
            chat_id = message.chat.id,
            message_id = %message.id,
            "inbound message archived"
        );
        Ok(true)
    }
}
