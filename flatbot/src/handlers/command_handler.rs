//! Handler dispatching the two chat commands.

use async_trait::async_trait;
use flatbot_core::{Bot, BotError, Chat, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use storage::{DeliveryLedger, EntryCategory};
use tracing::info;

use crate::cleanup::CleanupEngine;
use crate::user_locks::UserLocks;

pub const START_COMMAND: &str = "/start";
pub const CLEAR_COMMAND: &str = "/clear";

const WELCOME_TEXT: &str = "Hi! I'm Flatbot. I can help you find rental apartments.";

/// Recognizes `/start` and `/clear`: exact, case-insensitive, full-match,
/// no arguments, no partial matches. Anything else passes through (and stays
/// archived only).
pub struct CommandHandler {
    bot: Arc<dyn Bot>,
    ledger: DeliveryLedger,
    cleanup: Arc<CleanupEngine>,
    locks: UserLocks,
}

impl CommandHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        ledger: DeliveryLedger,
        cleanup: Arc<CleanupEngine>,
        locks: UserLocks,
    ) -> Self {
        Self {
            bot,
            ledger,
            cleanup,
            locks,
        }
    }

    /// Sends the welcome message with the fixed one-button `/clear` keyboard
    /// and records it. Recording also creates the user's ledger, which is what
    /// subscribes the chat to the periodic listing checks.
    async fn send_welcome(&self, chat: &Chat) -> Result<()> {
        let buttons = vec![CLEAR_COMMAND.to_string()];
        let message_id = self
            .bot
            .send_message_with_keyboard(chat, WELCOME_TEXT, &buttons)
            .await?;
        self.ledger
            .record(
                &chat.ledger_key(),
                &message_id,
                WELCOME_TEXT,
                EntryCategory::Other,
            )
            .await
            .map_err(|e| BotError::Storage(e.to_string()))?;
        Ok(())
    }
}

fn matches_command(text: &str, command: &str) -> bool {
    text.trim().eq_ignore_ascii_case(command)
}

#[async_trait]
impl Handler for CommandHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if matches_command(&message.content, START_COMMAND) {
            info!(chat_id = message.chat.id, "start command");
            self.send_welcome(&message.chat).await?;
            return Ok(HandlerResponse::Stop);
        }

        if matches_command(&message.content, CLEAR_COMMAND) {
            info!(chat_id = message.chat.id, "clear command");
            let _guard = self.locks.acquire(&message.chat.ledger_key()).await;
            self.cleanup.clear(&message.chat).await?;
            return Ok(HandlerResponse::Stop);
        }

        Ok(HandlerResponse::Continue)
    }
}
