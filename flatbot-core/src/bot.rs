//! Bot abstraction for sending and deleting messages.
//!
//! The trait is transport-agnostic; the teloxide implementation lives in the
//! `flatbot` crate (`telegram::TelegramBotAdapter`). Every send returns the
//! platform message id so the caller can record it in the delivery ledger.

use crate::error::PlatformError;
use crate::types::Chat;
use async_trait::async_trait;

/// Abstraction for the chat platform. Implementations map to a transport
/// (Telegram in production, a recording mock in tests).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message and returns its platform message id.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<String, PlatformError>;

    /// Sends a text message with a fixed one-row reply keyboard, one button
    /// per entry in `buttons`. Returns the platform message id.
    async fn send_message_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        buttons: &[String],
    ) -> Result<String, PlatformError>;

    /// Deletes a previously sent message.
    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<(), PlatformError>;
}
