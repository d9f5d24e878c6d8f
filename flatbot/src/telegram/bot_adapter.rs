//! Wraps teloxide::Bot and implements [`flatbot_core::Bot`].
//!
//! Production code talks to Telegram through this adapter; tests substitute a
//! recording Bot impl. Platform failures are mapped onto the error taxonomy
//! the notifier and cleanup engine branch on.

use async_trait::async_trait;
use flatbot_core::{Bot as CoreBot, Chat, PlatformError};
use teloxide::prelude::*;
use teloxide::types::{ChatId, KeyboardButton, KeyboardMarkup, MessageId};
use teloxide::{ApiError, RequestError};

/// Thin wrapper around teloxide::Bot that implements the core Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

/// Maps a teloxide failure onto the platform taxonomy: chats the bot can no
/// longer deliver to, delete targets that are already gone, messages Telegram
/// refuses to ever delete, and everything else as a transient rejection.
fn map_request_error(e: RequestError) -> PlatformError {
    match e {
        RequestError::Api(api) => match api {
            ApiError::BotBlocked
            | ApiError::ChatNotFound
            | ApiError::BotKicked
            | ApiError::BotKickedFromSupergroup
            | ApiError::UserDeactivated => PlatformError::ChatUnreachable(api.to_string()),
            ApiError::MessageToDeleteNotFound | ApiError::MessageIdInvalid => {
                PlatformError::MessageNotFound(api.to_string())
            }
            ApiError::MessageCantBeDeleted => PlatformError::MessageNotDeletable(api.to_string()),
            other => PlatformError::Rejected(other.to_string()),
        },
        other => PlatformError::Rejected(other.to_string()),
    }
}

fn parse_message_id(s: &str) -> Result<MessageId, PlatformError> {
    s.parse::<i32>()
        .map(MessageId)
        .map_err(|_| PlatformError::MessageNotFound(format!("invalid message id: {}", s)))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<String, PlatformError> {
        let sent = self
            .bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(map_request_error)?;
        Ok(sent.id.to_string())
    }

    async fn send_message_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        buttons: &[String],
    ) -> Result<String, PlatformError> {
        let row: Vec<KeyboardButton> = buttons.iter().map(KeyboardButton::new).collect();
        let markup = KeyboardMarkup::new(vec![row]);

        let sent = self
            .bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(markup)
            .await
            .map_err(map_request_error)?;
        Ok(sent.id.to_string())
    }

    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<(), PlatformError> {
        let id = parse_message_id(message_id)?;
        self.bot
            .delete_message(ChatId(chat.id), id)
            .await
            .map_err(map_request_error)?;
        Ok(())
    }
}
