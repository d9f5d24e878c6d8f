//! Mock implementation of [`flatbot::Bot`] for integration tests.
//!
//! Records every send and delete so tests can assert on traffic without
//! hitting Telegram; failure modes (unreachable chat, rejected payloads,
//! missing or undeletable messages) are scripted per test.

use async_trait::async_trait;
use flatbot::{Bot, Chat, PlatformError};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// One recorded `send_message` / `send_message_with_keyboard` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRecord {
    pub chat_id: i64,
    pub message_id: String,
    pub text: String,
    pub with_keyboard: bool,
}

/// Mock Bot with sequential message ids starting at "1".
#[derive(Default)]
pub struct MockBot {
    next_id: AtomicUsize,
    sent: Mutex<Vec<SentRecord>>,
    deleted: Mutex<Vec<String>>,
    /// Sends fail with ChatUnreachable once this many have succeeded.
    unreachable_after: Mutex<Option<usize>>,
    reject_texts: Mutex<HashSet<String>>,
    missing_messages: Mutex<HashSet<String>>,
    undeletable_messages: Mutex<HashSet<String>>,
}

#[allow(dead_code)] // not every test binary uses every helper
impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every send (and delete) from now on fails with ChatUnreachable.
    pub fn set_unreachable(&self) {
        *self.unreachable_after.lock().unwrap() = Some(0);
    }

    /// Sends succeed until `count` have gone out, then the chat turns
    /// unreachable.
    pub fn set_unreachable_after(&self, count: usize) {
        *self.unreachable_after.lock().unwrap() = Some(count);
    }

    /// Sending this exact text fails with a transient rejection.
    pub fn reject_text(&self, text: &str) {
        self.reject_texts.lock().unwrap().insert(text.to_string());
    }

    /// Deleting this message id reports the message as already gone.
    pub fn mark_missing(&self, message_id: &str) {
        self.missing_messages
            .lock()
            .unwrap()
            .insert(message_id.to_string());
    }

    /// Deleting this message id fails permanently.
    pub fn mark_undeletable(&self, message_id: &str) {
        self.undeletable_messages
            .lock()
            .unwrap()
            .insert(message_id.to_string());
    }

    pub fn sent_records(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_texts(&self) -> Vec<String> {
        self.sent_records().into_iter().map(|r| r.text).collect()
    }

    pub fn deleted_ids(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    fn chat_reachable(&self) -> bool {
        match *self.unreachable_after.lock().unwrap() {
            Some(limit) => self.sent.lock().unwrap().len() < limit,
            None => true,
        }
    }

    fn record_send(
        &self,
        chat: &Chat,
        text: &str,
        with_keyboard: bool,
    ) -> Result<String, PlatformError> {
        if !self.chat_reachable() {
            return Err(PlatformError::ChatUnreachable("bot was blocked".to_string()));
        }
        if self.reject_texts.lock().unwrap().contains(text) {
            return Err(PlatformError::Rejected("bad request".to_string()));
        }

        let message_id = (self.next_id.fetch_add(1, Ordering::SeqCst) + 1).to_string();
        self.sent.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            message_id: message_id.clone(),
            text: text.to_string(),
            with_keyboard,
        });
        Ok(message_id)
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<String, PlatformError> {
        self.record_send(chat, text, false)
    }

    async fn send_message_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        _buttons: &[String],
    ) -> Result<String, PlatformError> {
        self.record_send(chat, text, true)
    }

    async fn delete_message(&self, _chat: &Chat, message_id: &str) -> Result<(), PlatformError> {
        if !self.chat_reachable() {
            return Err(PlatformError::ChatUnreachable("bot was blocked".to_string()));
        }
        if self.undeletable_messages.lock().unwrap().contains(message_id) {
            return Err(PlatformError::MessageNotDeletable(
                "message can't be deleted".to_string(),
            ));
        }
        if self.missing_messages.lock().unwrap().contains(message_id) {
            return Err(PlatformError::MessageNotFound(
                "message to delete not found".to_string(),
            ));
        }

        self.deleted.lock().unwrap().push(message_id.to_string());
        Ok(())
    }
}
