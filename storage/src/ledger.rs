//! Delivery ledger: per-user record of every message the bot has sent.
//!
//! Read for dedup before sending listings, walked by the cleanup engine, and
//! dropped wholesale when the platform reports a user unreachable. Backed by
//! an injected [`KeyValueStore`]; values are JSON-serialized [`UserLedger`]s.

use crate::error::StorageError;
use crate::kv::KeyValueStore;
use crate::models::{EntryCategory, UserLedger};
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct DeliveryLedger {
    store: Arc<dyn KeyValueStore>,
}

impl DeliveryLedger {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    async fn load(&self, user: &str) -> Result<UserLedger, StorageError> {
        match self.store.get(user).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(UserLedger::default()),
        }
    }

    async fn save(&self, user: &str, ledger: &UserLedger) -> Result<(), StorageError> {
        let raw = serde_json::to_string(ledger)?;
        self.store.set(user, &raw).await
    }

    /// Inserts or overwrites the entry for `message_id` under the user's
    /// category sub-map, creating the user's ledger if absent.
    pub async fn record(
        &self,
        user: &str,
        message_id: &str,
        text: &str,
        category: EntryCategory,
    ) -> Result<(), StorageError> {
        let mut ledger = self.load(user).await?;
        ledger
            .category_mut(category)
            .insert(message_id.to_string(), text.to_string());
        self.save(user, &ledger).await?;

        debug!(
            user = %user,
            message_id = %message_id,
            category = %category.as_str(),
            "recorded message"
        );
        Ok(())
    }

    /// True iff some LISTING_URL entry for this user has `text == url`.
    /// A missing user ledger reads as "no entries".
    pub async fn contains_url(&self, user: &str, url: &str) -> Result<bool, StorageError> {
        let ledger = self.load(user).await?;
        Ok(ledger.listing_urls.values().any(|text| text == url))
    }

    /// Snapshot of the user's entries in one category as `(message_id, text)`
    /// pairs. Order is not meaningful.
    pub async fn entries(
        &self,
        user: &str,
        category: EntryCategory,
    ) -> Result<Vec<(String, String)>, StorageError> {
        let ledger = self.load(user).await?;
        Ok(ledger
            .category(category)
            .iter()
            .map(|(id, text)| (id.clone(), text.clone()))
            .collect())
    }

    /// Removes one entry; no-op when absent.
    pub async fn delete(
        &self,
        user: &str,
        message_id: &str,
        category: EntryCategory,
    ) -> Result<(), StorageError> {
        let mut ledger = self.load(user).await?;
        if ledger.category_mut(category).remove(message_id).is_some() {
            self.save(user, &ledger).await?;
        }
        Ok(())
    }

    /// Removes the user's entire ledger; used when the chat becomes
    /// permanently unreachable.
    pub async fn delete_user(&self, user: &str) -> Result<(), StorageError> {
        self.store.delete(user).await?;
        debug!(user = %user, "ledger evicted");
        Ok(())
    }

    /// All users with a ledger; the scheduler iterates these.
    pub async fn users(&self) -> Result<Vec<String>, StorageError> {
        self.store.keys().await
    }
}
