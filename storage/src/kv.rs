//! Key-value store abstraction the delivery ledger is built on.

use crate::error::StorageError;
use async_trait::async_trait;

/// String-keyed, string-valued store. The ledger keeps one serialized
/// [`crate::UserLedger`] per key (stringified chat id).
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removes the key. Returns false when it was absent.
    async fn delete(&self, key: &str) -> Result<bool, StorageError>;
    async fn keys(&self) -> Result<Vec<String>, StorageError>;
}
