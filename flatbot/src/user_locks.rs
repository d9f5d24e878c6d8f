//! Per-user mutual exclusion.
//!
//! The ledger's URL-uniqueness dedup runs as a check-then-send-then-record
//! sequence; on a multi-threaded runtime the scheduler and a `/clear` command
//! could otherwise interleave on the same user's ledger. Every notify/cleanup
//! path takes the user's lock first.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Clone, Default)]
pub struct UserLocks {
    inner: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires this user's lock, creating it on first use. The guard is held
    /// across the whole per-user operation.
    pub async fn acquire(&self, user: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.inner.lock().await;
            map.entry(user.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}
