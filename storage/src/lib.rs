//! Storage crate: the delivery ledger and its key-value persistence.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`kv`] – KeyValueStore trait
//! - [`memory_store`] – InMemoryStore (tests, ephemeral runs)
//! - [`sqlite_store`] – SqliteStore (production, SQLite via sqlx)
//! - [`models`] – EntryCategory, UserLedger
//! - [`ledger`] – DeliveryLedger

mod error;
mod kv;
mod ledger;
mod memory_store;
mod models;
mod sqlite_store;

pub use error::StorageError;
pub use kv::KeyValueStore;
pub use ledger::DeliveryLedger;
pub use memory_store::InMemoryStore;
pub use models::{EntryCategory, UserLedger};
pub use sqlite_store::SqliteStore;
