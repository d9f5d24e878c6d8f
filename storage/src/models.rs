//! Ledger models: entry category and the per-user persisted value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Classification of a ledger entry: ordinary bot chatter, or a forwarded
/// listing URL that dedup and cleanup treat specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryCategory {
    #[serde(rename = "OTHER")]
    Other,
    #[serde(rename = "LISTING_URL")]
    ListingUrl,
}

impl EntryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryCategory::Other => "OTHER",
            EntryCategory::ListingUrl => "LISTING_URL",
        }
    }
}

/// Persisted record of every message ever sent to one user, split by
/// category; each sub-map is `message_id -> text`. Serializes to
/// `{"OTHER": {..}, "LISTING_URL": {..}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserLedger {
    #[serde(rename = "OTHER", default)]
    pub other: BTreeMap<String, String>,
    #[serde(rename = "LISTING_URL", default)]
    pub listing_urls: BTreeMap<String, String>,
}

impl UserLedger {
    pub fn category(&self, category: EntryCategory) -> &BTreeMap<String, String> {
        match category {
            EntryCategory::Other => &self.other,
            EntryCategory::ListingUrl => &self.listing_urls,
        }
    }

    pub fn category_mut(&mut self, category: EntryCategory) -> &mut BTreeMap<String, String> {
        match category {
            EntryCategory::Other => &mut self.other,
            EntryCategory::ListingUrl => &mut self.listing_urls,
        }
    }
}
