//! Shared test doubles.

pub mod mock_bot;

use async_trait::async_trait;
use flatbot::UrlProbe;
use std::collections::HashSet;
use std::sync::Mutex;

/// Probe whose live set is scripted by the test; everything else is dead.
#[derive(Default)]
pub struct MockProbe {
    live: Mutex<HashSet<String>>,
}

#[allow(dead_code)] // not every test binary uses every helper
impl MockProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_live(&self, url: &str) {
        self.live.lock().unwrap().insert(url.to_string());
    }
}

#[async_trait]
impl UrlProbe for MockProbe {
    async fn is_live(&self, url: &str) -> bool {
        self.live.lock().unwrap().contains(url)
    }
}
