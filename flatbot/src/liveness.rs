//! URL liveness probe used by the cleanup engine.
//!
//! A listing message survives cleanup only while its URL is well-formed and
//! still resolves with a success status; everything else is fair game for
//! deletion.

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

/// Checks whether a URL currently resolves.
#[async_trait]
pub trait UrlProbe: Send + Sync {
    /// True when an HTTP GET of `url` returns a success status.
    async fn is_live(&self, url: &str) -> bool;
}

/// True when `text` parses as an absolute URL with a host.
pub fn is_well_formed_url(text: &str) -> bool {
    Url::parse(text).map(|u| u.has_host()).unwrap_or(false)
}

/// Production probe on a shared reqwest client.
pub struct HttpUrlProbe {
    client: Client,
}

impl HttpUrlProbe {
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl UrlProbe for HttpUrlProbe {
    async fn is_live(&self, url: &str) -> bool {
        match self.client.get(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(url = %url, error = %e, "liveness check failed");
                false
            }
        }
    }
}
