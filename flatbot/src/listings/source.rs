//! Listing source configuration and the catalog fetcher.
//!
//! One variant per supported site; only the anflat.ru apartment catalog is
//! implemented. The catalog page lists offer cards whose text carries an
//! `ID: <id>` marker; each id maps to a canonical object URL, which is the
//! identity the delivery ledger dedups on.

use crate::listings::filters::RentFilters;
use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

const ANFLAT_BASE_URL: &str = "https://anflat.ru";

/// One scraped rental listing: stable id plus canonical object URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub url: String,
}

/// Listing source configuration, one case per site with extraction logic.
#[derive(Debug, Clone)]
pub enum ListingSourceConfig {
    /// anflat.ru apartment rentals.
    AnflatApartments { filters: RentFilters },
}

impl ListingSourceConfig {
    pub fn anflat(filters: RentFilters) -> Self {
        ListingSourceConfig::AnflatApartments { filters }
    }

    pub fn source_name(&self) -> &'static str {
        match self {
            ListingSourceConfig::AnflatApartments { .. } => "anflat",
        }
    }

    /// Catalog search URL with the filter query string applied.
    pub fn search_url(&self) -> String {
        match self {
            ListingSourceConfig::AnflatApartments { filters } => format!(
                "{}/rent/apartments/?{}",
                ANFLAT_BASE_URL,
                filters.query_string()
            ),
        }
    }

    /// Canonical URL of one listing object.
    pub fn object_url(&self, id: &str) -> String {
        match self {
            ListingSourceConfig::AnflatApartments { .. } => {
                format!("{}/rent/apartments/object-{}", ANFLAT_BASE_URL, id)
            }
        }
    }
}

/// Fetches and parses the catalog page for a [`ListingSourceConfig`].
pub struct ListingFetcher {
    client: Client,
}

impl ListingFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Fetches the first catalog page and returns its listings in page order.
    /// May legitimately return an empty batch (no offers match the filters).
    pub async fn fetch(&self, config: &ListingSourceConfig) -> Result<Vec<Listing>> {
        let url = config.search_url();
        info!(source = config.source_name(), url = %url, "fetching listings");

        let html = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let listings = parse_catalog(&html, config)?;
        debug!(source = config.source_name(), count = listings.len(), "parsed catalog");
        Ok(listings)
    }
}

/// Extracts listings from a catalog page. An explicit no-data marker yields
/// an empty batch; otherwise every `ID: <id>` occurrence inside an offer
/// card becomes one listing.
pub fn parse_catalog(html: &str, config: &ListingSourceConfig) -> Result<Vec<Listing>> {
    let none_data =
        Selector::parse(".catalog-none-data").map_err(|e| anyhow!("selector: {}", e))?;
    let card = Selector::parse(".catalog-card").map_err(|e| anyhow!("selector: {}", e))?;

    let document = Html::parse_document(html);

    if document.select(&none_data).next().is_some() {
        return Ok(Vec::new());
    }

    let mut listings = Vec::new();
    for element in document.select(&card) {
        let text = element.text().collect::<Vec<_>>().join(" ");
        for id in extract_ids(&text) {
            let url = config.object_url(&id);
            listings.push(Listing { id, url });
        }
    }

    Ok(listings)
}

/// Collects every token following an `ID:` marker in the card text.
fn extract_ids(text: &str) -> Vec<String> {
    let mut ids = Vec::new();
    let mut tokens = text.split_whitespace();
    while let Some(token) = tokens.next() {
        if token == "ID:" {
            if let Some(id) = tokens.next() {
                ids.push(id.to_string());
            }
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anflat() -> ListingSourceConfig {
        ListingSourceConfig::anflat(RentFilters::default())
    }

    #[test]
    fn test_search_url_carries_filters() {
        assert_eq!(
            anflat().search_url(),
            "https://anflat.ru/rent/apartments/?price=19.0&price=29.5&room_count=1&room_count=2&total_area=32&total_area=80&date_publisher=day"
        );
    }

    #[test]
    fn test_object_url() {
        assert_eq!(
            anflat().object_url("FL1"),
            "https://anflat.ru/rent/apartments/object-FL1"
        );
    }

    #[test]
    fn test_parse_catalog_extracts_cards() {
        let html = r#"
            <html><body>
              <div class="catalog-card"><span>1-room flat</span><span>ID: FL1</span></div>
              <div class="catalog-card"><span>2-room flat</span><span>ID: FL2</span></div>
            </body></html>
        "#;

        let listings = parse_catalog(html, &anflat()).expect("parse");
        assert_eq!(
            listings,
            vec![
                Listing {
                    id: "FL1".to_string(),
                    url: "https://anflat.ru/rent/apartments/object-FL1".to_string(),
                },
                Listing {
                    id: "FL2".to_string(),
                    url: "https://anflat.ru/rent/apartments/object-FL2".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_parse_catalog_no_data_marker() {
        let html = r#"
            <html><body>
              <div class="catalog-none-data">Nothing matched your search</div>
              <div class="catalog-card">ID: FL1</div>
            </body></html>
        "#;

        let listings = parse_catalog(html, &anflat()).expect("parse");
        assert!(listings.is_empty());
    }

    #[test]
    fn test_parse_catalog_without_cards() {
        let listings = parse_catalog("<html><body></body></html>", &anflat()).expect("parse");
        assert!(listings.is_empty());
    }

    #[test]
    fn test_extract_ids_ignores_dangling_marker() {
        assert_eq!(extract_ids("flat ID: FL7 nice ID:"), vec!["FL7".to_string()]);
        assert!(extract_ids("no marker here").is_empty());
    }
}
