//! Listing source: search filters, source configuration, and the fetcher.

pub mod filters;
pub mod source;

pub use filters::RentFilters;
pub use source::{Listing, ListingFetcher, ListingSourceConfig};
