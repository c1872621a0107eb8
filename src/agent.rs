// agent.rs
use crate::config::AgentConfig;
use crate::domain::{self, ExtractionOutput, Metadata};
use crate::scraper::{self, ListingFetcher, PropertyRecord, ScraperError};
use chrono::Utc;
use tracing::{info, instrument};

/// Fetch → extract → validate for a single listing URL.
///
/// Fetch failures are returned unchanged; there is no retry.
pub struct ExtractionAgent {
    config: AgentConfig,
    fetcher: ListingFetcher,
}

impl ExtractionAgent {
    pub fn new(config: AgentConfig) -> Result<Self, ScraperError> {
        Ok(Self::with_fetcher(config, ListingFetcher::new()?))
    }

    pub fn with_fetcher(config: AgentConfig, fetcher: ListingFetcher) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    #[instrument(skip(self))]
    pub fn extract(&self, listing_url: &str) -> Result<PropertyRecord, ScraperError> {
        let html = self.fetcher.fetch(listing_url)?;
        let parsed = scraper::extract(&html);
        Ok(domain::validate(parsed))
    }

    /// Same as [`extract`](Self::extract), wrapped with provenance metadata.
    pub fn run(&self, listing_url: &str) -> Result<ExtractionOutput, ScraperError> {
        let data = self.extract(listing_url)?;
        let metadata = Metadata::new(listing_url, Utc::now());

        info!(
            url = listing_url,
            images = data.image_urls.len(),
            "✅ Extraction complete"
        );

        Ok(ExtractionOutput { metadata, data })
    }
}
