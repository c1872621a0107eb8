// fetcher.rs
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Single-shot HTML fetcher. One GET per call, no retries, no cookies.
pub struct ListingFetcher {
    client: Client,
}

impl ListingFetcher {
    pub fn new() -> Result<Self, ScraperError> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(ScraperError::Client)?;

        Ok(Self { client })
    }

    pub fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        let parsed = Url::parse(url).map_err(|source| ScraperError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        info!(url = %parsed, "fetching listing");

        let resp = self
            .client
            .get(parsed)
            .send()
            .map_err(|source| ScraperError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        // Reading the whole body releases the connection.
        let text = resp.text().map_err(|source| ScraperError::Body {
            url: url.to_string(),
            source,
        })?;

        debug!(%status, bytes = text.len(), "listing fetched");
        Ok(text)
    }
}
