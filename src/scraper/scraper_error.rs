use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while fetching a listing page.
///
/// All variants are fatal to a run; nothing here is retried.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Invalid listing url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with HTTP {status}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("Failed reading body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ScraperError {
    pub fn is_timeout(&self) -> bool {
        match self {
            ScraperError::Network { source, .. } | ScraperError::Body { source, .. } => {
                source.is_timeout()
            }
            _ => false,
        }
    }

    /// Status code for `HttpStatus` failures.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ScraperError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
