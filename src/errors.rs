// errors.rs
use crate::scraper::ScraperError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of a CLI run: the fetch itself, or persisting its result.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Scraper(#[from] ScraperError),

    #[error("Failed to render JSON output: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write JSON to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}
