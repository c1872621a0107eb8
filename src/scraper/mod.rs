pub mod extractor;
pub mod fetcher;
mod models;
mod scraper_error;
pub mod strategies;

pub use extractor::extract;
pub use fetcher::ListingFetcher;
pub use models::PropertyRecord;
pub use scraper_error::ScraperError;
