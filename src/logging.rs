// logging.rs
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "listing_extractor=info";

/// Installs the global subscriber. Logs go to stderr; stdout is reserved for
/// the JSON payload. Safe to call more than once.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
