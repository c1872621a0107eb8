// cli.rs
use clap::Parser;
use std::path::PathBuf;

/// Real Estate Data Extractor
#[derive(Debug, Parser)]
#[command(name = "listing_extractor", version, about)]
pub struct Cli {
    /// Listing URL to extract
    #[arg(long)]
    pub url: String,

    /// Path to write JSON output
    #[arg(long, default_value = "output.json")]
    pub output: PathBuf,
}
