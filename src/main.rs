use clap::Parser;
use std::process::ExitCode;

mod agent;
mod app;
mod cli;
mod config;
mod domain;
mod errors;
mod logging;
mod scraper;

#[cfg(test)]
mod tests;

fn main() -> ExitCode {
    // 1️⃣ Args first so `--help` and usage errors exit before anything else
    let cli = cli::Cli::parse();

    // 2️⃣ Logging to stderr
    logging::init_logging();

    // 3️⃣ Environment (+ optional .env)
    let config = config::AgentConfig::from_env();

    // 4️⃣ Fetch, extract, write
    match app::run(&cli, config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if let errors::AppError::Scraper(fetch) = &e {
                tracing::error!(
                    status = ?fetch.status(),
                    timeout = fetch.is_timeout(),
                    "fetch failed"
                );
            }
            tracing::error!(error = %e, url = %cli.url, "extraction failed");
            eprintln!("❌ Extraction failed: {e}");
            ExitCode::FAILURE
        }
    }
}
