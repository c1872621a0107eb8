// app.rs
use crate::agent::ExtractionAgent;
use crate::cli::Cli;
use crate::config::AgentConfig;
use crate::domain::ExtractionOutput;
use crate::errors::AppError;
use std::fs;
use std::io::{self, Write};
use tracing::info;

/// One CLI invocation: extract, then write the payload to `cli.output` and
/// echo it to stdout. Nothing is written unless extraction succeeded.
pub fn run(cli: &Cli, config: AgentConfig) -> Result<ExtractionOutput, AppError> {
    let agent = ExtractionAgent::new(config)?;
    tracing::debug!(config = ?agent.config(), "agent ready");

    let output = agent.run(&cli.url)?;
    let json = output.to_json()?;

    fs::write(&cli.output, &json).map_err(|source| AppError::Write {
        path: cli.output.clone(),
        source,
    })?;
    info!(path = %cli.output.display(), "💾 Saved extraction");

    echo(io::stdout().lock(), &json)?;
    Ok(output)
}

/// Writes the payload to `out`; a closed pipe is an error, not a panic.
pub fn echo<W: Write>(mut out: W, json: &str) -> Result<(), AppError> {
    writeln!(out, "{json}")
        .and_then(|_| out.flush())
        .map_err(AppError::Stdout)
}
