// src/domain/payload.rs

use crate::scraper::PropertyRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: &str = "1.0";

/// Provenance attached to every emitted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub extracted_at: String,
    pub source_url: String,
    pub schema_version: String,
}

impl Metadata {
    pub fn new(source_url: &str, extracted_at: DateTime<Utc>) -> Self {
        Self {
            // e.g. 2026-10-19T14:03:07.512044Z
            extracted_at: extracted_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            source_url: source_url.to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }
}

/// The document written to disk and stdout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionOutput {
    pub metadata: Metadata,
    pub data: PropertyRecord,
}

impl ExtractionOutput {
    /// Pretty JSON, two-space indent, non-ASCII left as-is.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
