// src/domain/validator.rs

use crate::scraper::PropertyRecord;

/// Schema check applied to every record before it is emitted.
///
/// Currently a pass-through: `PropertyRecord` already guarantees that every
/// key exists and carries the right type. Type coercion and value rules
/// belong here once site-specific fields are populated.
pub fn validate(record: PropertyRecord) -> PropertyRecord {
    record
}
