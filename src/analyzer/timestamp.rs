//! Normalization of ISO-8601 timestamps to UTC instants.
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::{PrNotesError, Result};

/// Naive formats accepted when no offset is present, tried in order.
const NAIVE_DATETIME_FORMATS: [&str; 2] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an ISO-8601 timestamp into a UTC instant.
///
/// Offsets are honoured and converted. Inputs without an offset, including
/// bare dates, are taken to already be UTC. Anything else is an error.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        && let Some(naive) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(naive.and_utc());
    }

    Err(PrNotesError::timestamp(input))
}
